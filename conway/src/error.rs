use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Cell size must be non-zero, got {width}x{height} px")]
    ZeroCellSize { width: u32, height: u32 },

    #[error("Board size must be non-zero, got {width}x{height} cells")]
    ZeroBoardSize { width: u32, height: u32 },

    #[error("Board of {cells} cells at {cell_px} px per cell does not fit in a window")]
    PixelExtentOverflow { cells: u32, cell_px: u32 },

    #[error("Invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}
