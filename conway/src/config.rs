// config.rs - Construction-time styling and timing for a session

use egui::{Color32, Key};

use crate::error::ConfigError;
use crate::session::GenerationInterval;

/// Pixel size and colors of a single cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    pub width: u32,
    pub height: u32,
    pub alive_color: Color32,
    pub dead_color: Color32,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            alive_color: Color32::WHITE,
            dead_color: Color32::BLACK,
        }
    }
}

/// Board dimensions in cells and the color behind them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardStyle {
    pub width: u32,
    pub height: u32,
    pub bg_color: Color32,
}

impl Default for BoardStyle {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            bg_color: Color32::from_gray(127),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub toggle_pause: Key,
    pub clear: Key,
    pub interval_up: Key,
    pub interval_down: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            toggle_pause: Key::Space,
            clear: Key::K,
            interval_up: Key::ArrowUp,
            interval_down: Key::ArrowDown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub cell: CellStyle,
    pub board: BoardStyle,
    pub interval_ms: u32,
    pub keys: KeyBindings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell: CellStyle::default(),
            board: BoardStyle::default(),
            interval_ms: GenerationInterval::DEFAULT_MS,
            keys: KeyBindings::default(),
        }
    }
}

impl GameConfig {
    /// Checks dimensions and brings the initial interval into the supported range.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        let CellStyle { width: cw, height: ch, .. } = self.cell;
        if cw == 0 || ch == 0 {
            return Err(ConfigError::ZeroCellSize { width: cw, height: ch });
        }
        let BoardStyle { width: bw, height: bh, .. } = self.board;
        if bw == 0 || bh == 0 {
            return Err(ConfigError::ZeroBoardSize { width: bw, height: bh });
        }
        for (cells, cell_px) in [(bw, cw), (bh, ch)] {
            if cells.checked_mul(cell_px).is_none() {
                return Err(ConfigError::PixelExtentOverflow { cells, cell_px });
            }
        }

        let clamped = GenerationInterval::new(self.interval_ms).millis();
        if clamped != self.interval_ms {
            log::warn!(
                "Time per generation {}ms out of range, using {}ms",
                self.interval_ms,
                clamped
            );
            self.interval_ms = clamped;
        }
        Ok(self)
    }

    /// Surface size in pixels. Only meaningful after `validate`.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            self.board.width * self.cell.width,
            self.board.height * self.cell.height,
        )
    }
}

/// Parses `#rrggbb` (the leading `#` is optional).
pub fn parse_hex_color(text: &str) -> Result<Color32, ConfigError> {
    let invalid = || ConfigError::InvalidColor(text.to_owned());
    let hex = text.strip_prefix('#').unwrap_or(text);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}
