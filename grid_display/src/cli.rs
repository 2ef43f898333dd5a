// cli.rs - Command-line overrides for the session configuration

use clap::Parser;
use conway::{BoardStyle, CellStyle, ConfigError, GameConfig, GenerationInterval, parse_hex_color};

#[derive(Parser, Debug)]
#[command(name = "grid_display")]
#[command(about = "Conway's Game of Life on a wrap-around board, edited with the mouse")]
pub struct Cli {
    /// Cell width in pixels.
    #[arg(long, default_value_t = 10)]
    pub cell_width: u32,

    /// Cell height in pixels.
    #[arg(long, default_value_t = 10)]
    pub cell_height: u32,

    /// Board width in cells.
    #[arg(long, default_value_t = 100)]
    pub board_width: u32,

    /// Board height in cells.
    #[arg(long, default_value_t = 100)]
    pub board_height: u32,

    /// Initial time per generation in milliseconds (20 to 2000).
    #[arg(long, default_value_t = GenerationInterval::DEFAULT_MS)]
    pub interval_ms: u32,

    #[arg(long, default_value = "#ffffff")]
    pub alive_color: String,

    #[arg(long, default_value = "#000000")]
    pub dead_color: String,

    #[arg(long, default_value = "#7f7f7f")]
    pub background_color: String,
}

impl Cli {
    pub fn into_config(self) -> Result<GameConfig, ConfigError> {
        GameConfig {
            cell: CellStyle {
                width: self.cell_width,
                height: self.cell_height,
                alive_color: parse_hex_color(&self.alive_color)?,
                dead_color: parse_hex_color(&self.dead_color)?,
            },
            board: BoardStyle {
                width: self.board_width,
                height: self.board_height,
                bg_color: parse_hex_color(&self.background_color)?,
            },
            interval_ms: self.interval_ms,
            ..GameConfig::default()
        }
        .validate()
    }
}
