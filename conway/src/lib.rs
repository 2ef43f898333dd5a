//! Conway's Game of Life on a toroidal board, with an event-driven controller that lets the
//! board be edited, paused and retimed while it runs.

pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod grid;
pub mod render;
pub mod session;
pub mod surface;
pub mod timer;

pub use board::Board;
pub use config::{BoardStyle, CellStyle, GameConfig, KeyBindings, parse_hex_color};
pub use controller::Controller;
pub use error::ConfigError;
pub use event::Event;
pub use session::{GenerationInterval, SessionState};
pub use surface::{InputSource, PixelRect, Surface};
pub use timer::GenerationTimer;
