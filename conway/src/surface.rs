// surface.rs - What the core needs from the window: a drawable surface and an input queue

use std::time::Duration;

use egui::{Color32, Pos2};

use crate::event::Event;

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }
}

pub trait Surface {
    /// Paints a rectangle; anything outside the surface is clipped.
    fn fill_rect(&mut self, rect: PixelRect, color: Color32);

    /// Shows everything drawn since the previous present.
    fn present(&mut self);

    /// Frees display resources. Calling it again is a no-op.
    fn release(&mut self);
}

pub trait InputSource {
    /// Every queued event, oldest first, including generation ticks that have come due.
    fn poll_events(&mut self) -> Vec<Event>;

    /// Re-arms the generation timer, replacing any earlier schedule.
    fn schedule_repeating(&mut self, interval: Duration);

    /// Pointer position relative to the board's top-left pixel.
    fn pointer_position(&self) -> Option<Pos2>;
}
