// event.rs - Input and timer events consumed by the controller

use egui::{Key, PointerButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Quit,
    PointerPressed(PointerButton),
    PointerReleased(PointerButton),
    KeyPressed(Key),
    KeyReleased(Key),
    GenerationTick,
    Other,
}

impl Event {
    /// Maps an egui input event. Auto-repeated key presses count as `Other` so that holding
    /// a key acts once, like a single OS key-down.
    pub fn from_egui(event: &egui::Event) -> Self {
        match *event {
            egui::Event::PointerButton { button, pressed: true, .. } => Self::PointerPressed(button),
            egui::Event::PointerButton { button, pressed: false, .. } => Self::PointerReleased(button),
            egui::Event::Key { repeat: true, .. } => Self::Other,
            egui::Event::Key { key, pressed: true, .. } => Self::KeyPressed(key),
            egui::Event::Key { key, pressed: false, .. } => Self::KeyReleased(key),
            _ => Self::Other,
        }
    }
}
