// input.rs - One frame's worth of egui input, plus due generation ticks

use std::time::{Duration, Instant};

use conway::{Event, GenerationTimer, InputSource};
use egui::Pos2;

pub struct FrameInput<'a> {
    events: Vec<egui::Event>,
    close_requested: bool,
    pointer: Option<Pos2>,
    timer: &'a mut GenerationTimer,
    now: Instant,
}

impl<'a> FrameInput<'a> {
    pub fn new(
        events: Vec<egui::Event>,
        close_requested: bool,
        pointer: Option<Pos2>,
        timer: &'a mut GenerationTimer,
        now: Instant,
    ) -> Self {
        Self {
            events,
            close_requested,
            pointer,
            timer,
            now,
        }
    }

    /// Snapshots the context's input. Pointer positions become relative to `origin`, the
    /// board's top-left corner on screen.
    pub fn capture(
        ctx: &egui::Context,
        origin: Pos2,
        timer: &'a mut GenerationTimer,
        now: Instant,
    ) -> Self {
        let (events, close_requested, pointer) = ctx.input(|i| {
            (
                i.events.clone(),
                i.viewport().close_requested(),
                i.pointer.latest_pos(),
            )
        });
        let pointer = pointer.map(|pos| (pos - origin).to_pos2());
        Self::new(events, close_requested, pointer, timer, now)
    }
}

impl InputSource for FrameInput<'_> {
    fn poll_events(&mut self) -> Vec<Event> {
        let mut events: Vec<Event> = self.events.iter().map(Event::from_egui).collect();
        self.events.clear();
        if std::mem::take(&mut self.close_requested) {
            events.push(Event::Quit);
        }
        if self.timer.poll(self.now) {
            events.push(Event::GenerationTick);
        }
        events
    }

    fn schedule_repeating(&mut self, interval: Duration) {
        self.timer.schedule(interval, self.now);
    }

    fn pointer_position(&self) -> Option<Pos2> {
        self.pointer
    }
}
