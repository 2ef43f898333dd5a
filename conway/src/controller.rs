// controller.rs - Turns input and timer events into board edits, generations and redraws

use egui::{PointerButton, Pos2};

use crate::board::Board;
use crate::config::{BoardStyle, CellStyle, GameConfig, KeyBindings};
use crate::event::Event;
use crate::render;
use crate::session::{GenerationInterval, SessionState};
use crate::surface::{InputSource, Surface};

pub struct Controller {
    board: Board,
    cell_style: CellStyle,
    board_style: BoardStyle,
    keys: KeyBindings,
    session: SessionState,
}

impl Controller {
    /// Expects a config that has been through `GameConfig::validate`.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(config.board.width as usize, config.board.height as usize),
            cell_style: config.cell,
            board_style: config.board,
            keys: config.keys,
            session: SessionState::new(GenerationInterval::new(config.interval_ms)),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn is_running(&self) -> bool {
        self.session.running
    }

    pub fn status_line(&self) -> String {
        format!(
            "Conway's Game of Life | generation {} | {} alive{}",
            self.board.generation(),
            self.board.live_count(),
            if self.session.generation_paused { " | paused" } else { "" }
        )
    }

    /// Paints the initial frame and arms the generation timer.
    pub fn start<S: Surface, I: InputSource>(&mut self, surface: &mut S, input: &mut I) {
        render::fill_background(surface, &self.cell_style, &self.board_style);
        render::draw_cells(surface, &self.cell_style, &self.board);
        input.schedule_repeating(self.session.interval.as_duration());
        log::info!(
            "Started {}x{} board, time per generation {}ms",
            self.board.width(),
            self.board.height(),
            self.session.interval.millis()
        );
    }

    /// Loops until a quit request, then releases the surface.
    pub fn run<S: Surface, I: InputSource>(&mut self, surface: &mut S, input: &mut I) {
        self.start(surface, input);
        while self.step(surface, input) {}
    }

    /// One pass of the main loop. Returns whether the session is still running.
    pub fn step<S: Surface, I: InputSource>(&mut self, surface: &mut S, input: &mut I) -> bool {
        if !self.session.running {
            return false;
        }

        for event in input.poll_events() {
            self.handle_event(event, surface, input);
        }

        if self.session.mouse_revive {
            self.paint_at_pointer(true, surface, input);
        }
        if self.session.mouse_kill {
            self.paint_at_pointer(false, surface, input);
        }

        surface.present();

        if !self.session.running {
            surface.release();
            log::info!("Session ended at generation {}", self.board.generation());
        }
        self.session.running
    }

    pub fn handle_event<S: Surface, I: InputSource>(
        &mut self,
        event: Event,
        surface: &mut S,
        input: &mut I,
    ) {
        match event {
            Event::Quit => self.session.running = false,
            Event::PointerPressed(button) => self.set_mouse_flag(button, true),
            Event::PointerReleased(button) => self.set_mouse_flag(button, false),
            Event::KeyPressed(key) if key == self.keys.toggle_pause => {
                self.session.toggle_pause();
                log::info!("Is generation paused: {}", self.session.generation_paused);
            }
            Event::KeyPressed(key) if key == self.keys.clear => {
                self.board.clear();
                render::draw_cells(surface, &self.cell_style, &self.board);
                log::info!("Killed all cells");
            }
            Event::KeyPressed(key) if key == self.keys.interval_up => {
                self.session.interval.lengthen();
                self.reschedule(input);
            }
            Event::KeyPressed(key) if key == self.keys.interval_down => {
                self.session.interval.shorten();
                self.reschedule(input);
            }
            Event::KeyPressed(_) | Event::KeyReleased(_) => {}
            Event::GenerationTick => {
                if !self.session.generation_paused {
                    self.board.advance_generation();
                    render::draw_cells(surface, &self.cell_style, &self.board);
                    log::trace!("Generation {}", self.board.generation());
                }
            }
            Event::Other => {}
        }
    }

    fn set_mouse_flag(&mut self, button: PointerButton, held: bool) {
        match button {
            PointerButton::Primary => self.session.mouse_revive = held,
            PointerButton::Secondary => self.session.mouse_kill = held,
            _ => {}
        }
    }

    fn reschedule<I: InputSource>(&mut self, input: &mut I) {
        input.schedule_repeating(self.session.interval.as_duration());
        log::info!("Time per generation {}ms", self.session.interval.millis());
    }

    fn paint_at_pointer<S: Surface, I: InputSource>(
        &mut self,
        alive: bool,
        surface: &mut S,
        input: &I,
    ) {
        let Some(pos) = input.pointer_position() else {
            return;
        };
        let (x, y) = cell_at(&self.cell_style, &self.board, pos);
        self.board.set_cell(x, y, alive);
        render::draw_cell(surface, &self.cell_style, &self.board, x, y);
        log::trace!("Set cell ({x}, {y}) alive={alive}");
    }
}

/// Cell under pixel position `pos`, clamped to the board so edge drags stay in range.
pub fn cell_at(cell: &CellStyle, board: &Board, pos: Pos2) -> (usize, usize) {
    // `as` saturates: negative and NaN coordinates become 0.
    let px = pos.x.floor() as u32;
    let py = pos.y.floor() as u32;
    let x = (px / cell.width) as usize;
    let y = (py / cell.height) as usize;
    (x.min(board.width() - 1), y.min(board.height() - 1))
}
