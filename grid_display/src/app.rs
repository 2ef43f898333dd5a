// app.rs - eframe shell around the controller: one controller step per frame

use std::time::Instant;

use conway::{Controller, GameConfig, GenerationTimer};
use egui::{Color32, Rect, Vec2, pos2};

use crate::input::FrameInput;
use crate::surface::TextureSurface;

pub struct GridDisplayApp {
    controller: Controller,
    surface: TextureSurface,
    timer: GenerationTimer,
    title: String,
}

impl GridDisplayApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &GameConfig) -> Self {
        let (width, height) = config.pixel_size();
        let mut controller = Controller::new(config);
        let mut surface =
            TextureSurface::new(cc.egui_ctx.clone(), width, height, config.board.bg_color);
        let mut timer = GenerationTimer::new();

        let mut input = FrameInput::new(Vec::new(), false, None, &mut timer, Instant::now());
        controller.start(&mut surface, &mut input);

        Self {
            controller,
            surface,
            timer,
            title: String::new(),
        }
    }

    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = self.controller.status_line();
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }
}

impl eframe::App for GridDisplayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let [width, height] = self.surface.size();
        let board_size = Vec2::new(width as f32, height as f32);
        let now = Instant::now();

        let running = egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(board_size, egui::Sense::click_and_drag());

                let mut input = FrameInput::capture(ctx, response.rect.min, &mut self.timer, now);
                let running = self.controller.step(&mut self.surface, &mut input);

                if let Some(texture) = self.surface.texture_id() {
                    let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
                    painter.image(texture, response.rect, uv, Color32::WHITE);
                }
                running
            })
            .inner;

        if !running {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.sync_title(ctx);

        // Wake up for the next generation tick even when no input arrives.
        if let Some(delay) = self.timer.until_next(now) {
            ctx.request_repaint_after(delay);
        }
    }
}
