// render.rs - Draws board cells onto a surface

use crate::board::Board;
use crate::config::{BoardStyle, CellStyle};
use crate::surface::{PixelRect, Surface};

/// Pixel rectangle covered by cell `(x, y)`.
pub fn cell_rect(cell: &CellStyle, x: usize, y: usize) -> PixelRect {
    PixelRect::new(
        x as u32 * cell.width,
        y as u32 * cell.height,
        cell.width,
        cell.height,
    )
}

pub fn fill_background<S: Surface>(surface: &mut S, cell: &CellStyle, board: &BoardStyle) {
    let rect = PixelRect::new(0, 0, board.width * cell.width, board.height * cell.height);
    surface.fill_rect(rect, board.bg_color);
}

pub fn draw_cell<S: Surface>(surface: &mut S, style: &CellStyle, board: &Board, x: usize, y: usize) {
    let color = if board.is_alive(x, y) {
        style.alive_color
    } else {
        style.dead_color
    };
    surface.fill_rect(cell_rect(style, x, y), color);
}

pub fn draw_cells<S: Surface>(surface: &mut S, style: &CellStyle, board: &Board) {
    for x in 0..board.width() {
        for y in 0..board.height() {
            draw_cell(surface, style, board, x, y);
        }
    }
}
