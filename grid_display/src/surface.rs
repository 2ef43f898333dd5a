// surface.rs - A pixel buffer mirrored into an egui texture

use conway::{PixelRect, Surface};
use egui::{Color32, ColorImage, TextureHandle, TextureId, TextureOptions};

pub struct TextureSurface {
    ctx: egui::Context,
    image: ColorImage,
    texture: Option<TextureHandle>,
    dirty: bool,
}

impl TextureSurface {
    pub fn new(ctx: egui::Context, width: u32, height: u32, background: Color32) -> Self {
        Self {
            ctx,
            image: ColorImage::new([width as usize, height as usize], background),
            texture: None,
            dirty: true,
        }
    }

    pub fn size(&self) -> [usize; 2] {
        self.image.size
    }

    /// The last presented frame, if one has been uploaded and not released.
    pub fn texture_id(&self) -> Option<TextureId> {
        self.texture.as_ref().map(TextureHandle::id)
    }

    #[cfg(test)]
    fn pixel(&self, x: usize, y: usize) -> Color32 {
        self.image.pixels[y * self.image.size[0] + x]
    }
}

impl Surface for TextureSurface {
    fn fill_rect(&mut self, rect: PixelRect, color: Color32) {
        let [width, height] = self.image.size;
        let x0 = (rect.x as usize).min(width);
        let y0 = (rect.y as usize).min(height);
        let x1 = (rect.x as usize + rect.width as usize).min(width);
        let y1 = (rect.y as usize + rect.height as usize).min(height);
        for y in y0..y1 {
            self.image.pixels[y * width + x0..y * width + x1].fill(color);
        }
        self.dirty = true;
    }

    fn present(&mut self) {
        if !self.dirty {
            return;
        }
        // Nearest filtering keeps cell edges crisp when the window is scaled.
        match &mut self.texture {
            Some(texture) => texture.set(self.image.clone(), TextureOptions::NEAREST),
            None => {
                self.texture = Some(self.ctx.load_texture(
                    "board",
                    self.image.clone(),
                    TextureOptions::NEAREST,
                ));
            }
        }
        self.dirty = false;
    }

    fn release(&mut self) {
        if self.texture.take().is_some() {
            log::debug!("Released board texture");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> TextureSurface {
        TextureSurface::new(egui::Context::default(), 6, 4, Color32::GRAY)
    }

    #[test]
    fn starts_filled_with_background() {
        let surface = surface();
        assert_eq!(surface.size(), [6, 4]);
        assert_eq!(surface.pixel(5, 3), Color32::GRAY);
        assert_eq!(surface.texture_id(), None);
    }

    #[test]
    fn fill_rect_paints_only_inside_and_clips() {
        let mut surface = surface();
        surface.fill_rect(PixelRect::new(4, 2, 10, 10), Color32::WHITE);
        assert_eq!(surface.pixel(4, 2), Color32::WHITE);
        assert_eq!(surface.pixel(5, 3), Color32::WHITE);
        assert_eq!(surface.pixel(3, 2), Color32::GRAY);
        assert_eq!(surface.pixel(4, 1), Color32::GRAY);

        surface.fill_rect(PixelRect::new(50, 50, 2, 2), Color32::RED);
        assert!(surface.image.pixels.iter().all(|&c| c != Color32::RED));
    }

    #[test]
    fn present_uploads_and_release_frees() {
        let mut surface = surface();
        surface.present();
        assert!(surface.texture_id().is_some());
        surface.release();
        surface.release();
        assert_eq!(surface.texture_id(), None);
    }
}
