//! CPU drawing into an RGBA8 frame
//!
//! Shapes take `sim::Rect` in canvas pixels and are clipped to the frame, so
//! a ball overshooting the left wall by a few pixels draws partially.

use super::font::{self, GLYPH_H, GLYPH_W};
use crate::sim::Rect;

pub type Color = [u8; 4];

pub const WHITE: Color = [255, 255, 255, 255];
pub const BLACK: Color = [0, 0, 0, 255];
pub const RED: Color = [255, 50, 50, 255];
pub const GREEN: Color = [50, 255, 50, 255];
pub const BLUE: Color = [50, 50, 255, 255];
pub const GRAY: Color = [40, 40, 40, 255];
pub const LIGHT_GRAY: Color = [160, 160, 160, 255];

/// Borrowed RGBA frame with simple fill primitives
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: i32,
    height: i32,
}

impl<'a> Canvas<'a> {
    /// Wrap `frame`, which must hold `width * height` RGBA pixels
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        debug_assert!(frame.len() >= (width as usize) * (height as usize) * 4);
        Self {
            frame,
            width: width as i32,
            height: height as i32,
        }
    }

    /// Read back one pixel
    #[cfg(test)]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let idx = self.index(x, y)?;
        let px = self.frame.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    #[cfg(test)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(((y * self.width + x) * 4) as usize)
    }

    pub fn clear(&mut self, color: Color) {
        for px in self.frame.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    /// Fill pixels `x0..x1` on row `y`, clipped
    fn fill_span(&mut self, y: i32, x0: i32, x1: i32, color: Color) {
        if y < 0 || y >= self.height {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width);
        if x0 >= x1 {
            return;
        }
        let start = ((y * self.width + x0) * 4) as usize;
        let end = ((y * self.width + x1) * 4) as usize;
        if let Some(row) = self.frame.get_mut(start..end) {
            for px in row.chunks_exact_mut(4) {
                px.copy_from_slice(&color);
            }
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        for y in rect.top()..rect.bottom() {
            self.fill_span(y, rect.left(), rect.right(), color);
        }
    }

    /// Rectangle with quarter-circle corners of `radius`
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: i32, color: Color) {
        let r = radius.clamp(0, rect.w.min(rect.h) / 2);
        if r == 0 {
            self.fill_rect(rect, color);
            return;
        }
        let rf = r as f32;
        for row in 0..rect.h {
            // Distance (in rows) into the nearest rounded band
            let band = row.min(rect.h - 1 - row);
            let inset = if band < r {
                let dy = rf - band as f32 - 0.5;
                (rf - (rf * rf - dy * dy).max(0.0).sqrt()).round() as i32
            } else {
                0
            };
            self.fill_span(rect.y + row, rect.left() + inset, rect.right() - inset, color);
        }
    }

    /// Ellipse inscribed in `rect`
    pub fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        if rect.w <= 0 || rect.h <= 0 {
            return;
        }
        let rx = rect.w as f32 / 2.0;
        let ry = rect.h as f32 / 2.0;
        for row in 0..rect.h {
            let dy = (row as f32 + 0.5 - ry) / ry;
            let half = rx * (1.0 - dy * dy).max(0.0).sqrt();
            let x0 = (rect.x as f32 + rx - half).round() as i32;
            let x1 = (rect.x as f32 + rx + half).round() as i32;
            self.fill_span(rect.y + row, x0, x1, color);
        }
    }

    /// Draw one line of text with its top-left corner at (x, y)
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, color: Color, scale: i32) {
        let scale = scale.max(1);
        let mut cursor = x;
        for ch in text.chars() {
            let rows = font::glyph(ch);
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..GLYPH_W {
                    if bits & (1 << (GLYPH_W - 1 - col)) == 0 {
                        continue;
                    }
                    let px = Rect::new(
                        cursor + col * scale,
                        y + row as i32 * scale,
                        scale,
                        scale,
                    );
                    self.fill_rect(px, color);
                }
            }
            cursor += font::advance(scale);
            if cursor >= self.width {
                break;
            }
        }
    }

    /// Draw text centred inside `rect`
    pub fn draw_text_centered(&mut self, rect: Rect, text: &str, color: Color, scale: i32) {
        let (w, h) = font::text_size(text, scale);
        let c = rect.center();
        let x = c.x - w / 2;
        let y = c.y - h / 2;
        self.draw_text(x, y, text, color, scale);
    }
}

/// Text height at `scale`, for vertical layout
pub fn line_height(scale: i32) -> i32 {
    GLYPH_H * scale.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(w: u32, h: u32) -> Vec<u8> {
        vec![0u8; (w * h * 4) as usize]
    }

    #[test]
    fn test_fill_rect_clipped() {
        let mut buf = frame(10, 10);
        let mut canvas = Canvas::new(&mut buf, 10, 10);
        canvas.fill_rect(Rect::new(-3, 8, 5, 5), RED);
        assert_eq!(canvas.pixel(0, 8), Some(RED));
        assert_eq!(canvas.pixel(1, 9), Some(RED));
        assert_eq!(canvas.pixel(2, 9), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(0, 7), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(-1, 8), None);
    }

    #[test]
    fn test_clear() {
        let mut buf = frame(4, 4);
        let mut canvas = Canvas::new(&mut buf, 4, 4);
        canvas.clear(GRAY);
        assert_eq!(canvas.pixel(3, 3), Some(GRAY));
    }

    #[test]
    fn test_rounded_corners_left_blank() {
        let mut buf = frame(20, 20);
        let mut canvas = Canvas::new(&mut buf, 20, 20);
        canvas.fill_rounded_rect(Rect::new(0, 0, 20, 20), 5, BLUE);
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(19, 19), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(10, 0), Some(BLUE));
        assert_eq!(canvas.pixel(0, 10), Some(BLUE));
    }

    #[test]
    fn test_ellipse_fills_centre_not_corners() {
        let mut buf = frame(12, 12);
        let mut canvas = Canvas::new(&mut buf, 12, 12);
        canvas.fill_ellipse(Rect::new(0, 0, 12, 12), WHITE);
        assert_eq!(canvas.pixel(6, 6), Some(WHITE));
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(11, 11), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_text_draws_pixels() {
        let mut buf = frame(40, 20);
        let mut canvas = Canvas::new(&mut buf, 40, 20);
        canvas.draw_text(0, 0, "I", WHITE, 2);
        // Top bar of the I spans columns 1..4 at scale 2
        assert_eq!(canvas.pixel(2, 0), Some(WHITE));
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(line_height(2), 14);
    }
}
