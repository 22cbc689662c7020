//! The animated shapes scene shown by the `ttybraille` binary.

use std::f64::consts::PI;

use crate::renderer::BrailleCanvas;

/// Frames that share one style before the theme cycle advances.
pub const FRAMES_PER_STYLE: usize = 4;

/// Boxes and circles drifting diagonally across the canvas plus a line
/// sweeping around its centre once per `frames` frames.
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    frames: usize,
}

impl Scene {
    pub fn new(frames: usize) -> Self {
        Self {
            frames: frames.max(1),
        }
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Wipe `canvas` and draw frame `frame` on it.
    pub fn draw(&self, canvas: &mut BrailleCanvas, frame: usize) {
        let pw = canvas.pixel_width() as i64;
        let ph = canvas.pixel_height() as i64;
        let i = frame as i64;

        canvas.wipe();

        // boxes
        canvas.stroke_rectangle(coord(5 + i), coord(5 + i), 10, 10);
        canvas.fill_rectangle(coord(pw - 15 - i), coord(ph - 15 - i), 10, 10);

        // circles
        let r = coord(4 + i / 2);
        canvas.stroke_circle(coord(pw - 15 - i), coord(5 + i), r);
        canvas.fill_circle(coord(5 + i), coord(ph - 15 - i), r);

        // sweeping line
        let angle = 2.0 * PI * frame as f64 / self.frames as f64;
        let (cx, cy) = (pw as f64 / 2.0, ph as f64 / 2.0);
        let end_x = (1.0 + 0.5 * angle.cos()) * cx;
        let end_y = (1.0 + 0.5 * angle.sin()) * cy;
        canvas.stroke_line(
            coord(pw / 2),
            coord(ph / 2),
            coord(end_x as i64),
            coord(end_y as i64),
        );
    }
}

/// Negative positions pin to the origin, huge ones to the largest pixel
/// coordinate; the canvas clips either way.
fn coord(value: i64) -> u16 {
    value.clamp(0, i64::from(u16::MAX)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_draws_every_shape() {
        let scene = Scene::new(100);
        let mut canvas = BrailleCanvas::new(0, 0, 40, 12).unwrap();
        scene.draw(&mut canvas, 0);

        // stroked box corner, filled box, sweep line start, disc edge
        assert_eq!(canvas.get_pixel(5, 5), 1);
        assert_eq!(canvas.get_pixel(70, 38), 1);
        assert_eq!(canvas.get_pixel(40, 24), 1);
        assert_eq!(canvas.get_pixel(9, 33), 1);
        assert_eq!(canvas.get_pixel(10, 33), 0);
    }

    #[test]
    fn frames_replace_each_other() {
        let scene = Scene::new(10);
        let mut canvas = BrailleCanvas::new(0, 0, 40, 12).unwrap();
        scene.draw(&mut canvas, 3);
        let third = canvas.pixels().clone();

        scene.draw(&mut canvas, 5);
        scene.draw(&mut canvas, 3);
        assert_eq!(canvas.pixels(), &third);
    }

    #[test]
    fn tiny_canvas_survives_every_frame() {
        let scene = Scene::new(100);
        let mut canvas = BrailleCanvas::new(0, 0, 1, 1).unwrap();
        for frame in 0..scene.frames() {
            scene.draw(&mut canvas, frame);
        }
    }

    #[test]
    fn zero_frames_is_one_frame() {
        assert_eq!(Scene::new(0).frames(), 1);
    }
}
