//! Integer-only shape rasterization on a [`PixelBuffer`].
//!
//! Lines stop at the first point that leaves the buffer. Rectangles are
//! clamped to the buffer. Circle outlines clip every point on its own.

use super::PixelBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CircleMode {
    Stroke,
    Fill,
}

/// Bresenham line from `(x0, y0)` to `(x1, y1)`, both ends included.
pub fn stroke_line(buffer: &mut PixelBuffer, x0: u16, y0: u16, x1: u16, y1: u16) {
    trace_line(buffer, x0.into(), y0.into(), x1.into(), y1.into());
}

/// Signed core of [`stroke_line`]. The line is truncated at the first point
/// outside the buffer: once it leaves, nothing further is drawn even if it
/// would come back in.
fn trace_line(buffer: &mut PixelBuffer, mut x0: i32, mut y0: i32, x1: i32, y1: i32) {
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if !buffer.contains(x0, y0) {
            break;
        }

        buffer.set_unchecked(x0 as usize, y0 as usize);
        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Fill `[x, x+w) x [y, y+h)`, clamped to the buffer.
pub fn fill_rectangle(buffer: &mut PixelBuffer, x: u16, y: u16, w: u16, h: u16) {
    let (x, y) = (usize::from(x), usize::from(y));
    let x_end = (x + usize::from(w)).min(buffer.width());
    let y_end = (y + usize::from(h)).min(buffer.height());

    for curr_y in y..y_end {
        for curr_x in x..x_end {
            buffer.set_unchecked(curr_x, curr_y);
        }
    }
}

/// Outline with corners `(x, y)` and `(x+w, y+h)`.
pub fn stroke_rectangle(buffer: &mut PixelBuffer, x: u16, y: u16, w: u16, h: u16) {
    let (x, y) = (i32::from(x), i32::from(y));
    let (right, bottom) = (x + i32::from(w), y + i32::from(h));

    trace_line(buffer, x, y, x, bottom); // left
    trace_line(buffer, right, y, right, bottom); // right
    trace_line(buffer, x, y, right, y); // top
    trace_line(buffer, x, bottom, right, bottom); // bottom
}

pub fn stroke_circle(buffer: &mut PixelBuffer, cx: u16, cy: u16, r: u16) {
    midpoint_circle(buffer, cx.into(), cy.into(), r.into(), CircleMode::Stroke);
}

pub fn fill_circle(buffer: &mut PixelBuffer, cx: u16, cy: u16, r: u16) {
    midpoint_circle(buffer, cx.into(), cy.into(), r.into(), CircleMode::Fill);
}

fn midpoint_circle(buffer: &mut PixelBuffer, cx: i32, cy: i32, r: i32, mode: CircleMode) {
    let mut f = 1 - r;
    let mut ddf_x = 1;
    let mut ddf_y = -2 * r;
    let mut x = 0;
    let mut y = r;

    match mode {
        CircleMode::Fill => fill_span(buffer, cx, cy, r),
        CircleMode::Stroke => {
            buffer.plot(cx, cy + r);
            buffer.plot(cx, cy - r);
            buffer.plot(cx + r, cy);
            buffer.plot(cx - r, cy);
        }
    }

    while x < y {
        if f >= 0 {
            y -= 1;
            ddf_y += 2;
            f += ddf_y;
        }
        x += 1;
        ddf_x += 2;
        f += ddf_x;

        match mode {
            CircleMode::Fill => {
                fill_span(buffer, cx, cy + y, x);
                fill_span(buffer, cx, cy - y, x);
                fill_span(buffer, cx, cy + x, y);
                fill_span(buffer, cx, cy - x, y);
            }
            CircleMode::Stroke => {
                buffer.plot(cx + x, cy + y);
                buffer.plot(cx - x, cy + y);
                buffer.plot(cx + x, cy - y);
                buffer.plot(cx - x, cy - y);
                buffer.plot(cx + y, cy + x);
                buffer.plot(cx - y, cy + x);
                buffer.plot(cx + y, cy - x);
                buffer.plot(cx - y, cy - x);
            }
        }
    }
}

/// Horizontal run `[cx - half, cx + half]` on row `y`, drawn as two lines
/// leaving from the in-bounds point closest to the centre. Each half is then
/// truncated at the canvas edge like any other line.
fn fill_span(buffer: &mut PixelBuffer, cx: i32, y: i32, half: i32) {
    let (left, right) = (cx - half, cx + half);
    let last_col = buffer.width() as i32 - 1;
    if last_col < 0 || y < 0 || y as usize >= buffer.height() || right < 0 || left > last_col {
        return;
    }

    let start = cx.clamp(left.max(0), right.min(last_col));
    trace_line(buffer, start, y, right, y);
    trace_line(buffer, start, y, left, y);
}
