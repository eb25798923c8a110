// File: src/core/geometry.rs
//! Stroke geometry on the glyph grid.
//!
//! All constants are in pixels at scale 1.0. A glyph cell is
//! [`GLYPH_TOTAL_X`] wide and [`GLYPH_TOTAL_Y`] tall, measured from its
//! top-left origin.

use crate::core::types::StrokeId;

pub const GLYPH_OUTER_Y: f32 = 15.0;
pub const GLYPH_C_Y1: f32 = 2.0 * GLYPH_OUTER_Y;
pub const GLYPH_C_Y2: f32 = GLYPH_C_Y1 + 2.0 * GLYPH_OUTER_Y;
pub const GLYPH_MID_Y: f32 = 4.0 * GLYPH_OUTER_Y;
pub const GLYPH_TOTAL_Y: f32 = 2.0 * GLYPH_OUTER_Y + GLYPH_MID_Y;
/// Half the cell width; also the centre column.
pub const GLYPH_X: f32 = 2.0 * GLYPH_OUTER_Y;
pub const GLYPH_TOTAL_X: f32 = 2.0 * GLYPH_X;
pub const WORD_LINE_Y: f32 = GLYPH_TOTAL_Y / 2.0;
pub const GLYPH_DOT_RAD: f32 = 5.0;
pub const GLYPH_THICK: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One primitive for the drawing backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    Line { from: Point, to: Point, thickness: f32 },
    Circle { center: Point, radius: f32, thickness: f32 },
}

/// A drawing backend that can take line and circle primitives.
pub trait Canvas {
    fn line(&mut self, from: Point, to: Point, thickness: f32);
    fn circle(&mut self, center: Point, radius: f32, thickness: f32);
}

impl DrawOp {
    pub fn apply<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        match *self {
            DrawOp::Line { from, to, thickness } => canvas.line(from, to, thickness),
            DrawOp::Circle { center, radius, thickness } => {
                canvas.circle(center, radius, thickness)
            }
        }
    }
}

/// Turns a stroke list into primitives for a glyph whose cell starts at
/// `origin`, scaled uniformly by `scale`.
///
/// With `word_line` set, a horizontal guide is drawn first across the cell and
/// the C4 and V3 spines stop at it. Nothing after a [`StrokeId::Dot`] is drawn.
pub fn render(strokes: &[StrokeId], origin: Point, scale: f32, word_line: bool) -> Vec<DrawOp> {
    let at = |x: f32, y: f32| Point::new(origin.x + x * scale, origin.y + y * scale);
    let thickness = GLYPH_THICK * scale;
    let line = |from: Point, to: Point| DrawOp::Line { from, to, thickness };

    let c1 = at(GLYPH_X, GLYPH_C_Y1);
    let c2 = at(GLYPH_X, GLYPH_C_Y2);
    let word_line_left = at(0.0, WORD_LINE_Y);

    let mut ops = Vec::with_capacity(strokes.len() + 2);

    if word_line {
        ops.push(line(word_line_left, at(GLYPH_TOTAL_X, WORD_LINE_Y)));
    }

    for stroke in strokes {
        let (from, to) = match stroke {
            StrokeId::V1 => (at(0.0, GLYPH_OUTER_Y), at(GLYPH_X, 0.0)),
            StrokeId::V2 => (at(GLYPH_X, 0.0), at(GLYPH_TOTAL_X, GLYPH_OUTER_Y)),
            StrokeId::V3 => {
                let top = at(0.0, GLYPH_OUTER_Y);
                let bottom = at(0.0, GLYPH_OUTER_Y + GLYPH_MID_Y);
                if word_line {
                    // The lower part restarts level with the bottom consonant tier.
                    ops.push(line(at(0.0, GLYPH_C_Y2), bottom));
                    (top, word_line_left)
                } else {
                    (top, bottom)
                }
            }
            StrokeId::V4 => (
                at(0.0, GLYPH_OUTER_Y + GLYPH_MID_Y),
                at(GLYPH_X, GLYPH_TOTAL_Y),
            ),
            StrokeId::V5 => (
                at(GLYPH_X, GLYPH_TOTAL_Y),
                at(GLYPH_TOTAL_X, GLYPH_OUTER_Y + GLYPH_MID_Y),
            ),
            StrokeId::C1 => (at(0.0, GLYPH_OUTER_Y), c1),
            StrokeId::C2 => (at(GLYPH_X, 0.0), c1),
            StrokeId::C3 => (c1, at(GLYPH_TOTAL_X, GLYPH_OUTER_Y)),
            StrokeId::C4 => {
                if word_line {
                    (c1, at(GLYPH_X, WORD_LINE_Y))
                } else {
                    (c1, c2)
                }
            }
            StrokeId::C5 => (c2, at(0.0, GLYPH_OUTER_Y + GLYPH_MID_Y)),
            StrokeId::C6 => (c2, at(GLYPH_X, GLYPH_TOTAL_Y)),
            StrokeId::C7 => (c2, at(GLYPH_TOTAL_X, GLYPH_OUTER_Y + GLYPH_MID_Y)),
            StrokeId::Dot => {
                ops.push(DrawOp::Circle {
                    center: at(GLYPH_X, GLYPH_TOTAL_Y + GLYPH_DOT_RAD),
                    radius: GLYPH_DOT_RAD * scale,
                    thickness,
                });
                break;
            }
        };
        ops.push(line(from, to));
    }

    ops
}

/// Renders straight onto `canvas`.
pub fn draw<C: Canvas + ?Sized>(
    canvas: &mut C,
    strokes: &[StrokeId],
    origin: Point,
    scale: f32,
    word_line: bool,
) {
    for op in render(strokes, origin, scale, word_line) {
        op.apply(canvas);
    }
}
