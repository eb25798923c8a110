// File: src/export.rs
//! Page layout and SVG output.

use crate::config::EditorConfig;
use crate::core::geometry::{self, Canvas, Point, GLYPH_TOTAL_X, GLYPH_TOTAL_Y, GLYPH_X};
use crate::core::glyph::Word;
use std::mem;
use std::path::Path;
use svg::node::element::{Circle, Group, Line, Rectangle};
use svg::Document;

/// Where one glyph goes on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub word: usize,
    pub glyph: usize,
    pub origin: Point,
}

/// Lays words out left to right, half a cell apart, starting a new row when a
/// word would run past `wrap_width`. A word wider than the page gets its own row.
pub fn layout(words: &[Word], editor: &EditorConfig) -> Vec<Placement> {
    let scale = editor.scale;
    let margin = editor.margin;
    let mut pos = Point::new(margin, margin);
    let mut out = Vec::new();

    for (word_idx, word) in words.iter().enumerate() {
        let width = word.len() as f32 * GLYPH_TOTAL_X * scale;
        if pos.x > margin && pos.x + width > editor.wrap_width {
            pos.x = margin;
            pos.y += GLYPH_TOTAL_Y * scale + margin;
        }
        for glyph_idx in 0..word.len() {
            out.push(Placement {
                word: word_idx,
                glyph: glyph_idx,
                origin: pos,
            });
            pos.x += GLYPH_TOTAL_X * scale;
        }
        pos.x += GLYPH_X * scale;
    }

    out
}

/// Collects primitives as SVG elements.
pub struct SvgCanvas {
    group: Group,
    color: String,
}

impl SvgCanvas {
    pub fn new(color: &str) -> Self {
        Self {
            group: Group::new(),
            color: color.to_string(),
        }
    }

    pub fn into_group(self) -> Group {
        self.group
    }
}

impl Canvas for SvgCanvas {
    fn line(&mut self, from: Point, to: Point, thickness: f32) {
        let line = Line::new()
            .set("x1", from.x)
            .set("y1", from.y)
            .set("x2", to.x)
            .set("y2", to.y)
            .set("stroke", self.color.as_str())
            .set("stroke-width", thickness)
            .set("stroke-linecap", "round");
        self.group = mem::replace(&mut self.group, Group::new()).add(line);
    }

    fn circle(&mut self, center: Point, radius: f32, thickness: f32) {
        let circle = Circle::new()
            .set("cx", center.x)
            .set("cy", center.y)
            .set("r", radius)
            .set("fill", "none")
            .set("stroke", self.color.as_str())
            .set("stroke-width", thickness);
        self.group = mem::replace(&mut self.group, Group::new()).add(circle);
    }
}

/// Draws every word onto a white page sized to fit.
pub fn page_document(words: &mut [Word], editor: &EditorConfig) -> Document {
    let placements = layout(words, editor);
    let mut canvas = SvgCanvas::new("black");

    let mut height = editor.margin;
    for p in &placements {
        let glyph = &mut words[p.word].glyphs_mut()[p.glyph];
        geometry::draw(
            &mut canvas,
            glyph.strokes(),
            p.origin,
            editor.scale,
            editor.word_line,
        );
        height = height.max(p.origin.y + GLYPH_TOTAL_Y * editor.scale + editor.margin);
    }
    let width = editor.wrap_width;

    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", "white");

    Document::new()
        .add(background)
        .add(canvas.into_group())
        .set("viewBox", (0, 0, width, height))
        .set("width", format!("{width}px"))
        .set("height", format!("{height}px"))
}

pub fn save_page(path: &Path, words: &mut [Word], editor: &EditorConfig) -> std::io::Result<()> {
    svg::save(path, &page_document(words, editor))
}
