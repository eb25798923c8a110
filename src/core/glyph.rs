// File: src/core/glyph.rs
use crate::core::signature;
use crate::core::types::{Consonant, StrokeId, Vowel};

/// One symbol: at most one consonant, at most one vowel and the marker dot.
///
/// The stroke list is cached. Every setter marks the cache dirty, and
/// [`Glyph::strokes`] rebuilds it on the next read, so the cache always equals
/// [`Glyph::compute_strokes`] for the current fields.
#[derive(Debug, Clone)]
pub struct Glyph {
    consonant: Option<Consonant>,
    vowel: Option<Vowel>,
    marker: bool,

    cached: Vec<StrokeId>,
    dirty: bool,
}

impl Default for Glyph {
    fn default() -> Self {
        Self::blank()
    }
}

impl Glyph {
    pub fn new(consonant: Option<Consonant>, vowel: Option<Vowel>, marker: bool) -> Self {
        Self {
            consonant,
            vowel,
            marker,
            cached: Vec::new(),
            dirty: true,
        }
    }

    pub fn blank() -> Self {
        Self::new(None, None, false)
    }

    pub fn consonant(&self) -> Option<Consonant> {
        self.consonant
    }

    pub fn vowel(&self) -> Option<Vowel> {
        self.vowel
    }

    pub fn marker(&self) -> bool {
        self.marker
    }

    pub fn is_blank(&self) -> bool {
        self.consonant.is_none() && self.vowel.is_none() && !self.marker
    }

    pub fn set_consonant(&mut self, consonant: Option<Consonant>) {
        self.consonant = consonant;
        self.invalidate();
    }

    pub fn set_vowel(&mut self, vowel: Option<Vowel>) {
        self.vowel = vowel;
        self.invalidate();
    }

    pub fn set_marker(&mut self, marker: bool) {
        self.marker = marker;
        self.invalidate();
    }

    pub fn toggle_marker(&mut self) {
        self.set_marker(!self.marker);
    }

    /// Resets the glyph to the blank state.
    pub fn clear(&mut self) {
        self.consonant = None;
        self.vowel = None;
        self.marker = false;
        self.invalidate();
    }

    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Consonant strokes, then vowel strokes, then the dot. Uncached.
    pub fn compute_strokes(&self) -> Vec<StrokeId> {
        let mut parts = Vec::new();
        if let Some(c) = self.consonant {
            parts.extend_from_slice(c.strokes());
        }
        if let Some(v) = self.vowel {
            parts.extend_from_slice(v.strokes());
        }
        if self.marker {
            parts.push(StrokeId::Dot);
        }
        parts
    }

    /// The cached stroke list, rebuilt first if any field changed.
    pub fn strokes(&mut self) -> &[StrokeId] {
        if self.dirty {
            self.cached = self.compute_strokes();
            self.dirty = false;
        }
        &self.cached
    }

    /// This glyph's part of the sound signature.
    pub fn sound_token(&self) -> String {
        signature::encode_glyph(self)
    }
}

/// Two glyphs are equal when they carry the same sound; cache state is ignored.
impl PartialEq for Glyph {
    fn eq(&self, other: &Self) -> bool {
        self.consonant == other.consonant
            && self.vowel == other.vowel
            && self.marker == other.marker
    }
}

impl Eq for Glyph {}

/// A sequence of glyphs with the user's translation of it.
///
/// A word always holds at least one glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    glyphs: Vec<Glyph>,
    pub translation: String,
}

impl Default for Word {
    fn default() -> Self {
        Self::new()
    }
}

impl Word {
    /// A word with a single blank glyph.
    pub fn new() -> Self {
        Self {
            glyphs: vec![Glyph::blank()],
            translation: String::new(),
        }
    }

    /// Builds a word from `glyphs`, or a single blank glyph if `glyphs` is empty.
    pub fn from_glyphs(glyphs: Vec<Glyph>) -> Self {
        if glyphs.is_empty() {
            return Self::new();
        }
        Self {
            glyphs,
            translation: String::new(),
        }
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = translation.into();
        self
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn glyphs_mut(&mut self) -> &mut [Glyph] {
        &mut self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Inserts `glyph` at `idx`, clamped to the end of the word.
    pub fn insert(&mut self, idx: usize, glyph: Glyph) {
        let idx = idx.min(self.glyphs.len());
        self.glyphs.insert(idx, glyph);
    }

    /// Removes the glyph at `idx` unless it is the last one left.
    pub fn remove(&mut self, idx: usize) -> Option<Glyph> {
        if self.glyphs.len() <= 1 || idx >= self.glyphs.len() {
            return None;
        }
        Some(self.glyphs.remove(idx))
    }

    /// The persistence key for this word's sounds.
    pub fn sound_signature(&self) -> String {
        signature::encode(&self.glyphs)
    }
}
