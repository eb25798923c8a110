// File: src/core/tables.rs
//! Fixed phoneme → stroke tables.
//!
//! Each table is indexed by the symbol's discriminant, so a lookup is a single
//! array access. Stroke order inside an entry is the drawing order.

use crate::core::types::{Consonant, StrokeId, Vowel};
use StrokeId::*;

const CONSONANT_STROKES: [&[StrokeId]; Consonant::COUNT] = [
    /* B */ &[C2, C4, C7],
    /* P */ &[C3, C4, C6],
    /* D */ &[C2, C4, C5, C7],
    /* T */ &[C1, C3, C4, C6],
    /* F */ &[C3, C4, C5, C6],
    /* V */ &[C1, C2, C4, C7],
    /* K */ &[C2, C3, C4, C7],
    /* G */ &[C3, C4, C6, C7],
    /* J */ &[C2, C4, C5],
    /* CH */ &[C1, C4, C6],
    /* S */ &[C2, C3, C4, C5, C6],
    /* Z */ &[C1, C2, C4, C6, C7],
    /* H */ &[C2, C4, C6, C7],
    /* R */ &[C2, C3, C4, C6],
    /* Y */ &[C1, C2, C4, C6],
    /* M */ &[C5, C7],
    /* N */ &[C1, C5, C7],
    /* W */ &[C1, C3],
    /* NG */ &[C1, C2, C3, C4, C5, C6, C7],
    /* SH */ &[C1, C3, C4, C5, C6, C7],
    /* ZH */ &[C1, C2, C3, C4, C5, C7],
    /* TH_SOFT */ &[C1, C2, C3, C4, C6],
    /* TH_HARD */ &[C2, C4, C5, C6, C7],
    /* L */ &[C2, C4, C6],
];

const VOWEL_STROKES: [&[StrokeId]; Vowel::COUNT] = [
    /* AY */ &[V1],
    /* AI */ &[V2],
    /* OI */ &[V4],
    /* OU */ &[V5],
    /* AA */ &[V1, V2, V3],
    /* AH */ &[V1, V3],
    /* IH */ &[V4, V5],
    /* EH */ &[V3, V4, V5],
    /* UU */ &[V3, V4],
    /* UH */ &[V1, V2],
    /* EE */ &[V1, V3, V4, V5],
    /* OO */ &[V1, V2, V3, V4],
    /* OH */ &[V1, V2, V3, V4, V5],
    /* UR */ &[V2, V3, V4, V5],
    /* OR */ &[V1, V2, V3, V5],
    /* AR */ &[V1, V2, V4, V5],
    /* IR */ &[V1, V3, V5],
    /* ER */ &[V3, V5],
];

impl Consonant {
    /// Strokes drawn for this consonant, in drawing order. Never empty.
    #[inline]
    pub fn strokes(self) -> &'static [StrokeId] {
        CONSONANT_STROKES[self as usize]
    }
}

impl Vowel {
    /// Strokes drawn for this vowel, in drawing order. Never empty.
    #[inline]
    pub fn strokes(self) -> &'static [StrokeId] {
        VOWEL_STROKES[self as usize]
    }
}
