// src/lib.rs

//! Trunic glyph encoding and a sound-indexed vocabulary.
//!
//! Glyphs are built from [`Consonant`] and [`Vowel`] stroke tables, drawn by
//! [`core::geometry::render`], and keyed for storage by their sound signature
//! ([`core::signature`]). [`VocabularyStore`] maps signatures to translations.

pub mod config;
pub mod core;
pub mod export;
pub mod persistence;

pub use crate::config::Config;
pub use crate::core::engine::TranslatorEngine;
pub use crate::core::glyph::{Glyph, Word};
pub use crate::core::signature::ParseError;
pub use crate::core::types::{Consonant, StrokeId, Vowel};
pub use crate::persistence::{StorageError, VocabularyStore};
