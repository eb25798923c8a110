// src/core/mod.rs

pub mod engine;
pub mod geometry;
pub mod glyph;
pub mod signature;
pub mod tables;
pub mod types;
