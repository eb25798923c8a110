// File: src/core/signature.rs
//! Sound signatures: the canonical string key for a word's sounds.
//!
//! A glyph's token is its consonant name followed by its vowel name, or the
//! vowel name first when the marker is set. Tokens are joined with `|`.

use crate::core::glyph::{Glyph, Word};
use crate::core::types::{Consonant, Vowel};
use thiserror::Error;

pub const GLYPH_DELIMITER: char = '|';

/// A signature token that does not split into known sound names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("glyph {index}: `{token}` is not a consonant/vowel pair")]
    Unrecognized { index: usize, token: String },
    #[error("glyph {index}: `{token}` has more than one reading")]
    Ambiguous { index: usize, token: String },
}

/// One glyph recovered from a signature.
///
/// `marker` is `None` when the signature cannot tell: the marker only changes
/// the token when both a consonant and a vowel are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodedGlyph {
    pub consonant: Option<Consonant>,
    pub vowel: Option<Vowel>,
    pub marker: Option<bool>,
}

impl DecodedGlyph {
    /// True if `glyph` carries these sounds. An unknown marker matches either value.
    pub fn matches(&self, glyph: &Glyph) -> bool {
        self.consonant == glyph.consonant()
            && self.vowel == glyph.vowel()
            && self.marker.map_or(true, |m| m == glyph.marker())
    }
}

impl From<DecodedGlyph> for Glyph {
    fn from(d: DecodedGlyph) -> Self {
        Glyph::new(d.consonant, d.vowel, d.marker.unwrap_or(false))
    }
}

pub fn encode_glyph(glyph: &Glyph) -> String {
    let cons = glyph.consonant().map_or("", Consonant::name);
    let vowel = glyph.vowel().map_or("", Vowel::name);
    if glyph.marker() {
        [vowel, cons].concat()
    } else {
        [cons, vowel].concat()
    }
}

pub fn encode(glyphs: &[Glyph]) -> String {
    let mut out = String::new();
    for (idx, glyph) in glyphs.iter().enumerate() {
        if idx > 0 {
            out.push(GLYPH_DELIMITER);
        }
        out.push_str(&encode_glyph(glyph));
    }
    out
}

pub fn decode(signature: &str) -> Result<Vec<DecodedGlyph>, ParseError> {
    signature
        .split(GLYPH_DELIMITER)
        .enumerate()
        .map(|(index, token)| decode_token(index, token))
        .collect()
}

/// Decodes `signature` into a word whose glyphs re-encode to the same string.
pub fn decode_word(signature: &str) -> Result<Word, ParseError> {
    let glyphs = decode(signature)?.into_iter().map(Glyph::from).collect();
    Ok(Word::from_glyphs(glyphs))
}

/// Tries every split of `token` into the two closed name sets and requires
/// exactly one to match.
fn decode_token(index: usize, token: &str) -> Result<DecodedGlyph, ParseError> {
    if token.is_empty() {
        return Ok(DecodedGlyph::default());
    }

    let mut readings = Vec::new();

    for cons in Consonant::ALL {
        if let Some(rest) = token.strip_prefix(cons.name()) {
            if rest.is_empty() {
                readings.push(DecodedGlyph {
                    consonant: Some(cons),
                    vowel: None,
                    marker: None,
                });
            } else if let Some(vowel) = Vowel::from_name(rest) {
                readings.push(DecodedGlyph {
                    consonant: Some(cons),
                    vowel: Some(vowel),
                    marker: Some(false),
                });
            }
        }
    }

    for vowel in Vowel::ALL {
        if let Some(rest) = token.strip_prefix(vowel.name()) {
            if rest.is_empty() {
                readings.push(DecodedGlyph {
                    consonant: None,
                    vowel: Some(vowel),
                    marker: None,
                });
            } else if let Some(cons) = Consonant::from_name(rest) {
                readings.push(DecodedGlyph {
                    consonant: Some(cons),
                    vowel: Some(vowel),
                    marker: Some(true),
                });
            }
        }
    }

    match readings.len() {
        1 => Ok(readings[0]),
        0 => Err(ParseError::Unrecognized {
            index,
            token: token.to_string(),
        }),
        _ => Err(ParseError::Ambiguous {
            index,
            token: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(c: Option<Consonant>, v: Option<Vowel>, marker: bool) -> Glyph {
        Glyph::new(c, v, marker)
    }

    /// Xorshift-driven words of one to five glyphs.
    fn generated_words() -> Vec<Vec<Glyph>> {
        let mut state: u32 = 0x2545_f491;
        let mut next = move |bound: u32| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state % bound
        };

        (0..200)
            .map(|_| {
                let len = 1 + next(5) as usize;
                (0..len)
                    .map(|_| {
                        let c = next(Consonant::COUNT as u32 + 1) as usize;
                        let v = next(Vowel::COUNT as u32 + 1) as usize;
                        glyph(
                            Consonant::ALL.get(c).copied(),
                            Vowel::ALL.get(v).copied(),
                            next(2) == 1,
                        )
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn marker_puts_vowel_first() {
        let plain = glyph(Some(Consonant::T), Some(Vowel::Ay), false);
        let marked = glyph(Some(Consonant::T), Some(Vowel::Ay), true);
        assert_eq!(encode_glyph(&plain), "TAY");
        assert_eq!(encode_glyph(&marked), "AYT");
    }

    #[test]
    fn glyphs_are_joined_with_pipes() {
        let glyphs = vec![
            glyph(Some(Consonant::K), Some(Vowel::Aa), false),
            Glyph::blank(),
            glyph(Some(Consonant::ThSoft), Some(Vowel::Ih), true),
            glyph(None, Some(Vowel::Oh), true),
        ];
        assert_eq!(encode(&glyphs), "KAA||IHTH_SOFT|OH");
    }

    #[test]
    fn blank_words_encode_to_delimiters_only() {
        assert_eq!(encode(&[Glyph::blank()]), "");
        assert_eq!(encode(&[Glyph::blank(), Glyph::blank()]), "|");
    }

    #[test]
    fn decode_reverses_encode() {
        for glyphs in generated_words() {
            let sig = encode(&glyphs);
            let decoded = decode(&sig).unwrap();
            assert_eq!(decoded.len(), glyphs.len(), "{}", sig);
            for (d, g) in decoded.iter().zip(&glyphs) {
                assert!(d.matches(g), "{:?} does not match {:?} in {}", d, g, sig);
                let both = g.consonant().is_some() && g.vowel().is_some();
                assert_eq!(d.marker.is_some(), both, "{}", sig);
            }
            assert_eq!(decode_word(&sig).unwrap().sound_signature(), sig);
        }
    }

    #[test]
    fn multi_letter_names_are_read_whole() {
        let d = decode("SHEE|TH_HARDUR|NG|EENG").unwrap();
        assert_eq!(d[0].consonant, Some(Consonant::Sh));
        assert_eq!(d[0].vowel, Some(Vowel::Ee));
        assert_eq!(d[1].consonant, Some(Consonant::ThHard));
        assert_eq!(d[1].vowel, Some(Vowel::Ur));
        assert_eq!(d[2].consonant, Some(Consonant::Ng));
        assert_eq!(d[2].marker, None);
        assert_eq!(d[3].vowel, Some(Vowel::Ee));
        assert_eq!(d[3].consonant, Some(Consonant::Ng));
        assert_eq!(d[3].marker, Some(true));
    }

    #[test]
    fn garbage_tokens_fail_with_their_index() {
        assert_eq!(
            decode("KAA|XYZ"),
            Err(ParseError::Unrecognized {
                index: 1,
                token: "XYZ".to_string()
            })
        );
        assert!(decode("KAAK").is_err());
        assert!(decode("kaa").is_err());
        assert!(decode_word("TAYTAY").is_err());
    }
}
