// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A consonant sound. Declaration order is the picker order and the index
/// into the consonant stroke table.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Consonant {
    B,
    P,
    D,
    T,
    F,
    V,
    K,
    /// (g)ate
    G,
    /// (j)udge
    J,
    /// (ch)ange
    Ch,
    S,
    Z,
    H,
    R,
    Y,
    M,
    N,
    W,
    Ng,
    /// (sh)ield
    Sh,
    /// u(s)ual
    Zh,
    /// no(th)ing
    ThSoft,
    /// (th)is
    ThHard,
    L,
}

/// A vowel sound. Declaration order is the picker order and the index into
/// the vowel stroke table.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Vowel {
    Ay,
    Ai,
    Oi,
    Ou,
    Aa,
    Ah,
    Ih,
    Eh,
    Uu,
    Uh,
    Ee,
    Oo,
    Oh,
    Ur,
    Or,
    Ar,
    Ir,
    Er,
}

/// A fixed position on the glyph grid.
///
/// `V*` strokes live in the vowel zone (outer wings and the left spine),
/// `C*` strokes in the consonant zone around the centre column.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrokeId {
    /// top left wing
    V1,
    /// top right wing
    V2,
    /// left spine
    V3,
    /// bottom left wing
    V4,
    /// bottom right wing
    V5,
    /// top left
    C1,
    /// top mid
    C2,
    /// top right
    C3,
    /// middle
    C4,
    /// bottom left
    C5,
    /// bottom mid
    C6,
    /// bottom right
    C7,
    Dot,
}

impl Consonant {
    pub const COUNT: usize = 24;

    pub const ALL: [Consonant; Consonant::COUNT] = [
        Consonant::B,
        Consonant::P,
        Consonant::D,
        Consonant::T,
        Consonant::F,
        Consonant::V,
        Consonant::K,
        Consonant::G,
        Consonant::J,
        Consonant::Ch,
        Consonant::S,
        Consonant::Z,
        Consonant::H,
        Consonant::R,
        Consonant::Y,
        Consonant::M,
        Consonant::N,
        Consonant::W,
        Consonant::Ng,
        Consonant::Sh,
        Consonant::Zh,
        Consonant::ThSoft,
        Consonant::ThHard,
        Consonant::L,
    ];

    /// The display name. These strings are part of the persisted sound
    /// signature and must never change.
    pub const fn name(self) -> &'static str {
        match self {
            Consonant::B => "B",
            Consonant::P => "P",
            Consonant::D => "D",
            Consonant::T => "T",
            Consonant::F => "F",
            Consonant::V => "V",
            Consonant::K => "K",
            Consonant::G => "G",
            Consonant::J => "J",
            Consonant::Ch => "CH",
            Consonant::S => "S",
            Consonant::Z => "Z",
            Consonant::H => "H",
            Consonant::R => "R",
            Consonant::Y => "Y",
            Consonant::M => "M",
            Consonant::N => "N",
            Consonant::W => "W",
            Consonant::Ng => "NG",
            Consonant::Sh => "SH",
            Consonant::Zh => "ZH",
            Consonant::ThSoft => "TH_SOFT",
            Consonant::ThHard => "TH_HARD",
            Consonant::L => "L",
        }
    }

    /// A hint for the sounds whose letter is easy to misread.
    pub const fn example(self) -> Option<&'static str> {
        match self {
            Consonant::G => Some("(g)ate"),
            Consonant::J => Some("(j)udge"),
            Consonant::Ch => Some("(ch)ange"),
            Consonant::Sh => Some("(sh)ield"),
            Consonant::Zh => Some("u(s)ual"),
            Consonant::ThSoft => Some("no(th)ing"),
            Consonant::ThHard => Some("(th)is"),
            _ => None,
        }
    }

    /// Exact, case-sensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Consonant> {
        Consonant::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl Vowel {
    pub const COUNT: usize = 18;

    pub const ALL: [Vowel; Vowel::COUNT] = [
        Vowel::Ay,
        Vowel::Ai,
        Vowel::Oi,
        Vowel::Ou,
        Vowel::Aa,
        Vowel::Ah,
        Vowel::Ih,
        Vowel::Eh,
        Vowel::Uu,
        Vowel::Uh,
        Vowel::Ee,
        Vowel::Oo,
        Vowel::Oh,
        Vowel::Ur,
        Vowel::Or,
        Vowel::Ar,
        Vowel::Ir,
        Vowel::Er,
    ];

    /// The display name. Part of the persisted sound signature.
    pub const fn name(self) -> &'static str {
        match self {
            Vowel::Ay => "AY",
            Vowel::Ai => "AI",
            Vowel::Oi => "OI",
            Vowel::Ou => "OU",
            Vowel::Aa => "AA",
            Vowel::Ah => "AH",
            Vowel::Ih => "IH",
            Vowel::Eh => "EH",
            Vowel::Uu => "UU",
            Vowel::Uh => "UH",
            Vowel::Ee => "EE",
            Vowel::Oo => "OO",
            Vowel::Oh => "OH",
            Vowel::Ur => "UR",
            Vowel::Or => "OR",
            Vowel::Ar => "AR",
            Vowel::Ir => "IR",
            Vowel::Er => "ER",
        }
    }

    pub const fn example(self) -> &'static str {
        match self {
            Vowel::Ay => "s(ay)",
            Vowel::Ai => "s(i)gn",
            Vowel::Oi => "t(oy)",
            Vowel::Ou => "f(ou)nd",
            Vowel::Aa => "h(a)s",
            Vowel::Ah => "f(o)x",
            Vowel::Ih => "h(i)t",
            Vowel::Eh => "pr(e)ss",
            Vowel::Uu => "sh(ou)ld",
            Vowel::Uh => "s(o)me",
            Vowel::Ee => "w(e)",
            Vowel::Oo => "y(ou)",
            Vowel::Oh => "th(ough)",
            Vowel::Ur => "dang(er)",
            Vowel::Or => "y(our)",
            Vowel::Ar => "f(ar)",
            Vowel::Ir => "n(ear)",
            Vowel::Er => "sc(are)",
        }
    }

    pub fn from_name(name: &str) -> Option<Vowel> {
        Vowel::ALL.iter().copied().find(|v| v.name() == name)
    }
}
