//! Script-independent phonetic alphabet
//!
//! Every supported script maps to and from this alphabet. Its Latin spelling
//! follows ISO 15919. Consonants never carry an implicit vowel here: the
//! inherent `a` of a Brahmic consonant letter is an explicit `Vowel::A`, and
//! a consonant with no vowel after it is dead (virama).

use serde::{Deserialize, Serialize};

/// Vowel sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vowel {
    A,
    Aa,
    I,
    Ii,
    U,
    Uu,
    VocalicR,
    VocalicRr,
    VocalicL,
    VocalicLl,
    /// Open e of English loans (ऍ)
    CandraE,
    /// Dravidian short e
    ShortE,
    E,
    Ai,
    /// Open o of English loans (ऑ)
    CandraO,
    /// Dravidian short o
    ShortO,
    O,
    Au,
}

impl Vowel {
    pub fn iso15919(&self) -> &'static str {
        match self {
            Self::A => "a",
            Self::Aa => "ā",
            Self::I => "i",
            Self::Ii => "ī",
            Self::U => "u",
            Self::Uu => "ū",
            Self::VocalicR => "r̥",
            Self::VocalicRr => "r̥̄",
            Self::VocalicL => "l̥",
            Self::VocalicLl => "l̥̄",
            Self::CandraE => "ê",
            Self::ShortE => "e",
            Self::E => "ē",
            Self::Ai => "ai",
            Self::CandraO => "ô",
            Self::ShortO => "o",
            Self::O => "ō",
            Self::Au => "au",
        }
    }
}

/// Consonant sounds, including the nukta series used for Perso-Arabic loans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Consonant {
    K,
    Kh,
    G,
    Gh,
    Ng,
    C,
    Ch,
    J,
    Jh,
    Ny,
    Tt,
    Tth,
    Dd,
    Ddh,
    Nn,
    T,
    Th,
    D,
    Dh,
    N,
    /// Alveolar n (Tamil ன)
    Nnn,
    P,
    Ph,
    B,
    Bh,
    M,
    Y,
    R,
    /// Alveolar r (Tamil ற)
    Rr,
    L,
    Ll,
    /// Retroflex approximant (Tamil ழ)
    Lll,
    V,
    Sh,
    Ss,
    S,
    H,
    Q,
    Khh,
    Ghh,
    Z,
    /// Flap ड़
    Rh,
    /// Aspirated flap ढ़
    Rhh,
    F,
    Yy,
}

/// Place of articulation, used to pick a homorganic nasal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Place {
    Velar,
    Palatal,
    Retroflex,
    Dental,
    Labial,
    Other,
}

impl Consonant {
    pub fn iso15919(&self) -> &'static str {
        match self {
            Self::K => "k",
            Self::Kh => "kh",
            Self::G => "g",
            Self::Gh => "gh",
            Self::Ng => "ṅ",
            Self::C => "c",
            Self::Ch => "ch",
            Self::J => "j",
            Self::Jh => "jh",
            Self::Ny => "ñ",
            Self::Tt => "ṭ",
            Self::Tth => "ṭh",
            Self::Dd => "ḍ",
            Self::Ddh => "ḍh",
            Self::Nn => "ṇ",
            Self::T => "t",
            Self::Th => "th",
            Self::D => "d",
            Self::Dh => "dh",
            Self::N => "n",
            Self::Nnn => "ṉ",
            Self::P => "p",
            Self::Ph => "ph",
            Self::B => "b",
            Self::Bh => "bh",
            Self::M => "m",
            Self::Y => "y",
            Self::R => "r",
            Self::Rr => "ṟ",
            Self::L => "l",
            Self::Ll => "ḷ",
            Self::Lll => "ḻ",
            Self::V => "v",
            Self::Sh => "ś",
            Self::Ss => "ṣ",
            Self::S => "s",
            Self::H => "h",
            Self::Q => "q",
            Self::Khh => "k͟h",
            Self::Ghh => "ġ",
            Self::Z => "z",
            Self::Rh => "ṛ",
            Self::Rhh => "ṛh",
            Self::F => "f",
            Self::Yy => "ẏ",
        }
    }

    pub fn place(&self) -> Place {
        match self {
            Self::K
            | Self::Kh
            | Self::G
            | Self::Gh
            | Self::Ng
            | Self::Q
            | Self::Khh
            | Self::Ghh => Place::Velar,
            Self::C | Self::Ch | Self::J | Self::Jh | Self::Ny | Self::Z | Self::Sh => {
                Place::Palatal
            }
            Self::Tt
            | Self::Tth
            | Self::Dd
            | Self::Ddh
            | Self::Nn
            | Self::Ss
            | Self::Rh
            | Self::Rhh => Place::Retroflex,
            Self::T | Self::Th | Self::D | Self::Dh | Self::N | Self::Nnn | Self::S => {
                Place::Dental
            }
            Self::P | Self::Ph | Self::B | Self::Bh | Self::M | Self::F => Place::Labial,
            _ => Place::Other,
        }
    }
}

/// Signs that modify the syllable they attach to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// Nasalized vowel (ँ)
    Candrabindu,
    /// Nasal coda (ं)
    Anusvara,
    /// Voiceless breath (ः)
    Visarga,
    /// Elision mark (ऽ)
    Avagraha,
    /// Doubling of the consonant that follows (Gurmukhi addak)
    Geminate,
}

impl Modifier {
    pub fn iso15919(&self) -> &'static str {
        match self {
            Self::Candrabindu => "m̐",
            Self::Anusvara => "ṁ",
            Self::Visarga => "ḥ",
            Self::Avagraha => "'",
            // Spelled by the consonant that follows
            Self::Geminate => "",
        }
    }
}

/// One element of the intermediate representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhoneticUnit {
    Vowel(Vowel),
    Consonant(Consonant),
    Modifier(Modifier),
    /// Native decimal digit 0-9
    Digit(u8),
}

impl PhoneticUnit {
    /// ISO 15919 spelling (digits as ASCII)
    pub fn iso15919(&self) -> String {
        match self {
            Self::Vowel(v) => v.iso15919().to_string(),
            Self::Consonant(c) => c.iso15919().to_string(),
            Self::Modifier(m) => m.iso15919().to_string(),
            Self::Digit(d) => d.to_string(),
        }
    }

    pub fn is_consonant(&self) -> bool {
        matches!(self, Self::Consonant(_))
    }

    pub fn is_vowel(&self) -> bool {
        matches!(self, Self::Vowel(_))
    }
}

impl From<Vowel> for PhoneticUnit {
    fn from(v: Vowel) -> Self {
        Self::Vowel(v)
    }
}

impl From<Consonant> for PhoneticUnit {
    fn from(c: Consonant) -> Self {
        Self::Consonant(c)
    }
}

impl From<Modifier> for PhoneticUnit {
    fn from(m: Modifier) -> Self {
        Self::Modifier(m)
    }
}

/// Nearest sounds a script can write when it lacks `unit`
///
/// `next` is the unit that follows in the stream; nasal and gemination
/// signs take their shape from it. Returns `None` when no substitute exists
/// (the caller then keeps the source text). Following the chain always ends:
/// every step moves toward a sound every script writes.
pub fn approximate(unit: PhoneticUnit, next: Option<PhoneticUnit>) -> Option<Vec<PhoneticUnit>> {
    use Consonant as C;

    let single = |u: PhoneticUnit| Some(vec![u]);

    match unit {
        PhoneticUnit::Vowel(v) => match v {
            Vowel::CandraE | Vowel::ShortE => single(Vowel::E.into()),
            Vowel::CandraO | Vowel::ShortO => single(Vowel::O.into()),
            Vowel::VocalicR => Some(vec![C::R.into(), Vowel::I.into()]),
            Vowel::VocalicRr => Some(vec![C::R.into(), Vowel::Ii.into()]),
            Vowel::VocalicL => Some(vec![C::L.into(), Vowel::I.into()]),
            Vowel::VocalicLl => Some(vec![C::L.into(), Vowel::Ii.into()]),
            _ => None,
        },
        PhoneticUnit::Consonant(c) => {
            let nearest = match c {
                C::Kh | C::G => C::K,
                C::Gh => C::G,
                C::Ch => C::C,
                C::Jh => C::J,
                C::Tth | C::Dd => C::Tt,
                C::Ddh => C::Dd,
                C::Th | C::D => C::T,
                C::Dh => C::D,
                C::Ph | C::B => C::P,
                C::Bh => C::B,
                C::Nnn => C::N,
                C::Rr => C::R,
                C::Lll => C::Ll,
                C::Ll => C::L,
                C::V => C::B,
                C::Ss => C::Sh,
                C::Sh => C::S,
                C::Q => C::K,
                C::Khh => C::Kh,
                C::Ghh => C::G,
                C::Z => C::J,
                C::Rh => C::Dd,
                C::Rhh => C::Ddh,
                C::F => C::Ph,
                C::Yy => C::Y,
                _ => return None,
            };
            single(nearest.into())
        }
        PhoneticUnit::Modifier(m) => match m {
            Modifier::Candrabindu => single(Modifier::Anusvara.into()),
            Modifier::Anusvara => single(homorganic_nasal(next).into()),
            Modifier::Visarga => single(C::H.into()),
            // Nothing to double at a word end; the sign is dropped
            Modifier::Geminate => match next {
                Some(PhoneticUnit::Consonant(c)) => single(c.into()),
                _ => Some(Vec::new()),
            },
            Modifier::Avagraha => None,
        },
        PhoneticUnit::Digit(_) => None,
    }
}

/// Nasal consonant produced at the place of the consonant that follows
pub fn homorganic_nasal(next: Option<PhoneticUnit>) -> Consonant {
    match next {
        Some(PhoneticUnit::Consonant(c)) => match c.place() {
            Place::Velar => Consonant::Ng,
            Place::Palatal => Consonant::Ny,
            Place::Retroflex => Consonant::Nn,
            Place::Dental => Consonant::N,
            Place::Labial | Place::Other => Consonant::M,
        },
        _ => Consonant::M,
    }
}
