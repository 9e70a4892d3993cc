//! Source text -> tokens (stage 1)
//!
//! Text is cut left to right into clusters of the source script. A cluster
//! is one of:
//! - independent vowel, then attached modifiers
//! - consonant (virama consonant)*, then a vowel sign, a virama or the
//!   inherent vowel, then attached modifiers
//! - dead consonant letter, then attached modifiers
//! - native digit
//! - standalone modifier (avagraha, or a sign with nothing before it)
//!
//! Runs of characters outside the source block become literals and never
//! enter the phonetic stream. In-block text the table cannot read becomes
//! an unmapped token carrying its original spelling.

use crate::phonetic::{Consonant, Modifier, PhoneticUnit, Vowel};
use crate::table::MappingTable;

/// Punctuation encoded in the Devanagari block but shared by every script
const SHARED_PUNCTUATION: &[char] = &['\u{0964}', '\u{0965}', '\u{0970}'];

/// One segment of the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Readable cluster and its phonetic units
    Cluster {
        source: &'a str,
        offset: usize,
        units: Vec<PhoneticUnit>,
    },
    /// Text outside the source script (spaces, digits, Latin, ...)
    Literal { text: &'a str, offset: usize },
    /// In-block cluster with no table entry
    Unmapped { text: &'a str, offset: usize },
}

impl<'a> Token<'a> {
    /// Source text covered by this token
    pub fn text(&self) -> &'a str {
        match self {
            Self::Cluster { source, .. } => *source,
            Self::Literal { text, .. } | Self::Unmapped { text, .. } => *text,
        }
    }

    /// Byte offset of the token in the segmented text
    pub fn offset(&self) -> usize {
        match self {
            Self::Cluster { offset, .. }
            | Self::Literal { offset, .. }
            | Self::Unmapped { offset, .. } => *offset,
        }
    }

    pub fn units(&self) -> Option<&[PhoneticUnit]> {
        match self {
            Self::Cluster { units, .. } => Some(units.as_slice()),
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal { .. })
    }
}

fn is_literal_char(c: char, table: &MappingTable) -> bool {
    !table.script().contains_char(c) || SHARED_PUNCTUATION.contains(&c)
}

/// Split `text` into tokens using the source script's `table`
pub fn segment<'a>(text: &'a str, table: &MappingTable) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let Some(first) = rest.chars().next() else {
            break;
        };

        if is_literal_char(first, table) {
            let len = rest
                .char_indices()
                .find(|(_, c)| !is_literal_char(*c, table))
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            tokens.push(Token::Literal {
                text: &rest[..len],
                offset: pos,
            });
            pos += len;
            continue;
        }

        let (len, units) = read_cluster(rest, first, table);
        let source = &rest[..len];
        tokens.push(match units {
            Some(units) => Token::Cluster {
                source,
                offset: pos,
                units,
            },
            None => Token::Unmapped {
                text: source,
                offset: pos,
            },
        });
        pos += len;
    }

    tokens
}

/// Byte length of the run of combining marks at the start of `input`
fn marks_len(input: &str, table: &MappingTable) -> usize {
    input
        .char_indices()
        .find(|(_, c)| !table.is_mark(*c))
        .map(|(i, _)| i)
        .unwrap_or(input.len())
}

/// Read one cluster; `None` units means the cluster is unreadable
fn read_cluster(
    input: &str,
    first: char,
    table: &MappingTable,
) -> (usize, Option<Vec<PhoneticUnit>>) {
    if let Some(value) = table.digit_value(first) {
        return (first.len_utf8(), Some(vec![PhoneticUnit::Digit(value)]));
    }

    let mut units = Vec::new();
    let mut pos = 0;

    if let Some((vowel, len)) = table.match_vowel(input) {
        units.push(vowel.into());
        pos = len;
    } else if let Some((consonant, len)) = table.match_consonant(input) {
        pos = read_syllable(input, consonant, len, table, &mut units);
    } else if let Some((consonant, len)) = table.match_dead_consonant(input) {
        units.push(consonant.into());
        pos = len;
    } else if table.match_modifier(input).is_none() {
        // Stray sign or a letter the table does not know
        let len = first.len_utf8();
        return (len + marks_len(&input[len..], table), None);
    }

    while let Some((modifier, len)) = table.match_modifier(&input[pos..]) {
        if modifier == Modifier::Avagraha {
            if units.is_empty() {
                units.push(modifier.into());
                pos += len;
            }
            break;
        }
        units.push(modifier.into());
        pos += len;
    }

    // Marks left over (a second vowel sign, a nukta on a letter that has no
    // nukta form) make the whole cluster unreadable
    let trailing = marks_len(&input[pos..], table);
    if trailing > 0 {
        return (pos + trailing, None);
    }

    (pos, Some(units))
}

/// Consonant chain joined by virama, then its vowel
fn read_syllable(
    input: &str,
    first: Consonant,
    first_len: usize,
    table: &MappingTable,
    units: &mut Vec<PhoneticUnit>,
) -> usize {
    let virama = table.virama();
    let mut pos = first_len;
    units.push(first.into());

    loop {
        let rest = &input[pos..];
        if let Some((vowel, len)) = table.match_vowel_sign(rest) {
            units.push(vowel.into());
            return pos + len;
        }

        if rest.starts_with(virama) {
            let after = pos + virama.len_utf8();
            match table.match_consonant(&input[after..]) {
                Some((next, len)) => {
                    units.push(next.into());
                    pos = after + len;
                }
                // Dead consonant
                None => return after,
            }
            continue;
        }

        units.push(Vowel::A.into());
        return pos;
    }
}
