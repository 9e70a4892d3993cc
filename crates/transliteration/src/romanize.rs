//! ISO 15919 romanization of stage-1 tokens

use streetlight_core::Script;

use crate::phonetic::{Modifier, PhoneticUnit};
use crate::segment::{segment, Token};
use crate::table::table;

/// Latin spelling of `text` read as `source`
///
/// Without a source the script is detected; text with no supported script
/// comes back unchanged.
pub fn romanize(text: &str, source: Option<Script>) -> String {
    match source.or_else(|| Script::detect(text)) {
        Some(source) => romanize_tokens(&segment(text, table(source))),
        None => text.to_string(),
    }
}

pub fn romanize_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();

    for (i, token) in tokens.iter().enumerate() {
        let Some(units) = token.units() else {
            out.push_str(token.text());
            continue;
        };

        for (j, unit) in units.iter().enumerate() {
            match unit {
                // Written as a doubled consonant
                PhoneticUnit::Modifier(Modifier::Geminate) => {
                    let next = units.get(j + 1).or_else(|| {
                        tokens
                            .get(i + 1)
                            .and_then(|t| t.units())
                            .and_then(|u| u.first())
                    });
                    if let Some(PhoneticUnit::Consonant(consonant)) = next {
                        out.push_str(consonant.iso15919());
                    }
                }
                unit => out.push_str(&unit.iso15919()),
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inherent_vowel_spelled() {
        assert_eq!(romanize("राम", None), "rāma");
        assert_eq!(romanize("ராம", None), "rāma");
    }

    #[test]
    fn test_marks_and_conjuncts() {
        assert_eq!(romanize("संस्कृत", Some(Script::Devanagari)), "saṁskr̥ta");
        assert_eq!(romanize("ਪੱਕਾ", None), "pakkā");
    }

    #[test]
    fn test_literals_untouched() {
        assert_eq!(romanize("Exit - निकास", None), "Exit - nikāsa");
        assert_eq!(romanize("12:30pm", None), "12:30pm");
    }
}
