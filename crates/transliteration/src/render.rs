//! Tokens -> target text (stage 2)

use std::collections::VecDeque;

use streetlight_config::FallbackPolicy;

use crate::engine::{Stage, UnmappedCluster};
use crate::phonetic::{approximate, PhoneticUnit};
use crate::segment::Token;
use crate::table::MappingTable;

/// Substitutions allowed for a single unit (longest chain is ṛh → ḍh → ḍ → ṭ)
const MAX_APPROXIMATION_DEPTH: usize = 6;

/// Output of stage 2
#[derive(Debug, Clone, Default)]
pub struct Rendering {
    pub text: String,
    /// Clusters copied through unchanged
    pub unmapped: Vec<UnmappedCluster>,
    /// Clusters written in the target script
    pub rendered: usize,
}

/// Render `tokens` into the script of `table`
pub fn render(tokens: &[Token<'_>], table: &MappingTable, fallback: FallbackPolicy) -> Rendering {
    let mut rendering = Rendering {
        text: String::with_capacity(tokens.iter().map(|t| t.text().len()).sum()),
        ..Default::default()
    };

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::Literal { text, .. } => rendering.text.push_str(text),
            Token::Unmapped { text, offset } => {
                rendering.text.push_str(text);
                rendering.unmapped.push(UnmappedCluster::new(*text, *offset, Stage::Segment));
            }
            Token::Cluster {
                source,
                offset,
                units,
            } => {
                let next = tokens
                    .get(i + 1)
                    .and_then(|t| t.units())
                    .and_then(|u| u.first().copied());

                match render_cluster(units, next, table, fallback) {
                    Some(text) => {
                        rendering.text.push_str(&text);
                        rendering.rendered += 1;
                    }
                    None => {
                        rendering.text.push_str(source);
                        rendering
                            .unmapped
                            .push(UnmappedCluster::new(*source, *offset, Stage::Render));
                    }
                }
            }
        }
    }

    rendering
}

/// Write one cluster; `None` when some unit has no rendering
///
/// `next` is the first unit of the following cluster, which shapes nasal
/// and gemination signs at the end of this one.
pub fn render_cluster(
    units: &[PhoneticUnit],
    next: Option<PhoneticUnit>,
    table: &MappingTable,
    fallback: FallbackPolicy,
) -> Option<String> {
    let resolved = resolve(units, next, table, fallback)?;
    let mut text = String::new();

    for (i, unit) in resolved.iter().enumerate() {
        let after_consonant = i > 0 && resolved[i - 1].is_consonant();
        match *unit {
            PhoneticUnit::Consonant(consonant) => {
                text.push_str(table.consonant(consonant)?);
                if !resolved.get(i + 1).is_some_and(PhoneticUnit::is_vowel) {
                    text.push(table.virama());
                }
            }
            PhoneticUnit::Vowel(vowel) if after_consonant => {
                text.push_str(table.vowel_sign(vowel)?)
            }
            PhoneticUnit::Vowel(vowel) => text.push_str(table.vowel_letter(vowel)?),
            PhoneticUnit::Modifier(modifier) => text.push_str(table.modifier(modifier)?),
            PhoneticUnit::Digit(value) => text.push(table.digit(value)?),
        }
    }

    Some(text)
}

/// Replace units the target cannot write with their nearest substitutes
fn resolve(
    units: &[PhoneticUnit],
    next: Option<PhoneticUnit>,
    table: &MappingTable,
    fallback: FallbackPolicy,
) -> Option<Vec<PhoneticUnit>> {
    let mut pending: VecDeque<(PhoneticUnit, usize)> = units.iter().map(|u| (*u, 0)).collect();
    let mut resolved = Vec::with_capacity(units.len());

    while let Some((unit, depth)) = pending.pop_front() {
        let after_consonant = resolved.last().is_some_and(PhoneticUnit::is_consonant);
        if table.renders(unit, after_consonant) {
            resolved.push(unit);
            continue;
        }

        if fallback == FallbackPolicy::Passthrough || depth >= MAX_APPROXIMATION_DEPTH {
            return None;
        }

        let following = pending.front().map(|(u, _)| *u).or(next);
        let substitutes = approximate(unit, following)?;
        for substitute in substitutes.into_iter().rev() {
            pending.push_front((substitute, depth + 1));
        }
    }

    Some(resolved)
}
