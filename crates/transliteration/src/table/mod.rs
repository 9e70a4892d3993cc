//! Per-script mapping tables
//!
//! Each script contributes a static [`ScriptData`] listing its letters and
//! signs. The first entry for a phonetic unit is its canonical spelling and
//! is the one used when rendering into that script; `*_aliases` entries are
//! only read (decomposed vowel signs, precomposed nukta letters, tippi and
//! similar variant spellings). [`table`] returns the indexed form, built once
//! on first use and never modified afterwards.

mod bengali;
mod devanagari;
mod gujarati;
mod gurmukhi;
mod kannada;
mod malayalam;
mod tamil;
mod telugu;

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use once_cell::sync::Lazy;
use streetlight_core::Script;

use crate::phonetic::{Consonant, Modifier, PhoneticUnit, Vowel};

type Entries<T> = &'static [(&'static str, T)];

/// Static letter inventory of one script
pub struct ScriptData {
    pub script: Script,
    pub virama: char,
    pub nukta: Option<char>,
    pub digit_zero: char,
    pub vowels: Entries<Vowel>,
    pub vowel_signs: Entries<Vowel>,
    pub consonants: Entries<Consonant>,
    pub modifiers: Entries<Modifier>,
    /// Letters that are a consonant without its vowel (chillu, khanda ta)
    pub dead_consonants: Entries<Consonant>,
    pub vowel_aliases: Entries<Vowel>,
    pub vowel_sign_aliases: Entries<Vowel>,
    pub consonant_aliases: Entries<Consonant>,
    pub modifier_aliases: Entries<Modifier>,
}

static DEVANAGARI: Lazy<MappingTable> = Lazy::new(|| MappingTable::new(&devanagari::DATA));
static TAMIL: Lazy<MappingTable> = Lazy::new(|| MappingTable::new(&tamil::DATA));
static BENGALI: Lazy<MappingTable> = Lazy::new(|| MappingTable::new(&bengali::DATA));
static TELUGU: Lazy<MappingTable> = Lazy::new(|| MappingTable::new(&telugu::DATA));
static KANNADA: Lazy<MappingTable> = Lazy::new(|| MappingTable::new(&kannada::DATA));
static MALAYALAM: Lazy<MappingTable> = Lazy::new(|| MappingTable::new(&malayalam::DATA));
static GURMUKHI: Lazy<MappingTable> = Lazy::new(|| MappingTable::new(&gurmukhi::DATA));
static GUJARATI: Lazy<MappingTable> = Lazy::new(|| MappingTable::new(&gujarati::DATA));

/// Mapping table for `script`
pub fn table(script: Script) -> &'static MappingTable {
    match script {
        Script::Devanagari => &*DEVANAGARI,
        Script::Tamil => &*TAMIL,
        Script::Bengali => &*BENGALI,
        Script::Telugu => &*TELUGU,
        Script::Kannada => &*KANNADA,
        Script::Malayalam => &*MALAYALAM,
        Script::Gurmukhi => &*GURMUKHI,
        Script::Gujarati => &*GUJARATI,
    }
}

/// Force construction of every table
pub fn warm_up() {
    for script in Script::all() {
        let table = table(*script);
        tracing::trace!(script = %script, marks = table.marks.len(), "Mapping table ready");
    }
}

/// Native spelling -> unit, matched longest key first
struct KeyMap<T> {
    entries: HashMap<&'static str, T>,
    longest: usize,
}

impl<T: Copy> KeyMap<T> {
    fn new(lists: &[Entries<T>]) -> Self {
        let mut entries = HashMap::new();
        let mut longest = 0;
        for list in lists {
            for (key, unit) in list.iter() {
                // First spelling wins when a key is listed twice
                entries.entry(*key).or_insert(*unit);
                longest = longest.max(key.chars().count());
            }
        }
        Self { entries, longest }
    }

    /// Longest key that prefixes `input`, with its byte length
    fn longest_match(&self, input: &str) -> Option<(T, usize)> {
        let ends: Vec<usize> = input
            .char_indices()
            .skip(1)
            .map(|(i, _)| i)
            .chain(std::iter::once(input.len()))
            .take(self.longest)
            .collect();

        ends.into_iter()
            .rev()
            .find_map(|end| self.entries.get(&input[..end]).map(|unit| (*unit, end)))
    }
}

fn canonical<T: Copy + Eq + Hash>(list: Entries<T>) -> HashMap<T, &'static str> {
    let mut spellings = HashMap::new();
    for (key, unit) in list.iter() {
        spellings.entry(*unit).or_insert(*key);
    }
    spellings
}

/// Indexed, immutable view of one script's [`ScriptData`]
pub struct MappingTable {
    data: &'static ScriptData,
    vowels: KeyMap<Vowel>,
    vowel_signs: KeyMap<Vowel>,
    consonants: KeyMap<Consonant>,
    dead_consonants: KeyMap<Consonant>,
    modifiers: KeyMap<Modifier>,
    vowel_letter: HashMap<Vowel, &'static str>,
    vowel_sign: HashMap<Vowel, &'static str>,
    consonant: HashMap<Consonant, &'static str>,
    modifier: HashMap<Modifier, &'static str>,
    marks: HashSet<char>,
}

impl MappingTable {
    pub fn new(data: &'static ScriptData) -> Self {
        let mut marks: HashSet<char> = data
            .vowel_signs
            .iter()
            .chain(data.vowel_sign_aliases.iter())
            .flat_map(|(key, _)| key.chars())
            .collect();
        marks.insert(data.virama);
        marks.extend(data.nukta);
        marks.extend(
            data.modifiers
                .iter()
                .chain(data.modifier_aliases.iter())
                .filter(|(_, modifier)| *modifier != Modifier::Avagraha)
                .flat_map(|(key, _)| key.chars()),
        );

        Self {
            data,
            vowels: KeyMap::new(&[data.vowels, data.vowel_aliases]),
            vowel_signs: KeyMap::new(&[data.vowel_signs, data.vowel_sign_aliases]),
            consonants: KeyMap::new(&[data.consonants, data.consonant_aliases]),
            dead_consonants: KeyMap::new(&[data.dead_consonants]),
            modifiers: KeyMap::new(&[data.modifiers, data.modifier_aliases]),
            vowel_letter: canonical(data.vowels),
            vowel_sign: canonical(data.vowel_signs),
            consonant: canonical(data.consonants),
            modifier: canonical(data.modifiers),
            marks,
        }
    }

    pub fn script(&self) -> Script {
        self.data.script
    }

    pub fn virama(&self) -> char {
        self.data.virama
    }

    pub fn data(&self) -> &'static ScriptData {
        self.data
    }

    // Reading (native -> phonetic)

    pub fn match_vowel(&self, input: &str) -> Option<(Vowel, usize)> {
        self.vowels.longest_match(input)
    }

    pub fn match_vowel_sign(&self, input: &str) -> Option<(Vowel, usize)> {
        self.vowel_signs.longest_match(input)
    }

    pub fn match_consonant(&self, input: &str) -> Option<(Consonant, usize)> {
        self.consonants.longest_match(input)
    }

    pub fn match_dead_consonant(&self, input: &str) -> Option<(Consonant, usize)> {
        self.dead_consonants.longest_match(input)
    }

    pub fn match_modifier(&self, input: &str) -> Option<(Modifier, usize)> {
        self.modifiers.longest_match(input)
    }

    /// Value of a native digit
    pub fn digit_value(&self, c: char) -> Option<u8> {
        let offset = (c as u32).checked_sub(self.data.digit_zero as u32)?;
        (offset < 10).then_some(offset as u8)
    }

    /// Combining marks that cannot start a cluster
    pub fn is_mark(&self, c: char) -> bool {
        self.marks.contains(&c)
    }

    // Writing (phonetic -> native)

    pub fn vowel_letter(&self, vowel: Vowel) -> Option<&'static str> {
        self.vowel_letter.get(&vowel).copied()
    }

    /// Dependent form of `vowel`; the inherent vowel is written with nothing
    pub fn vowel_sign(&self, vowel: Vowel) -> Option<&'static str> {
        match vowel {
            Vowel::A => Some(""),
            _ => self.vowel_sign.get(&vowel).copied(),
        }
    }

    pub fn consonant(&self, consonant: Consonant) -> Option<&'static str> {
        self.consonant.get(&consonant).copied()
    }

    pub fn modifier(&self, modifier: Modifier) -> Option<&'static str> {
        self.modifier.get(&modifier).copied()
    }

    pub fn digit(&self, value: u8) -> Option<char> {
        if value > 9 {
            return None;
        }
        char::from_u32(self.data.digit_zero as u32 + value as u32)
    }

    /// Whether `unit` can be written in this script
    ///
    /// Vowels need a sign after a consonant and a letter elsewhere.
    pub fn renders(&self, unit: PhoneticUnit, after_consonant: bool) -> bool {
        match unit {
            PhoneticUnit::Vowel(vowel) if after_consonant => self.vowel_sign(vowel).is_some(),
            PhoneticUnit::Vowel(vowel) => self.vowel_letter.contains_key(&vowel),
            PhoneticUnit::Consonant(consonant) => self.consonant.contains_key(&consonant),
            PhoneticUnit::Modifier(modifier) => self.modifier.contains_key(&modifier),
            PhoneticUnit::Digit(value) => value <= 9,
        }
    }

    /// Every cluster that can be spelled from canonical entries alone
    ///
    /// Vowel letters, each consonant bare, with each vowel sign and with
    /// virama, each modifier after the first consonant, and the digits.
    pub fn canonical_clusters(&self) -> Vec<String> {
        let data = self.data;
        let mut clusters: Vec<String> =
            data.vowels.iter().map(|(key, _)| key.to_string()).collect();

        for (consonant, _) in data.consonants.iter() {
            clusters.push(consonant.to_string());
            clusters.push(format!("{}{}", consonant, data.virama));
            for (sign, _) in data.vowel_signs.iter() {
                clusters.push(format!("{}{}", consonant, sign));
            }
        }

        if let Some((base, _)) = data.consonants.first() {
            for (modifier, _) in data.modifiers.iter() {
                clusters.push(format!("{}{}", base, modifier));
            }
        }

        clusters.extend((0..10).filter_map(|d| self.digit(d)).map(String::from));
        clusters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetic::approximate;

    fn all_keys(data: &ScriptData) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = Vec::new();
        keys.extend(data.vowels.iter().chain(data.vowel_aliases.iter()).map(|(k, _)| *k));
        keys.extend(data.vowel_signs.iter().chain(data.vowel_sign_aliases.iter()).map(|(k, _)| *k));
        keys.extend(data.consonants.iter().chain(data.consonant_aliases.iter()).map(|(k, _)| *k));
        keys.extend(data.dead_consonants.iter().map(|(k, _)| *k));
        keys.extend(data.modifiers.iter().chain(data.modifier_aliases.iter()).map(|(k, _)| *k));
        keys
    }

    #[test]
    fn test_every_script_has_a_table() {
        for script in Script::all() {
            assert_eq!(table(*script).script(), *script);
        }
    }

    #[test]
    fn test_no_duplicate_keys() {
        for script in Script::all() {
            let keys = all_keys(table(*script).data());
            let unique: HashSet<_> = keys.iter().collect();
            assert_eq!(keys.len(), unique.len(), "duplicate key in {}", script);
        }
    }

    #[test]
    fn test_keys_stay_in_block() {
        for script in Script::all() {
            for key in all_keys(table(*script).data()) {
                assert!(
                    key.chars().all(|c| script.contains_char(c)),
                    "{:?} outside {}",
                    key,
                    script
                );
            }
        }
    }

    #[test]
    fn test_longest_match_prefers_decomposed_sign() {
        let tamil = table(Script::Tamil);
        // ொ written as ெ + ா
        assert_eq!(
            tamil.match_vowel_sign("\u{0BC6}\u{0BBE}"),
            Some((Vowel::ShortO, 6))
        );
        assert_eq!(tamil.match_vowel_sign("\u{0BC6}"), Some((Vowel::ShortE, 3)));
    }

    #[test]
    fn test_nukta_spellings() {
        let deva = table(Script::Devanagari);
        assert_eq!(deva.match_consonant("\u{095B}"), Some((Consonant::Z, 3)));
        assert_eq!(deva.match_consonant("\u{091C}\u{093C}"), Some((Consonant::Z, 6)));
        assert_eq!(deva.consonant(Consonant::Z), Some("\u{091C}\u{093C}"));
        assert_eq!(deva.match_consonant("\u{091C}"), Some((Consonant::J, 3)));
    }

    #[test]
    fn test_digits() {
        let telugu = table(Script::Telugu);
        assert_eq!(telugu.digit_value('\u{0C6F}'), Some(9));
        assert_eq!(telugu.digit_value('9'), None);
        assert_eq!(telugu.digit(4), Some('\u{0C6A}'));
        assert_eq!(telugu.digit(10), None);
    }

    #[test]
    fn test_marks() {
        let deva = table(Script::Devanagari);
        assert!(deva.is_mark('\u{094D}'));
        assert!(deva.is_mark('\u{093C}'));
        assert!(deva.is_mark('\u{0902}'));
        assert!(!deva.is_mark('\u{093D}'));
        assert!(!deva.is_mark('\u{0915}'));
    }

    #[test]
    fn test_every_unit_reachable_in_every_script() {
        // Everything any script reads must be writable (directly or through
        // approximation) in every other script, whatever follows it.
        // Avagraha has no substitute.
        let followers = [Some(PhoneticUnit::from(Consonant::K)), None];

        for source in Script::all() {
            let data = table(*source).data();
            let units: Vec<PhoneticUnit> = data
                .vowels
                .iter()
                .chain(data.vowel_aliases.iter())
                .map(|(_, v)| PhoneticUnit::from(*v))
                .chain(
                    data.consonants
                        .iter()
                        .chain(data.consonant_aliases.iter())
                        .chain(data.dead_consonants.iter())
                        .map(|(_, c)| PhoneticUnit::from(*c)),
                )
                .chain(
                    data.modifiers
                        .iter()
                        .chain(data.modifier_aliases.iter())
                        .map(|(_, m)| PhoneticUnit::from(*m)),
                )
                .collect();

            for target in Script::all() {
                let target_table = table(*target);
                for unit in &units {
                    if *unit == PhoneticUnit::Modifier(Modifier::Avagraha) {
                        continue;
                    }
                    for follower in followers {
                        let mut pending = vec![*unit];
                        let mut steps = 0;
                        while let Some(current) = pending.pop() {
                            if target_table.renders(current, false) {
                                continue;
                            }
                            let replacement =
                                approximate(current, follower).unwrap_or_else(|| {
                                    panic!(
                                        "{:?} from {} has no rendering in {} before {:?}",
                                        unit, source, target, follower
                                    )
                                });
                            pending.extend(replacement);
                            steps += 1;
                            assert!(steps < 16);
                        }
                    }
                }
            }
        }
    }
}
