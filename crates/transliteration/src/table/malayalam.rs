//! Malayalam

use super::ScriptData;
use crate::phonetic::{Consonant as C, Modifier as M, Vowel as V};
use streetlight_core::Script;

pub(super) static DATA: ScriptData = ScriptData {
    script: Script::Malayalam,
    virama: '\u{0D4D}',
    nukta: None,
    digit_zero: '\u{0D66}',
    vowels: &[
        ("\u{0D05}", V::A), // അ
        ("\u{0D06}", V::Aa), // ആ
        ("\u{0D07}", V::I), // ഇ
        ("\u{0D08}", V::Ii), // ഈ
        ("\u{0D09}", V::U), // ഉ
        ("\u{0D0A}", V::Uu), // ഊ
        ("\u{0D0B}", V::VocalicR), // ഋ
        ("\u{0D60}", V::VocalicRr), // ൠ
        ("\u{0D0C}", V::VocalicL), // ഌ
        ("\u{0D61}", V::VocalicLl), // ൡ
        ("\u{0D0E}", V::ShortE), // എ
        ("\u{0D0F}", V::E), // ഏ
        ("\u{0D10}", V::Ai), // ഐ
        ("\u{0D12}", V::ShortO), // ഒ
        ("\u{0D13}", V::O), // ഓ
        ("\u{0D14}", V::Au), // ഔ
    ],
    vowel_signs: &[
        ("\u{0D3E}", V::Aa), // ◌ാ
        ("\u{0D3F}", V::I), // ◌ി
        ("\u{0D40}", V::Ii), // ◌ീ
        ("\u{0D41}", V::U), // ◌ു
        ("\u{0D42}", V::Uu), // ◌ൂ
        ("\u{0D43}", V::VocalicR), // ◌ൃ
        ("\u{0D44}", V::VocalicRr), // ◌ൄ
        ("\u{0D62}", V::VocalicL), // ◌ൢ
        ("\u{0D63}", V::VocalicLl), // ◌ൣ
        ("\u{0D46}", V::ShortE), // ◌െ
        ("\u{0D47}", V::E), // ◌േ
        ("\u{0D48}", V::Ai), // ◌ൈ
        ("\u{0D4A}", V::ShortO), // ◌ൊ
        ("\u{0D4B}", V::O), // ◌ോ
        ("\u{0D4C}", V::Au), // ◌ൌ
    ],
    consonants: &[
        ("\u{0D15}", C::K), // ക
        ("\u{0D16}", C::Kh), // ഖ
        ("\u{0D17}", C::G), // ഗ
        ("\u{0D18}", C::Gh), // ഘ
        ("\u{0D19}", C::Ng), // ങ
        ("\u{0D1A}", C::C), // ച
        ("\u{0D1B}", C::Ch), // ഛ
        ("\u{0D1C}", C::J), // ജ
        ("\u{0D1D}", C::Jh), // ഝ
        ("\u{0D1E}", C::Ny), // ഞ
        ("\u{0D1F}", C::Tt), // ട
        ("\u{0D20}", C::Tth), // ഠ
        ("\u{0D21}", C::Dd), // ഡ
        ("\u{0D22}", C::Ddh), // ഢ
        ("\u{0D23}", C::Nn), // ണ
        ("\u{0D24}", C::T), // ത
        ("\u{0D25}", C::Th), // ഥ
        ("\u{0D26}", C::D), // ദ
        ("\u{0D27}", C::Dh), // ധ
        ("\u{0D28}", C::N), // ന
        ("\u{0D29}", C::Nnn), // ഩ
        ("\u{0D2A}", C::P), // പ
        ("\u{0D2B}", C::Ph), // ഫ
        ("\u{0D2C}", C::B), // ബ
        ("\u{0D2D}", C::Bh), // ഭ
        ("\u{0D2E}", C::M), // മ
        ("\u{0D2F}", C::Y), // യ
        ("\u{0D30}", C::R), // ര
        ("\u{0D31}", C::Rr), // റ
        ("\u{0D32}", C::L), // ല
        ("\u{0D33}", C::Ll), // ള
        ("\u{0D34}", C::Lll), // ഴ
        ("\u{0D35}", C::V), // വ
        ("\u{0D36}", C::Sh), // ശ
        ("\u{0D37}", C::Ss), // ഷ
        ("\u{0D38}", C::S), // സ
        ("\u{0D39}", C::H), // ഹ
    ],
    modifiers: &[
        ("\u{0D01}", M::Candrabindu), // ◌ഁ
        ("\u{0D02}", M::Anusvara), // ◌ം
        ("\u{0D03}", M::Visarga), // ◌ഃ
        ("\u{0D3D}", M::Avagraha), // ഽ
    ],
    dead_consonants: &[
        ("\u{0D7A}", C::Nn), // ൺ
        ("\u{0D7B}", C::N), // ൻ
        ("\u{0D7C}", C::R), // ർ
        ("\u{0D7D}", C::L), // ൽ
        ("\u{0D7E}", C::Ll), // ൾ
        ("\u{0D7F}", C::K), // ൿ
        ("\u{0D54}", C::M), // ൔ
        ("\u{0D55}", C::Y), // ൕ
        ("\u{0D56}", C::Lll), // ൖ
        ("\u{0D4E}", C::R), // ൎ
    ],
    vowel_aliases: &[],
    vowel_sign_aliases: &[
        ("\u{0D46}\u{0D3E}", V::ShortO), // ◌ൊ
        ("\u{0D47}\u{0D3E}", V::O), // ◌ോ
        ("\u{0D46}\u{0D57}", V::Au), // ◌ൌ
        ("\u{0D57}", V::Au), // ◌ൗ
    ],
    consonant_aliases: &[],
    modifier_aliases: &[
        ("\u{0D00}", M::Anusvara), // ◌ഀ
    ],
};
