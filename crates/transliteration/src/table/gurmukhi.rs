//! Gurmukhi: Punjabi

use super::ScriptData;
use crate::phonetic::{Consonant as C, Modifier as M, Vowel as V};
use streetlight_core::Script;

pub(super) static DATA: ScriptData = ScriptData {
    script: Script::Gurmukhi,
    virama: '\u{0A4D}',
    nukta: Some('\u{0A3C}'),
    digit_zero: '\u{0A66}',
    vowels: &[
        ("\u{0A05}", V::A), // ਅ
        ("\u{0A06}", V::Aa), // ਆ
        ("\u{0A07}", V::I), // ਇ
        ("\u{0A08}", V::Ii), // ਈ
        ("\u{0A09}", V::U), // ਉ
        ("\u{0A0A}", V::Uu), // ਊ
        ("\u{0A0F}", V::E), // ਏ
        ("\u{0A10}", V::Ai), // ਐ
        ("\u{0A13}", V::O), // ਓ
        ("\u{0A14}", V::Au), // ਔ
    ],
    vowel_signs: &[
        ("\u{0A3E}", V::Aa), // ◌ਾ
        ("\u{0A3F}", V::I), // ◌ਿ
        ("\u{0A40}", V::Ii), // ◌ੀ
        ("\u{0A41}", V::U), // ◌ੁ
        ("\u{0A42}", V::Uu), // ◌ੂ
        ("\u{0A47}", V::E), // ◌ੇ
        ("\u{0A48}", V::Ai), // ◌ੈ
        ("\u{0A4B}", V::O), // ◌ੋ
        ("\u{0A4C}", V::Au), // ◌ੌ
    ],
    consonants: &[
        ("\u{0A15}", C::K), // ਕ
        ("\u{0A16}", C::Kh), // ਖ
        ("\u{0A17}", C::G), // ਗ
        ("\u{0A18}", C::Gh), // ਘ
        ("\u{0A19}", C::Ng), // ਙ
        ("\u{0A1A}", C::C), // ਚ
        ("\u{0A1B}", C::Ch), // ਛ
        ("\u{0A1C}", C::J), // ਜ
        ("\u{0A1D}", C::Jh), // ਝ
        ("\u{0A1E}", C::Ny), // ਞ
        ("\u{0A1F}", C::Tt), // ਟ
        ("\u{0A20}", C::Tth), // ਠ
        ("\u{0A21}", C::Dd), // ਡ
        ("\u{0A22}", C::Ddh), // ਢ
        ("\u{0A23}", C::Nn), // ਣ
        ("\u{0A24}", C::T), // ਤ
        ("\u{0A25}", C::Th), // ਥ
        ("\u{0A26}", C::D), // ਦ
        ("\u{0A27}", C::Dh), // ਧ
        ("\u{0A28}", C::N), // ਨ
        ("\u{0A2A}", C::P), // ਪ
        ("\u{0A2B}", C::Ph), // ਫ
        ("\u{0A2C}", C::B), // ਬ
        ("\u{0A2D}", C::Bh), // ਭ
        ("\u{0A2E}", C::M), // ਮ
        ("\u{0A2F}", C::Y), // ਯ
        ("\u{0A30}", C::R), // ਰ
        ("\u{0A32}", C::L), // ਲ
        ("\u{0A32}\u{0A3C}", C::Ll), // ਲ਼
        ("\u{0A35}", C::V), // ਵ
        ("\u{0A38}\u{0A3C}", C::Sh), // ਸ਼
        ("\u{0A38}", C::S), // ਸ
        ("\u{0A39}", C::H), // ਹ
        ("\u{0A15}\u{0A3C}", C::Q), // ਕ਼
        ("\u{0A16}\u{0A3C}", C::Khh), // ਖ਼
        ("\u{0A17}\u{0A3C}", C::Ghh), // ਗ਼
        ("\u{0A1C}\u{0A3C}", C::Z), // ਜ਼
        ("\u{0A5C}", C::Rh), // ੜ
        ("\u{0A22}\u{0A3C}", C::Rhh), // ਢ਼
        ("\u{0A2B}\u{0A3C}", C::F), // ਫ਼
        ("\u{0A2F}\u{0A3C}", C::Yy), // ਯ਼
    ],
    modifiers: &[
        ("\u{0A01}", M::Candrabindu), // ◌ਁ
        ("\u{0A02}", M::Anusvara), // ◌ਂ
        ("\u{0A03}", M::Visarga), // ◌ਃ
        ("\u{0A71}", M::Geminate), // ◌ੱ
    ],
    dead_consonants: &[],
    vowel_aliases: &[],
    vowel_sign_aliases: &[],
    consonant_aliases: &[
        ("\u{0A33}", C::Ll), // ਲ਼
        ("\u{0A36}", C::Sh), // ਸ਼
        ("\u{0A59}", C::Khh), // ਖ਼
        ("\u{0A5A}", C::Ghh), // ਗ਼
        ("\u{0A5B}", C::Z), // ਜ਼
        ("\u{0A5E}", C::F), // ਫ਼
    ],
    modifier_aliases: &[
        ("\u{0A70}", M::Anusvara), // ◌ੰ
    ],
};
