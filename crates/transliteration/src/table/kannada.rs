//! Kannada

use super::ScriptData;
use crate::phonetic::{Consonant as C, Modifier as M, Vowel as V};
use streetlight_core::Script;

pub(super) static DATA: ScriptData = ScriptData {
    script: Script::Kannada,
    virama: '\u{0CCD}',
    nukta: Some('\u{0CBC}'),
    digit_zero: '\u{0CE6}',
    vowels: &[
        ("\u{0C85}", V::A), // ಅ
        ("\u{0C86}", V::Aa), // ಆ
        ("\u{0C87}", V::I), // ಇ
        ("\u{0C88}", V::Ii), // ಈ
        ("\u{0C89}", V::U), // ಉ
        ("\u{0C8A}", V::Uu), // ಊ
        ("\u{0C8B}", V::VocalicR), // ಋ
        ("\u{0CE0}", V::VocalicRr), // ೠ
        ("\u{0C8C}", V::VocalicL), // ಌ
        ("\u{0CE1}", V::VocalicLl), // ೡ
        ("\u{0C8E}", V::ShortE), // ಎ
        ("\u{0C8F}", V::E), // ಏ
        ("\u{0C90}", V::Ai), // ಐ
        ("\u{0C92}", V::ShortO), // ಒ
        ("\u{0C93}", V::O), // ಓ
        ("\u{0C94}", V::Au), // ಔ
    ],
    vowel_signs: &[
        ("\u{0CBE}", V::Aa), // ◌ಾ
        ("\u{0CBF}", V::I), // ◌ಿ
        ("\u{0CC0}", V::Ii), // ◌ೀ
        ("\u{0CC1}", V::U), // ◌ು
        ("\u{0CC2}", V::Uu), // ◌ೂ
        ("\u{0CC3}", V::VocalicR), // ◌ೃ
        ("\u{0CC4}", V::VocalicRr), // ◌ೄ
        ("\u{0CE2}", V::VocalicL), // ◌ೢ
        ("\u{0CE3}", V::VocalicLl), // ◌ೣ
        ("\u{0CC6}", V::ShortE), // ◌ೆ
        ("\u{0CC7}", V::E), // ◌ೇ
        ("\u{0CC8}", V::Ai), // ◌ೈ
        ("\u{0CCA}", V::ShortO), // ◌ೊ
        ("\u{0CCB}", V::O), // ◌ೋ
        ("\u{0CCC}", V::Au), // ◌ೌ
    ],
    consonants: &[
        ("\u{0C95}", C::K), // ಕ
        ("\u{0C96}", C::Kh), // ಖ
        ("\u{0C97}", C::G), // ಗ
        ("\u{0C98}", C::Gh), // ಘ
        ("\u{0C99}", C::Ng), // ಙ
        ("\u{0C9A}", C::C), // ಚ
        ("\u{0C9B}", C::Ch), // ಛ
        ("\u{0C9C}", C::J), // ಜ
        ("\u{0C9D}", C::Jh), // ಝ
        ("\u{0C9E}", C::Ny), // ಞ
        ("\u{0C9F}", C::Tt), // ಟ
        ("\u{0CA0}", C::Tth), // ಠ
        ("\u{0CA1}", C::Dd), // ಡ
        ("\u{0CA2}", C::Ddh), // ಢ
        ("\u{0CA3}", C::Nn), // ಣ
        ("\u{0CA4}", C::T), // ತ
        ("\u{0CA5}", C::Th), // ಥ
        ("\u{0CA6}", C::D), // ದ
        ("\u{0CA7}", C::Dh), // ಧ
        ("\u{0CA8}", C::N), // ನ
        ("\u{0CAA}", C::P), // ಪ
        ("\u{0CAB}", C::Ph), // ಫ
        ("\u{0CAC}", C::B), // ಬ
        ("\u{0CAD}", C::Bh), // ಭ
        ("\u{0CAE}", C::M), // ಮ
        ("\u{0CAF}", C::Y), // ಯ
        ("\u{0CB0}", C::R), // ರ
        ("\u{0CB1}", C::Rr), // ಱ
        ("\u{0CB2}", C::L), // ಲ
        ("\u{0CB3}", C::Ll), // ಳ
        ("\u{0CDE}", C::Lll), // ೞ
        ("\u{0CB5}", C::V), // ವ
        ("\u{0CB6}", C::Sh), // ಶ
        ("\u{0CB7}", C::Ss), // ಷ
        ("\u{0CB8}", C::S), // ಸ
        ("\u{0CB9}", C::H), // ಹ
        ("\u{0C95}\u{0CBC}", C::Q), // ಕ಼
        ("\u{0C96}\u{0CBC}", C::Khh), // ಖ಼
        ("\u{0C97}\u{0CBC}", C::Ghh), // ಗ಼
        ("\u{0C9C}\u{0CBC}", C::Z), // ಜ಼
        ("\u{0CA1}\u{0CBC}", C::Rh), // ಡ಼
        ("\u{0CA2}\u{0CBC}", C::Rhh), // ಢ಼
        ("\u{0CAB}\u{0CBC}", C::F), // ಫ಼
        ("\u{0CAF}\u{0CBC}", C::Yy), // ಯ಼
    ],
    modifiers: &[
        ("\u{0C81}", M::Candrabindu), // ◌ಁ
        ("\u{0C82}", M::Anusvara), // ◌ಂ
        ("\u{0C83}", M::Visarga), // ◌ಃ
        ("\u{0CBD}", M::Avagraha), // ಽ
    ],
    dead_consonants: &[],
    vowel_aliases: &[],
    vowel_sign_aliases: &[
        ("\u{0CBF}\u{0CD5}", V::Ii), // ◌ೀ
        ("\u{0CC6}\u{0CD5}", V::E), // ◌ೇ
        ("\u{0CC6}\u{0CD6}", V::Ai), // ◌ೈ
        ("\u{0CC6}\u{0CC2}", V::ShortO), // ◌ೊ
        ("\u{0CC6}\u{0CC2}\u{0CD5}", V::O), // ◌ೋ
    ],
    consonant_aliases: &[],
    modifier_aliases: &[],
};
