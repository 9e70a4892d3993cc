//! Gujarati

use super::ScriptData;
use crate::phonetic::{Consonant as C, Modifier as M, Vowel as V};
use streetlight_core::Script;

pub(super) static DATA: ScriptData = ScriptData {
    script: Script::Gujarati,
    virama: '\u{0ACD}',
    nukta: Some('\u{0ABC}'),
    digit_zero: '\u{0AE6}',
    vowels: &[
        ("\u{0A85}", V::A), // અ
        ("\u{0A86}", V::Aa), // આ
        ("\u{0A87}", V::I), // ઇ
        ("\u{0A88}", V::Ii), // ઈ
        ("\u{0A89}", V::U), // ઉ
        ("\u{0A8A}", V::Uu), // ઊ
        ("\u{0A8B}", V::VocalicR), // ઋ
        ("\u{0AE0}", V::VocalicRr), // ૠ
        ("\u{0A8C}", V::VocalicL), // ઌ
        ("\u{0AE1}", V::VocalicLl), // ૡ
        ("\u{0A8D}", V::CandraE), // ઍ
        ("\u{0A8F}", V::E), // એ
        ("\u{0A90}", V::Ai), // ઐ
        ("\u{0A91}", V::CandraO), // ઑ
        ("\u{0A93}", V::O), // ઓ
        ("\u{0A94}", V::Au), // ઔ
    ],
    vowel_signs: &[
        ("\u{0ABE}", V::Aa), // ◌ા
        ("\u{0ABF}", V::I), // ◌િ
        ("\u{0AC0}", V::Ii), // ◌ી
        ("\u{0AC1}", V::U), // ◌ુ
        ("\u{0AC2}", V::Uu), // ◌ૂ
        ("\u{0AC3}", V::VocalicR), // ◌ૃ
        ("\u{0AC4}", V::VocalicRr), // ◌ૄ
        ("\u{0AE2}", V::VocalicL), // ◌ૢ
        ("\u{0AE3}", V::VocalicLl), // ◌ૣ
        ("\u{0AC5}", V::CandraE), // ◌ૅ
        ("\u{0AC7}", V::E), // ◌ે
        ("\u{0AC8}", V::Ai), // ◌ૈ
        ("\u{0AC9}", V::CandraO), // ◌ૉ
        ("\u{0ACB}", V::O), // ◌ો
        ("\u{0ACC}", V::Au), // ◌ૌ
    ],
    consonants: &[
        ("\u{0A95}", C::K), // ક
        ("\u{0A96}", C::Kh), // ખ
        ("\u{0A97}", C::G), // ગ
        ("\u{0A98}", C::Gh), // ઘ
        ("\u{0A99}", C::Ng), // ઙ
        ("\u{0A9A}", C::C), // ચ
        ("\u{0A9B}", C::Ch), // છ
        ("\u{0A9C}", C::J), // જ
        ("\u{0A9D}", C::Jh), // ઝ
        ("\u{0A9E}", C::Ny), // ઞ
        ("\u{0A9F}", C::Tt), // ટ
        ("\u{0AA0}", C::Tth), // ઠ
        ("\u{0AA1}", C::Dd), // ડ
        ("\u{0AA2}", C::Ddh), // ઢ
        ("\u{0AA3}", C::Nn), // ણ
        ("\u{0AA4}", C::T), // ત
        ("\u{0AA5}", C::Th), // થ
        ("\u{0AA6}", C::D), // દ
        ("\u{0AA7}", C::Dh), // ધ
        ("\u{0AA8}", C::N), // ન
        ("\u{0AAA}", C::P), // પ
        ("\u{0AAB}", C::Ph), // ફ
        ("\u{0AAC}", C::B), // બ
        ("\u{0AAD}", C::Bh), // ભ
        ("\u{0AAE}", C::M), // મ
        ("\u{0AAF}", C::Y), // ય
        ("\u{0AB0}", C::R), // ર
        ("\u{0AB2}", C::L), // લ
        ("\u{0AB3}", C::Ll), // ળ
        ("\u{0AB5}", C::V), // વ
        ("\u{0AB6}", C::Sh), // શ
        ("\u{0AB7}", C::Ss), // ષ
        ("\u{0AB8}", C::S), // સ
        ("\u{0AB9}", C::H), // હ
        ("\u{0A95}\u{0ABC}", C::Q), // ક઼
        ("\u{0A96}\u{0ABC}", C::Khh), // ખ઼
        ("\u{0A97}\u{0ABC}", C::Ghh), // ગ઼
        ("\u{0A9C}\u{0ABC}", C::Z), // જ઼
        ("\u{0AA1}\u{0ABC}", C::Rh), // ડ઼
        ("\u{0AA2}\u{0ABC}", C::Rhh), // ઢ઼
        ("\u{0AAB}\u{0ABC}", C::F), // ફ઼
        ("\u{0AAF}\u{0ABC}", C::Yy), // ય઼
    ],
    modifiers: &[
        ("\u{0A81}", M::Candrabindu), // ◌ઁ
        ("\u{0A82}", M::Anusvara), // ◌ં
        ("\u{0A83}", M::Visarga), // ◌ઃ
        ("\u{0ABD}", M::Avagraha), // ઽ
    ],
    dead_consonants: &[],
    vowel_aliases: &[],
    vowel_sign_aliases: &[],
    consonant_aliases: &[],
    modifier_aliases: &[],
};
