//! Telugu

use super::ScriptData;
use crate::phonetic::{Consonant as C, Modifier as M, Vowel as V};
use streetlight_core::Script;

pub(super) static DATA: ScriptData = ScriptData {
    script: Script::Telugu,
    virama: '\u{0C4D}',
    nukta: None,
    digit_zero: '\u{0C66}',
    vowels: &[
        ("\u{0C05}", V::A), // అ
        ("\u{0C06}", V::Aa), // ఆ
        ("\u{0C07}", V::I), // ఇ
        ("\u{0C08}", V::Ii), // ఈ
        ("\u{0C09}", V::U), // ఉ
        ("\u{0C0A}", V::Uu), // ఊ
        ("\u{0C0B}", V::VocalicR), // ఋ
        ("\u{0C60}", V::VocalicRr), // ౠ
        ("\u{0C0C}", V::VocalicL), // ఌ
        ("\u{0C61}", V::VocalicLl), // ౡ
        ("\u{0C0E}", V::ShortE), // ఎ
        ("\u{0C0F}", V::E), // ఏ
        ("\u{0C10}", V::Ai), // ఐ
        ("\u{0C12}", V::ShortO), // ఒ
        ("\u{0C13}", V::O), // ఓ
        ("\u{0C14}", V::Au), // ఔ
    ],
    vowel_signs: &[
        ("\u{0C3E}", V::Aa), // ◌ా
        ("\u{0C3F}", V::I), // ◌ి
        ("\u{0C40}", V::Ii), // ◌ీ
        ("\u{0C41}", V::U), // ◌ు
        ("\u{0C42}", V::Uu), // ◌ూ
        ("\u{0C43}", V::VocalicR), // ◌ృ
        ("\u{0C44}", V::VocalicRr), // ◌ౄ
        ("\u{0C62}", V::VocalicL), // ◌ౢ
        ("\u{0C63}", V::VocalicLl), // ◌ౣ
        ("\u{0C46}", V::ShortE), // ◌ె
        ("\u{0C47}", V::E), // ◌ే
        ("\u{0C48}", V::Ai), // ◌ై
        ("\u{0C4A}", V::ShortO), // ◌ొ
        ("\u{0C4B}", V::O), // ◌ో
        ("\u{0C4C}", V::Au), // ◌ౌ
    ],
    consonants: &[
        ("\u{0C15}", C::K), // క
        ("\u{0C16}", C::Kh), // ఖ
        ("\u{0C17}", C::G), // గ
        ("\u{0C18}", C::Gh), // ఘ
        ("\u{0C19}", C::Ng), // ఙ
        ("\u{0C1A}", C::C), // చ
        ("\u{0C1B}", C::Ch), // ఛ
        ("\u{0C1C}", C::J), // జ
        ("\u{0C1D}", C::Jh), // ఝ
        ("\u{0C1E}", C::Ny), // ఞ
        ("\u{0C1F}", C::Tt), // ట
        ("\u{0C20}", C::Tth), // ఠ
        ("\u{0C21}", C::Dd), // డ
        ("\u{0C22}", C::Ddh), // ఢ
        ("\u{0C23}", C::Nn), // ణ
        ("\u{0C24}", C::T), // త
        ("\u{0C25}", C::Th), // థ
        ("\u{0C26}", C::D), // ద
        ("\u{0C27}", C::Dh), // ధ
        ("\u{0C28}", C::N), // న
        ("\u{0C2A}", C::P), // ప
        ("\u{0C2B}", C::Ph), // ఫ
        ("\u{0C2C}", C::B), // బ
        ("\u{0C2D}", C::Bh), // భ
        ("\u{0C2E}", C::M), // మ
        ("\u{0C2F}", C::Y), // య
        ("\u{0C30}", C::R), // ర
        ("\u{0C31}", C::Rr), // ఱ
        ("\u{0C32}", C::L), // ల
        ("\u{0C33}", C::Ll), // ళ
        ("\u{0C34}", C::Lll), // ఴ
        ("\u{0C35}", C::V), // వ
        ("\u{0C36}", C::Sh), // శ
        ("\u{0C37}", C::Ss), // ష
        ("\u{0C38}", C::S), // స
        ("\u{0C39}", C::H), // హ
    ],
    modifiers: &[
        ("\u{0C01}", M::Candrabindu), // ◌ఁ
        ("\u{0C02}", M::Anusvara), // ◌ం
        ("\u{0C03}", M::Visarga), // ◌ః
        ("\u{0C3D}", M::Avagraha), // ఽ
    ],
    dead_consonants: &[],
    vowel_aliases: &[],
    vowel_sign_aliases: &[
        ("\u{0C46}\u{0C56}", V::Ai), // ◌ై
    ],
    consonant_aliases: &[],
    modifier_aliases: &[
        ("\u{0C00}", M::Candrabindu), // ◌ఀ
    ],
};
