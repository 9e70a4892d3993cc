//! Tamil, including the Grantha letters used for loans

use super::ScriptData;
use crate::phonetic::{Consonant as C, Modifier as M, Vowel as V};
use streetlight_core::Script;

pub(super) static DATA: ScriptData = ScriptData {
    script: Script::Tamil,
    virama: '\u{0BCD}',
    nukta: None,
    digit_zero: '\u{0BE6}',
    vowels: &[
        ("\u{0B85}", V::A), // அ
        ("\u{0B86}", V::Aa), // ஆ
        ("\u{0B87}", V::I), // இ
        ("\u{0B88}", V::Ii), // ஈ
        ("\u{0B89}", V::U), // உ
        ("\u{0B8A}", V::Uu), // ஊ
        ("\u{0B8E}", V::ShortE), // எ
        ("\u{0B8F}", V::E), // ஏ
        ("\u{0B90}", V::Ai), // ஐ
        ("\u{0B92}", V::ShortO), // ஒ
        ("\u{0B93}", V::O), // ஓ
        ("\u{0B94}", V::Au), // ஔ
    ],
    vowel_signs: &[
        ("\u{0BBE}", V::Aa), // ◌ா
        ("\u{0BBF}", V::I), // ◌ி
        ("\u{0BC0}", V::Ii), // ◌ீ
        ("\u{0BC1}", V::U), // ◌ு
        ("\u{0BC2}", V::Uu), // ◌ூ
        ("\u{0BC6}", V::ShortE), // ◌ெ
        ("\u{0BC7}", V::E), // ◌ே
        ("\u{0BC8}", V::Ai), // ◌ை
        ("\u{0BCA}", V::ShortO), // ◌ொ
        ("\u{0BCB}", V::O), // ◌ோ
        ("\u{0BCC}", V::Au), // ◌ௌ
    ],
    consonants: &[
        ("\u{0B95}", C::K), // க
        ("\u{0B99}", C::Ng), // ங
        ("\u{0B9A}", C::C), // ச
        ("\u{0B9C}", C::J), // ஜ
        ("\u{0B9E}", C::Ny), // ஞ
        ("\u{0B9F}", C::Tt), // ட
        ("\u{0BA3}", C::Nn), // ண
        ("\u{0BA4}", C::T), // த
        ("\u{0BA8}", C::N), // ந
        ("\u{0BA9}", C::Nnn), // ன
        ("\u{0BAA}", C::P), // ப
        ("\u{0BAE}", C::M), // ம
        ("\u{0BAF}", C::Y), // ய
        ("\u{0BB0}", C::R), // ர
        ("\u{0BB1}", C::Rr), // ற
        ("\u{0BB2}", C::L), // ல
        ("\u{0BB3}", C::Ll), // ள
        ("\u{0BB4}", C::Lll), // ழ
        ("\u{0BB5}", C::V), // வ
        ("\u{0BB6}", C::Sh), // ஶ
        ("\u{0BB7}", C::Ss), // ஷ
        ("\u{0BB8}", C::S), // ஸ
        ("\u{0BB9}", C::H), // ஹ
    ],
    modifiers: &[
        ("\u{0B83}", M::Visarga), // ஃ
    ],
    dead_consonants: &[],
    vowel_aliases: &[
        ("\u{0B92}\u{0BD7}", V::Au), // ஔ
    ],
    vowel_sign_aliases: &[
        ("\u{0BC6}\u{0BBE}", V::ShortO), // ◌ொ
        ("\u{0BC7}\u{0BBE}", V::O), // ◌ோ
        ("\u{0BC6}\u{0BD7}", V::Au), // ◌ௌ
    ],
    consonant_aliases: &[],
    modifier_aliases: &[
        ("\u{0B82}", M::Anusvara), // ◌ஂ
    ],
};
