//! Bengali-Assamese

use super::ScriptData;
use crate::phonetic::{Consonant as C, Modifier as M, Vowel as V};
use streetlight_core::Script;

pub(super) static DATA: ScriptData = ScriptData {
    script: Script::Bengali,
    virama: '\u{09CD}',
    nukta: Some('\u{09BC}'),
    digit_zero: '\u{09E6}',
    vowels: &[
        ("\u{0985}", V::A), // অ
        ("\u{0986}", V::Aa), // আ
        ("\u{0987}", V::I), // ই
        ("\u{0988}", V::Ii), // ঈ
        ("\u{0989}", V::U), // উ
        ("\u{098A}", V::Uu), // ঊ
        ("\u{098B}", V::VocalicR), // ঋ
        ("\u{09E0}", V::VocalicRr), // ৠ
        ("\u{098C}", V::VocalicL), // ঌ
        ("\u{09E1}", V::VocalicLl), // ৡ
        ("\u{098F}", V::E), // এ
        ("\u{0990}", V::Ai), // ঐ
        ("\u{0993}", V::O), // ও
        ("\u{0994}", V::Au), // ঔ
    ],
    vowel_signs: &[
        ("\u{09BE}", V::Aa), // ◌া
        ("\u{09BF}", V::I), // ◌ি
        ("\u{09C0}", V::Ii), // ◌ী
        ("\u{09C1}", V::U), // ◌ু
        ("\u{09C2}", V::Uu), // ◌ূ
        ("\u{09C3}", V::VocalicR), // ◌ৃ
        ("\u{09C4}", V::VocalicRr), // ◌ৄ
        ("\u{09E2}", V::VocalicL), // ◌ৢ
        ("\u{09E3}", V::VocalicLl), // ◌ৣ
        ("\u{09C7}", V::E), // ◌ে
        ("\u{09C8}", V::Ai), // ◌ৈ
        ("\u{09CB}", V::O), // ◌ো
        ("\u{09CC}", V::Au), // ◌ৌ
    ],
    consonants: &[
        ("\u{0995}", C::K), // ক
        ("\u{0996}", C::Kh), // খ
        ("\u{0997}", C::G), // গ
        ("\u{0998}", C::Gh), // ঘ
        ("\u{0999}", C::Ng), // ঙ
        ("\u{099A}", C::C), // চ
        ("\u{099B}", C::Ch), // ছ
        ("\u{099C}", C::J), // জ
        ("\u{099D}", C::Jh), // ঝ
        ("\u{099E}", C::Ny), // ঞ
        ("\u{099F}", C::Tt), // ট
        ("\u{09A0}", C::Tth), // ঠ
        ("\u{09A1}", C::Dd), // ড
        ("\u{09A2}", C::Ddh), // ঢ
        ("\u{09A3}", C::Nn), // ণ
        ("\u{09A4}", C::T), // ত
        ("\u{09A5}", C::Th), // থ
        ("\u{09A6}", C::D), // দ
        ("\u{09A7}", C::Dh), // ধ
        ("\u{09A8}", C::N), // ন
        ("\u{09AA}", C::P), // প
        ("\u{09AB}", C::Ph), // ফ
        ("\u{09AC}", C::B), // ব
        ("\u{09AD}", C::Bh), // ভ
        ("\u{09AE}", C::M), // ম
        ("\u{09AF}", C::Y), // য
        ("\u{09B0}", C::R), // র
        ("\u{09B2}", C::L), // ল
        ("\u{09B6}", C::Sh), // শ
        ("\u{09B7}", C::Ss), // ষ
        ("\u{09B8}", C::S), // স
        ("\u{09B9}", C::H), // হ
        ("\u{0995}\u{09BC}", C::Q), // ক়
        ("\u{0996}\u{09BC}", C::Khh), // খ়
        ("\u{0997}\u{09BC}", C::Ghh), // গ়
        ("\u{099C}\u{09BC}", C::Z), // জ়
        ("\u{09A1}\u{09BC}", C::Rh), // ড়
        ("\u{09A2}\u{09BC}", C::Rhh), // ঢ়
        ("\u{09AB}\u{09BC}", C::F), // ফ়
        ("\u{09AF}\u{09BC}", C::Yy), // য়
    ],
    modifiers: &[
        ("\u{0981}", M::Candrabindu), // ◌ঁ
        ("\u{0982}", M::Anusvara), // ◌ং
        ("\u{0983}", M::Visarga), // ◌ঃ
        ("\u{09BD}", M::Avagraha), // ঽ
    ],
    dead_consonants: &[
        ("\u{09CE}", C::T), // ৎ
    ],
    vowel_aliases: &[],
    vowel_sign_aliases: &[
        ("\u{09C7}\u{09BE}", V::O), // ◌ো
        ("\u{09C7}\u{09D7}", V::Au), // ◌ৌ
    ],
    consonant_aliases: &[
        ("\u{09DC}", C::Rh), // ড়
        ("\u{09DD}", C::Rhh), // ঢ়
        ("\u{09DF}", C::Yy), // য়
        // Assamese
        ("\u{09F0}", C::R), // ৰ
        ("\u{09F1}", C::V), // ৱ
    ],
    modifier_aliases: &[],
};
