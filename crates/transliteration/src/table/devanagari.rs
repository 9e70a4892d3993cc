//! Devanagari: Hindi, Marathi, Sanskrit, Nepali

use super::ScriptData;
use crate::phonetic::{Consonant as C, Modifier as M, Vowel as V};
use streetlight_core::Script;

pub(super) static DATA: ScriptData = ScriptData {
    script: Script::Devanagari,
    virama: '\u{094D}',
    nukta: Some('\u{093C}'),
    digit_zero: '\u{0966}',
    vowels: &[
        ("\u{0905}", V::A), // अ
        ("\u{0906}", V::Aa), // आ
        ("\u{0907}", V::I), // इ
        ("\u{0908}", V::Ii), // ई
        ("\u{0909}", V::U), // उ
        ("\u{090A}", V::Uu), // ऊ
        ("\u{090B}", V::VocalicR), // ऋ
        ("\u{0960}", V::VocalicRr), // ॠ
        ("\u{090C}", V::VocalicL), // ऌ
        ("\u{0961}", V::VocalicLl), // ॡ
        ("\u{090D}", V::CandraE), // ऍ
        ("\u{090E}", V::ShortE), // ऎ
        ("\u{090F}", V::E), // ए
        ("\u{0910}", V::Ai), // ऐ
        ("\u{0911}", V::CandraO), // ऑ
        ("\u{0912}", V::ShortO), // ऒ
        ("\u{0913}", V::O), // ओ
        ("\u{0914}", V::Au), // औ
    ],
    vowel_signs: &[
        ("\u{093E}", V::Aa), // ◌ा
        ("\u{093F}", V::I), // ◌ि
        ("\u{0940}", V::Ii), // ◌ी
        ("\u{0941}", V::U), // ◌ु
        ("\u{0942}", V::Uu), // ◌ू
        ("\u{0943}", V::VocalicR), // ◌ृ
        ("\u{0944}", V::VocalicRr), // ◌ॄ
        ("\u{0962}", V::VocalicL), // ◌ॢ
        ("\u{0963}", V::VocalicLl), // ◌ॣ
        ("\u{0945}", V::CandraE), // ◌ॅ
        ("\u{0946}", V::ShortE), // ◌ॆ
        ("\u{0947}", V::E), // ◌े
        ("\u{0948}", V::Ai), // ◌ै
        ("\u{0949}", V::CandraO), // ◌ॉ
        ("\u{094A}", V::ShortO), // ◌ॊ
        ("\u{094B}", V::O), // ◌ो
        ("\u{094C}", V::Au), // ◌ौ
    ],
    consonants: &[
        ("\u{0915}", C::K), // क
        ("\u{0916}", C::Kh), // ख
        ("\u{0917}", C::G), // ग
        ("\u{0918}", C::Gh), // घ
        ("\u{0919}", C::Ng), // ङ
        ("\u{091A}", C::C), // च
        ("\u{091B}", C::Ch), // छ
        ("\u{091C}", C::J), // ज
        ("\u{091D}", C::Jh), // झ
        ("\u{091E}", C::Ny), // ञ
        ("\u{091F}", C::Tt), // ट
        ("\u{0920}", C::Tth), // ठ
        ("\u{0921}", C::Dd), // ड
        ("\u{0922}", C::Ddh), // ढ
        ("\u{0923}", C::Nn), // ण
        ("\u{0924}", C::T), // त
        ("\u{0925}", C::Th), // थ
        ("\u{0926}", C::D), // द
        ("\u{0927}", C::Dh), // ध
        ("\u{0928}", C::N), // न
        ("\u{0929}", C::Nnn), // ऩ
        ("\u{092A}", C::P), // प
        ("\u{092B}", C::Ph), // फ
        ("\u{092C}", C::B), // ब
        ("\u{092D}", C::Bh), // भ
        ("\u{092E}", C::M), // म
        ("\u{092F}", C::Y), // य
        ("\u{0930}", C::R), // र
        ("\u{0931}", C::Rr), // ऱ
        ("\u{0932}", C::L), // ल
        ("\u{0933}", C::Ll), // ळ
        ("\u{0934}", C::Lll), // ऴ
        ("\u{0935}", C::V), // व
        ("\u{0936}", C::Sh), // श
        ("\u{0937}", C::Ss), // ष
        ("\u{0938}", C::S), // स
        ("\u{0939}", C::H), // ह
        ("\u{0915}\u{093C}", C::Q), // क़
        ("\u{0916}\u{093C}", C::Khh), // ख़
        ("\u{0917}\u{093C}", C::Ghh), // ग़
        ("\u{091C}\u{093C}", C::Z), // ज़
        ("\u{0921}\u{093C}", C::Rh), // ड़
        ("\u{0922}\u{093C}", C::Rhh), // ढ़
        ("\u{092B}\u{093C}", C::F), // फ़
        ("\u{092F}\u{093C}", C::Yy), // य़
    ],
    modifiers: &[
        ("\u{0901}", M::Candrabindu), // ◌ँ
        ("\u{0902}", M::Anusvara), // ◌ं
        ("\u{0903}", M::Visarga), // ◌ः
        ("\u{093D}", M::Avagraha), // ऽ
    ],
    dead_consonants: &[],
    vowel_aliases: &[],
    vowel_sign_aliases: &[],
    consonant_aliases: &[
        ("\u{0928}\u{093C}", C::Nnn), // ऩ
        ("\u{0930}\u{093C}", C::Rr), // ऱ
        ("\u{0933}\u{093C}", C::Lll), // ऴ
        ("\u{0958}", C::Q), // क़
        ("\u{0959}", C::Khh), // ख़
        ("\u{095A}", C::Ghh), // ग़
        ("\u{095B}", C::Z), // ज़
        ("\u{095C}", C::Rh), // ड़
        ("\u{095D}", C::Rhh), // ढ़
        ("\u{095E}", C::F), // फ़
        ("\u{095F}", C::Yy), // य़
    ],
    modifier_aliases: &[],
};
