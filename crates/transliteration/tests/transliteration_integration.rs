//! Integration tests for detection and script-to-script conversion
//!
//! These tests exercise the public API end to end: classifier, both
//! pipeline stages and the request-level service.

use streetlight_config::{FallbackPolicy, TransliterationConfig};
use streetlight_core::Script;
use streetlight_transliteration::render::render;
use streetlight_transliteration::segment::segment;
use streetlight_transliteration::{
    create_transliterator, table, Stage, TransliterationEngine, TransliterationService,
};

/// A common word in every supported script
const SAMPLES: &[(Script, &str)] = &[
    (Script::Devanagari, "नमस्ते"),
    (Script::Tamil, "வணக்கம்"),
    (Script::Bengali, "নমস্কার"),
    (Script::Telugu, "నమస్కారం"),
    (Script::Kannada, "ನಮಸ್ಕಾರ"),
    (Script::Malayalam, "നമസ്കാരം"),
    (Script::Gurmukhi, "ਸਤਿ ਸ੍ਰੀ ਅਕਾਲ"),
    (Script::Gujarati, "નમસ્તે"),
];

/// Same-script input comes back untouched
#[test]
fn test_identity_scenario() {
    let engine = TransliterationEngine::new();
    assert_eq!(
        engine.transliterate("राम", Script::Devanagari, Some(Script::Devanagari)),
        "राम"
    );
}

/// Text with no Indian script is returned as is, with no detected script
#[test]
fn test_no_script_scenario() {
    let engine = TransliterationEngine::new();
    assert_eq!(engine.detect_script("12:30pm"), None);
    assert_eq!(engine.transliterate("12:30pm", Script::Tamil, None), "12:30pm");

    let result = TransliterationService::default().transliterate("12:30pm", Script::Tamil, None);
    assert_eq!(result.detected_script, None);
    assert_eq!(result.transliterated_text, "12:30pm");
}

/// First supported code point decides, not the majority
#[test]
fn test_first_match_detection() {
    let engine = TransliterationEngine::new();
    assert_eq!(engine.detect_script("STOP रुकिए"), Some(Script::Devanagari));
    assert_eq!(engine.detect_script("ਰੁਕੋ रुकिए रुकिए"), Some(Script::Gurmukhi));
    assert_eq!(engine.detect_script(""), None);
}

#[test]
fn test_single_script_text_detected() {
    let engine = TransliterationEngine::new();
    for (script, text) in SAMPLES {
        assert_eq!(engine.detect_script(text), Some(*script), "{}", text);
    }
}

#[test]
fn test_identity_for_every_script() {
    let engine = TransliterationEngine::new();
    for (_, text) in SAMPLES {
        for script in Script::all() {
            assert_eq!(engine.transliterate(text, *script, Some(*script)), *text);
        }
    }
}

/// Canonical clusters survive a trip through the phonetic intermediate
#[test]
fn test_canonical_clusters_round_trip() {
    for script in Script::all() {
        let table = table(*script);
        for cluster in table.canonical_clusters() {
            let tokens = segment(&cluster, table);
            let rendering = render(&tokens, table, FallbackPolicy::Approximate);
            assert_eq!(rendering.text, cluster, "{} cluster {:?}", script, cluster);
            assert!(rendering.unmapped.is_empty(), "{} cluster {:?}", script, cluster);
        }
    }
}

#[test]
fn test_cross_script_words() {
    let engine = TransliterationEngine::new();
    assert_eq!(engine.transliterate("राम", Script::Tamil, None), "ராம");
    assert_eq!(engine.transliterate("राम", Script::Bengali, None), "রাম");
    assert_eq!(engine.transliterate("राम", Script::Gujarati, None), "રામ");
    assert_eq!(engine.transliterate("नमस्ते", Script::Telugu, None), "నమస్తే");
    assert_eq!(engine.transliterate("नमस्ते", Script::Gurmukhi, None), "ਨਮਸ੍ਤੇ");
    assert_eq!(engine.transliterate("ನಮಸ್ಕಾರ", Script::Malayalam, None), "നമസ്കാര");
}

/// Digits, Latin and punctuation never enter the intermediate
#[test]
fn test_surrounding_text_preserved() {
    let engine = TransliterationEngine::new();
    assert_eq!(
        engine.transliterate("EXIT निकास (24x7)", Script::Kannada, None),
        "EXIT ನಿಕಾಸ (24x7)"
    );
    assert_eq!(
        engine.transliterate("मुंबई १२ km", Script::Gujarati, None),
        "મુંબઈ ૧૨ km"
    );
}

/// Unreadable clusters stay where they were
#[test]
fn test_unmapped_cluster_preserved_in_place() {
    let engine = TransliterationEngine::new();
    // A vowel sign with no consonant before it
    let outcome = engine.transliterate_detailed("\u{093F}राम", Script::Tamil, None);
    assert_eq!(outcome.text, "\u{093F}ராம");
    assert_eq!(outcome.unmapped.len(), 1);
    assert_eq!(outcome.unmapped[0].offset, 0);
    assert_eq!(outcome.unmapped[0].stage, Stage::Segment);
}

#[test]
fn test_missing_sounds_approximated_for_tamil() {
    let engine = TransliterationEngine::new();
    // भारत: bh -> p, aa, r, t
    assert_eq!(engine.transliterate("भारत", Script::Tamil, None), "பாரத");
    // ऋषि: r̥ -> ri
    assert_eq!(engine.transliterate("ऋषि", Script::Tamil, None), "ரிஷி");
    // Anusvara before a dental becomes ந்
    assert_eq!(engine.transliterate("संत", Script::Tamil, None), "ஸந்த");
}

#[test]
fn test_gurmukhi_gemination() {
    let engine = TransliterationEngine::new();
    assert_eq!(engine.transliterate("ਪੱਕਾ", Script::Devanagari, None), "पक्का");
    assert_eq!(engine.romanize("ਪੱਕਾ", None), "pakkā");
}

/// A trailing addak has nothing to double and is dropped
#[test]
fn test_gurmukhi_addak_before_space() {
    let engine = TransliterationEngine::new();
    let outcome = engine.transliterate_detailed("ਪੱ ਕ", Script::Devanagari, None);
    assert_eq!(outcome.text, "प क");
    assert!(outcome.is_complete());

    for target in Script::all() {
        let outcome = engine.transliterate_detailed("ਕੱ", *target, None);
        assert!(outcome.is_complete(), "ਕੱ into {}", target);
        assert_eq!(outcome.coverage, 1.0);
    }
}

/// ৰ and ৱ are read through the Bengali table
#[test]
fn test_assamese_letters() {
    let engine = TransliterationEngine::new();
    assert_eq!(engine.detect_script("অসমৰ"), Some(Script::Bengali));
    assert_eq!(engine.transliterate("অসমৰ", Script::Devanagari, None), "असमर");

    let outcome = engine.transliterate_detailed("ৰাজ্য", Script::Devanagari, None);
    assert_eq!(outcome.text, "राज्य");
    assert!(outcome.is_complete());

    assert_eq!(engine.transliterate("ৱ", Script::Devanagari, None), "व");
}

#[test]
fn test_malayalam_chillu_read_as_dead_consonant() {
    let engine = TransliterationEngine::new();
    assert_eq!(engine.transliterate("അവൻ", Script::Devanagari, None), "अवन्");
}

#[test]
fn test_service_and_factory_agree() {
    let config = TransliterationConfig {
        default_target: Script::Telugu,
        ..Default::default()
    };
    let service = TransliterationService::new(&config);
    let transliterator = create_transliterator(&config);

    for (_, text) in SAMPLES {
        let result = service.transliterate_to_default(text);
        assert_eq!(
            result.transliterated_text,
            transliterator.transliterate(text, Script::Telugu, None)
        );
        assert!(result.confidence > 0.0 && result.confidence <= 1.0);
    }
}

#[test]
fn test_outcome_serializes() {
    let engine = TransliterationEngine::new();
    let outcome = engine.transliterate_detailed("राम ऽ", Script::Tamil, None);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["source"], "devanagari");
    assert_eq!(json["unmapped"][0]["stage"], "render");
}

#[test]
fn test_concurrent_use() {
    let engine = TransliterationEngine::new();
    let handles: Vec<_> = Script::all()
        .iter()
        .map(|target| {
            let target = *target;
            std::thread::spawn(move || engine.transliterate("राम", target, None))
        })
        .collect();

    for handle in handles {
        assert!(!handle.join().unwrap().is_empty());
    }
}
