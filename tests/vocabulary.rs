use trunic_core::core::signature;
use trunic_core::{Consonant, Glyph, TranslatorEngine, VocabularyStore, Vowel, Word};

fn cat_word() -> Word {
    Word::from_glyphs(vec![Glyph::new(Some(Consonant::K), Some(Vowel::Aa), false)])
}

#[test_log::test]
fn store_fetch_and_reverse_lookup_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.bin");

    let word = cat_word().with_translation("cat");
    assert_eq!(word.sound_signature(), "KAA");

    {
        let mut store = VocabularyStore::open(&path).unwrap();
        store.store(&word).unwrap();
    }

    let store = VocabularyStore::open(&path).unwrap();

    let mut fresh = cat_word();
    store.fetch(&mut fresh);
    assert_eq!(fresh.translation, "cat");

    let found = store.reverse_lookup("cat").unwrap();
    assert_eq!(found.glyphs(), &[Glyph::new(Some(Consonant::K), Some(Vowel::Aa), false)]);
    assert_eq!(found.translation, "cat");
    assert!(store.reverse_lookup("ca").is_none());
}

#[test_log::test]
fn same_sounds_share_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = VocabularyStore::open(dir.path().join("words.bin")).unwrap();

    let first = Word::from_glyphs(vec![
        Glyph::new(Some(Consonant::T), Some(Vowel::Ay), true),
        Glyph::new(None, Some(Vowel::Er), false),
    ])
    .with_translation("eighter");
    store.store(&first).unwrap();

    let mut second = Word::from_glyphs(vec![
        Glyph::new(Some(Consonant::T), Some(Vowel::Ay), true),
        Glyph::new(None, Some(Vowel::Er), false),
    ]);
    store.fetch(&mut second);
    assert_eq!(second.translation, "eighter");
    assert_eq!(second.sound_signature(), "AYT|ER");

    store.store(&second.clone().with_translation("")).unwrap();
    store.fetch(&mut second);
    assert!(second.translation.is_empty());
    assert!(store.is_empty());
}

#[test]
fn reverse_lookup_rebuilds_words_that_encode_identically() {
    let mut store = VocabularyStore::in_memory();
    let words = [
        Word::from_glyphs(vec![
            Glyph::new(Some(Consonant::Sh), Some(Vowel::Ih), false),
            Glyph::new(Some(Consonant::P), None, true),
        ])
        .with_translation("ship"),
        Word::from_glyphs(vec![
            Glyph::new(Some(Consonant::ThHard), Some(Vowel::Ih), false),
            Glyph::new(Some(Consonant::S), None, false),
        ])
        .with_translation("this"),
        Word::from_glyphs(vec![Glyph::blank(), Glyph::new(None, None, true)])
            .with_translation("..."),
    ];
    for w in &words {
        store.store(w).unwrap();
    }

    for w in &words {
        let found = store.reverse_lookup(&w.translation).unwrap();
        assert_eq!(found.sound_signature(), w.sound_signature());
        let decoded = signature::decode(&w.sound_signature()).unwrap();
        for (d, g) in decoded.iter().zip(w.glyphs()) {
            assert!(d.matches(g));
        }
    }
}

#[test]
fn editor_session_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.bin");

    {
        let mut engine = TranslatorEngine::new(VocabularyStore::open(&path).unwrap());
        engine.set_consonant(Some(Consonant::K));
        engine.set_vowel(Some(Vowel::Aa));
        engine.set_translation("cat").unwrap();
    }

    let mut engine = TranslatorEngine::new(VocabularyStore::open(&path).unwrap());
    engine.set_consonant(Some(Consonant::K));
    engine.set_vowel(Some(Vowel::Aa));
    assert_eq!(engine.selected_word().translation, "cat");
    assert!(engine.import("cat"));
    assert_eq!(engine.transcript(), "cat cat");
}
