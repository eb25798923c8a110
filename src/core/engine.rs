use crate::config::Config;
use crate::core::glyph::{Glyph, Word};
use crate::core::types::{Consonant, Vowel};
use crate::persistence::{StorageError, VocabularyStore};
use log::info;

/// Position of the selected glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub word: usize,
    pub glyph: usize,
}

/// The editor state behind the UI: the words on the page, the selected glyph
/// and the vocabulary. Every call mirrors one user action.
pub struct TranslatorEngine {
    words: Vec<Word>,
    cursor: Cursor,
    pub word_line: bool,
    store: VocabularyStore,
}

impl TranslatorEngine {
    pub fn new(store: VocabularyStore) -> Self {
        Self {
            words: vec![Word::new()],
            cursor: Cursor::default(),
            word_line: true,
            store,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, StorageError> {
        let store = VocabularyStore::open(config.database_path())?;
        let mut engine = Self::new(store);
        engine.word_line = config.editor.word_line;
        info!("Editor ready with {} known words", engine.store.len());
        Ok(engine)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn store(&self) -> &VocabularyStore {
        &self.store
    }

    pub fn selected_word(&self) -> &Word {
        &self.words[self.cursor.word]
    }

    pub fn selected_glyph(&self) -> &Glyph {
        &self.selected_word().glyphs()[self.cursor.glyph]
    }

    fn selected_glyph_mut(&mut self) -> &mut Glyph {
        let Cursor { word, glyph } = self.cursor;
        &mut self.words[word].glyphs_mut()[glyph]
    }

    /// Reloads the selected word's translation after its sounds changed.
    fn refetch(&mut self) {
        let word = &mut self.words[self.cursor.word];
        self.store.fetch(word);
    }

    pub fn set_consonant(&mut self, consonant: Option<Consonant>) {
        self.selected_glyph_mut().set_consonant(consonant);
        self.refetch();
    }

    pub fn set_vowel(&mut self, vowel: Option<Vowel>) {
        self.selected_glyph_mut().set_vowel(vowel);
        self.refetch();
    }

    pub fn toggle_marker(&mut self) {
        self.selected_glyph_mut().toggle_marker();
        self.refetch();
    }

    /// Replaces the selected word's translation and saves it. If the save
    /// fails the previous translation is put back.
    pub fn set_translation(&mut self, text: &str) -> Result<(), StorageError> {
        let word = &mut self.words[self.cursor.word];
        let previous = std::mem::replace(&mut word.translation, text.to_string());
        if let Err(e) = self.store.store(word) {
            word.translation = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Adds a blank glyph after the selected one and selects it.
    pub fn insert_glyph(&mut self) {
        let Cursor { word, glyph } = self.cursor;
        self.words[word].insert(glyph + 1, Glyph::blank());
        self.cursor.glyph += 1;
        self.refetch();
    }

    /// Deletes the selected glyph, or the selected word once it is down to
    /// one glyph. The very last glyph on the page is cleared instead.
    pub fn backspace(&mut self) {
        let Cursor { word, glyph } = self.cursor;

        if self.words[word].remove(glyph).is_some() {
            self.cursor.glyph = glyph.saturating_sub(1);
            self.refetch();
        } else if self.words.len() > 1 {
            self.words.remove(word);
            if word > 0 {
                self.cursor.word = word - 1;
                self.cursor.glyph = self.words[word - 1].len() - 1;
            } else {
                self.cursor.glyph = 0;
            }
        } else {
            let only = &mut self.words[0];
            only.glyphs_mut()[0].clear();
            only.translation.clear();
        }
    }

    /// Starts a new blank word after the selected one.
    pub fn new_word(&mut self) {
        let at = self.cursor.word + 1;
        self.words.insert(at, Word::new());
        self.cursor = Cursor { word: at, glyph: 0 };
    }

    pub fn move_right(&mut self) {
        if self.cursor.glyph + 1 < self.selected_word().len() {
            self.cursor.glyph += 1;
        } else if self.cursor.word + 1 < self.words.len() {
            self.cursor = Cursor {
                word: self.cursor.word + 1,
                glyph: 0,
            };
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor.glyph > 0 {
            self.cursor.glyph -= 1;
        } else if self.cursor.word > 0 {
            let word = self.cursor.word - 1;
            self.cursor = Cursor {
                word,
                glyph: self.words[word].len() - 1,
            };
        }
    }

    /// Inserts the known word translated as `text` after the selected word.
    /// Returns false if no word has exactly that translation.
    pub fn import(&mut self, text: &str) -> bool {
        match self.store.reverse_lookup(text) {
            Some(word) => {
                let at = self.cursor.word + 1;
                self.words.insert(at, word);
                self.cursor = Cursor { word: at, glyph: 0 };
                true
            }
            None => false,
        }
    }

    /// One line of text for the page: each word's translation, or its sound
    /// signature while untranslated.
    pub fn transcript(&self) -> String {
        self.words
            .iter()
            .map(|w| {
                if w.translation.is_empty() {
                    w.sound_signature()
                } else {
                    w.translation.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
