// File: src/persistence.rs
//! The vocabulary store: sound signature → translation.
//!
//! Records live in memory and every write is committed by serializing the
//! whole table to a temporary file next to the target and renaming it over
//! the target. A failed commit rolls the in-memory table back.

use crate::core::glyph::Word;
use crate::core::signature;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("vocabulary i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("vocabulary file is corrupt: {0}")]
    Codec(#[from] bincode::Error),
    #[error("vocabulary file has format version {found}, expected {}", FORMAT_VERSION)]
    UnsupportedVersion { found: u32 },
}

/// The on-disk table.
#[derive(Serialize, Deserialize)]
struct SerializableVocabulary {
    version: u32,
    records: BTreeMap<String, String>,
}

/// Borrowed form of [`SerializableVocabulary`] for writing; same encoding.
#[derive(Serialize)]
struct VocabularyRef<'a> {
    version: u32,
    records: &'a BTreeMap<String, String>,
}

/// Owns the vocabulary table for the lifetime of the process.
///
/// There is no internal locking; callers serialize access.
#[derive(Debug, Default)]
pub struct VocabularyStore {
    records: BTreeMap<String, String>,
    path: Option<PathBuf>,
}

impl VocabularyStore {
    /// A store that never touches the disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Opens the table at `path`, starting empty if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        fs::create_dir_all(parent_dir(&path))?;

        let records = match File::open(&path) {
            Ok(file) => load_records(file)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        info!("Opened vocabulary at {} ({} words)", path.display(), records.len());
        Ok(Self {
            records,
            path: Some(path),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All (signature, translation) pairs in signature order.
    pub fn records(&self) -> impl Iterator<Item = (&str, &str)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Saves `word`'s translation under its signature. An empty translation
    /// removes the record instead.
    pub fn store(&mut self, word: &Word) -> Result<(), StorageError> {
        let sounds = word.sound_signature();
        let previous = if word.translation.is_empty() {
            debug!("Removing {:?}", sounds);
            self.records.remove(&sounds)
        } else {
            debug!("Storing {:?} = {:?}", sounds, word.translation);
            self.records.insert(sounds.clone(), word.translation.clone())
        };

        if let Err(e) = self.commit() {
            match previous {
                Some(value) => self.records.insert(sounds, value),
                None => self.records.remove(&sounds),
            };
            return Err(e);
        }
        Ok(())
    }

    /// Sets `word.translation` to the stored value, or clears it if there is none.
    pub fn fetch(&self, word: &mut Word) {
        let sounds = word.sound_signature();
        match self.records.get(&sounds) {
            Some(value) => {
                debug!("Fetched {:?} = {:?}", sounds, value);
                word.translation.clone_from(value);
            }
            None => {
                debug!("No translation for {:?}", sounds);
                word.translation.clear();
            }
        }
    }

    /// Rebuilds the word whose translation is exactly `text`.
    ///
    /// When several signatures share the text, the smallest signature wins.
    /// Records whose signature no longer parses are skipped.
    pub fn reverse_lookup(&self, text: &str) -> Option<Word> {
        for (sounds, value) in &self.records {
            if value != text {
                continue;
            }
            match signature::decode_word(sounds) {
                Ok(word) => return Some(word.with_translation(text)),
                Err(e) => warn!("Skipping unreadable signature {:?}: {}", sounds, e),
            }
        }
        None
    }

    fn commit(&self) -> Result<(), StorageError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let state = VocabularyRef {
            version: FORMAT_VERSION,
            records: &self.records,
        };

        let temp_file = NamedTempFile::new_in(parent_dir(path))?;
        {
            let mut writer = BufWriter::new(&temp_file);
            bincode::serialize_into(&mut writer, &state)?;
            writer.flush()?;
        }
        temp_file.as_file().sync_all()?;
        temp_file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

fn load_records(file: File) -> Result<BTreeMap<String, String>, StorageError> {
    let state: SerializableVocabulary = bincode::deserialize_from(BufReader::new(file))?;
    if state.version != FORMAT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: state.version,
        });
    }
    Ok(state.records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::glyph::Glyph;
    use crate::core::types::{Consonant, Vowel};

    fn kaa() -> Word {
        Word::from_glyphs(vec![Glyph::new(Some(Consonant::K), Some(Vowel::Aa), false)])
    }

    #[test_log::test]
    fn fetch_reads_what_store_wrote() {
        let mut store = VocabularyStore::in_memory();
        store.store(&kaa().with_translation("cat")).unwrap();

        let mut fresh = kaa();
        store.fetch(&mut fresh);
        assert_eq!(fresh.translation, "cat");
    }

    #[test_log::test]
    fn store_overwrites_existing_record() {
        let mut store = VocabularyStore::in_memory();
        store.store(&kaa().with_translation("cat")).unwrap();
        store.store(&kaa().with_translation("cart")).unwrap();
        assert_eq!(store.len(), 1);

        let mut w = kaa();
        store.fetch(&mut w);
        assert_eq!(w.translation, "cart");
    }

    #[test_log::test]
    fn empty_translation_deletes_the_record() {
        let mut store = VocabularyStore::in_memory();
        store.store(&kaa().with_translation("cat")).unwrap();
        store.store(&kaa()).unwrap();
        assert!(store.is_empty());

        let mut w = kaa().with_translation("stale");
        store.fetch(&mut w);
        assert_eq!(w.translation, "");
    }

    #[test]
    fn fetch_of_unknown_word_clears_translation() {
        let store = VocabularyStore::in_memory();
        let mut w = kaa().with_translation("leftover");
        store.fetch(&mut w);
        assert!(w.translation.is_empty());
    }

    #[test]
    fn reverse_lookup_needs_an_exact_match() {
        let mut store = VocabularyStore::in_memory();
        store.store(&kaa().with_translation("cat")).unwrap();

        let found = store.reverse_lookup("cat").unwrap();
        assert_eq!(found.glyphs(), kaa().glyphs());
        assert_eq!(found.translation, "cat");

        assert!(store.reverse_lookup("ca").is_none());
        assert!(store.reverse_lookup("cats").is_none());
        assert!(store.reverse_lookup("Cat").is_none());
    }

    #[test_log::test]
    fn reverse_lookup_skips_corrupt_signatures() {
        let mut store = VocabularyStore::in_memory();
        store.records.insert("??".to_string(), "dog".to_string());
        assert!(store.reverse_lookup("dog").is_none());

        let word = Word::from_glyphs(vec![Glyph::new(Some(Consonant::D), None, false)]);
        store.store(&word.with_translation("dog")).unwrap();
        let found = store.reverse_lookup("dog").unwrap();
        assert_eq!(found.sound_signature(), "D");
    }

    #[test]
    fn store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("words.bin");

        {
            let mut store = VocabularyStore::open(&path).unwrap();
            assert!(store.is_empty());
            store.store(&kaa().with_translation("cat")).unwrap();
        }

        let store = VocabularyStore::open(&path).unwrap();
        assert_eq!(store.records().collect::<Vec<_>>(), vec![("KAA", "cat")]);
        assert_eq!(store.path(), Some(path.as_path()));
    }

    #[test]
    fn failed_commit_leaves_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.bin");
        let mut store = VocabularyStore::open(&path).unwrap();
        store.store(&kaa().with_translation("cat")).unwrap();

        // A directory where the file should be makes the rename fail.
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(store.store(&kaa().with_translation("dog")).is_err());
        let mut w = kaa();
        store.fetch(&mut w);
        assert_eq!(w.translation, "cat");

        assert!(store.store(&kaa()).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn written_file_decodes_as_owned_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.bin");
        let mut store = VocabularyStore::open(&path).unwrap();
        store.store(&kaa().with_translation("cat")).unwrap();

        let bytes = fs::read(&path).unwrap();
        let state: SerializableVocabulary = bincode::deserialize(&bytes).unwrap();
        assert_eq!(state.version, FORMAT_VERSION);
        assert_eq!(state.records.get("KAA").map(String::as_str), Some("cat"));
    }

    #[test]
    fn unknown_format_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.bin");
        let state = SerializableVocabulary {
            version: FORMAT_VERSION + 1,
            records: BTreeMap::new(),
        };
        fs::write(&path, bincode::serialize(&state).unwrap()).unwrap();

        assert!(matches!(
            VocabularyStore::open(&path),
            Err(StorageError::UnsupportedVersion { found }) if found == FORMAT_VERSION + 1
        ));
    }

    #[test]
    fn garbage_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.bin");
        fs::write(&path, b"\x01").unwrap();
        assert!(matches!(
            VocabularyStore::open(&path),
            Err(StorageError::Codec(_))
        ));
    }
}
