//! Per-character clip lookup and caching.
//!
//! Each character maps to a clip name (the file stem of its WAV file):
//!
//! - ASCII letters map to themselves, lowercased when folding cases
//! - ASCII digits map to themselves
//! - the capital marker maps to `CAPITAL`
//! - anything else maps to its decimal code point (`#` -> `35`)
//!
//! A [`ClipCache`] decodes each (directory, name) pair at most once and hands
//! out shared, read-only [`Clip`]s afterwards.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::{AudioError, AudioResult};
use crate::wav::{self, Clip};

/// Name of the clip announcing an uppercase letter.
pub const CAPITAL_CLIP_NAME: &str = "CAPITAL";

/// File extension of clip files.
pub const CLIP_EXTENSION: &str = "wav";

/// What a clip stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipId {
    /// A literal input character.
    Char(char),
    /// The capital-indicator clip.
    Capital,
}

impl ClipId {
    /// Returns the clip name (file stem) for this id.
    pub fn name(&self, fold_cases: bool) -> String {
        match *self {
            ClipId::Capital => CAPITAL_CLIP_NAME.to_string(),
            ClipId::Char(c) if c.is_ascii_alphabetic() => {
                if fold_cases {
                    c.to_ascii_lowercase().to_string()
                } else {
                    c.to_string()
                }
            }
            ClipId::Char(c) if c.is_ascii_digit() => c.to_string(),
            ClipId::Char(c) => u32::from(fold_char(c, fold_cases)).to_string(),
        }
    }
}

impl std::fmt::Display for ClipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipId::Char(c) => write!(f, "{}", c),
            ClipId::Capital => f.write_str(CAPITAL_CLIP_NAME),
        }
    }
}

/// Lowercases a non-ASCII character when folding, as long as its lowercase
/// form is a single character.
fn fold_char(c: char, fold_cases: bool) -> char {
    if !fold_cases {
        return c;
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Returns the file name expected to hold the clip for `c`.
///
/// ```
/// use spellwav_backend_audio::cache::clip_file_name;
///
/// assert_eq!(clip_file_name('B', true), "b.wav");
/// assert_eq!(clip_file_name('B', false), "B.wav");
/// assert_eq!(clip_file_name('7', true), "7.wav");
/// assert_eq!(clip_file_name('#', true), "35.wav");
/// ```
pub fn clip_file_name(c: char, fold_cases: bool) -> String {
    file_name_for(&ClipId::Char(c).name(fold_cases))
}

fn file_name_for(name: &str) -> String {
    format!("{}.{}", name, CLIP_EXTENSION)
}

/// Cache key: the directory a clip was loaded from plus its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClipKey {
    /// Directory holding the clip file.
    pub directory: PathBuf,
    /// Clip name (file stem).
    pub name: String,
}

impl ClipKey {
    /// Creates a key.
    pub fn new(directory: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            name: name.into(),
        }
    }
}

/// Where clip bytes come from.
pub trait ClipSource: Send + Sync {
    /// Reads the raw container bytes of clip `name` in `directory`.
    ///
    /// A missing clip must be reported as [`AudioError::SourceNotFound`].
    fn read(&self, directory: &Path, name: &str) -> AudioResult<Vec<u8>>;
}

/// Reads `<directory>/<name>.wav` from the file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectorySource;

impl ClipSource for DirectorySource {
    fn read(&self, directory: &Path, name: &str) -> AudioResult<Vec<u8>> {
        let path = directory.join(file_name_for(name));
        std::fs::read(&path).map_err(|e| AudioError::read(name, path, e))
    }
}

type Slot = Arc<Mutex<Option<Arc<Clip>>>>;

/// Decoded clips keyed by (directory, name).
///
/// The cache can be shared between threads. Loading is serialized per key,
/// so concurrent first requests for one clip decode it once while requests
/// for other clips proceed. Failed loads leave nothing behind and are retried
/// on the next request.
pub struct ClipCache {
    source: Box<dyn ClipSource>,
    slots: Mutex<HashMap<ClipKey, Slot>>,
}

impl ClipCache {
    /// Creates a cache reading clips from the file system.
    pub fn new() -> Self {
        Self::with_source(DirectorySource)
    }

    /// Creates a cache reading clips through `source`.
    pub fn with_source(source: impl ClipSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Resolves a character (or the capital marker) to its decoded clip.
    pub fn resolve(&self, directory: &Path, id: ClipId, fold_cases: bool) -> AudioResult<Arc<Clip>> {
        self.resolve_name(directory, &id.name(fold_cases))
    }

    /// Resolves a clip by name.
    pub fn resolve_name(&self, directory: &Path, name: &str) -> AudioResult<Arc<Clip>> {
        let key = ClipKey::new(directory, name);
        let slot = {
            let mut slots = lock(&self.slots);
            Arc::clone(slots.entry(key.clone()).or_default())
        };

        let mut entry = lock(&slot);
        if let Some(clip) = entry.as_ref() {
            debug!(clip = name, dir = %directory.display(), "clip cache hit");
            return Ok(Arc::clone(clip));
        }

        match self.load(directory, name) {
            Ok(clip) => {
                let clip = Arc::new(clip);
                *entry = Some(Arc::clone(&clip));
                Ok(clip)
            }
            Err(e) => {
                drop(entry);
                self.forget_empty(&key, &slot);
                Err(e)
            }
        }
    }

    fn load(&self, directory: &Path, name: &str) -> AudioResult<Clip> {
        let bytes = self.source.read(directory, name)?;
        let clip = wav::decode(&bytes).map_err(|e| AudioError::decode(name, e))?;
        debug!(
            clip = name,
            dir = %directory.display(),
            format = %clip.format,
            samples = clip.len(),
            "decoded clip"
        );
        Ok(clip)
    }

    /// Removes the slot for `key` after a failed load.
    ///
    /// Slots are only cloned under the map lock, so a count of two (map plus
    /// caller) means no other request is waiting on it.
    fn forget_empty(&self, key: &ClipKey, slot: &Slot) {
        let mut slots = lock(&self.slots);
        let unused = slots
            .get(key)
            .is_some_and(|current| Arc::ptr_eq(current, slot) && Arc::strong_count(slot) == 2);
        if unused {
            slots.remove(key);
        }
    }

    /// Returns true if the clip is decoded and cached.
    pub fn contains(&self, directory: &Path, name: &str) -> bool {
        let slot = lock(&self.slots)
            .get(&ClipKey::new(directory, name))
            .cloned();
        slot.is_some_and(|slot| lock(&slot).is_some())
    }

    /// Number of decoded clips held.
    pub fn len(&self) -> usize {
        let slots: Vec<Slot> = lock(&self.slots).values().cloned().collect();
        slots.iter().filter(|slot| lock(slot).is_some()).count()
    }

    /// Returns true if no clip is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached clip.
    pub fn clear(&self) {
        lock(&self.slots).clear();
    }
}

impl Default for ClipCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ClipCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipCache")
            .field("clips", &self.len())
            .finish_non_exhaustive()
    }
}

// Cached clips are immutable once stored, so a poisoned lock still guards
// consistent data.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
