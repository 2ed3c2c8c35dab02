use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Mutex;

use shared_types::TrackedNumber;

use crate::error::StorageError;

pub const TRACKED_NUMBER_KEY: &str = "keyway_tracked_number";

/// Query parameters consulted for a campaign number, in priority order.
pub const CAPTURE_PARAMS: [&str; 2] = ["ctn", "phone"];

/// Durable key-value backend for the tracked number.
pub trait AttributionStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local storage, used on the server and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl AttributionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`. Private browsing and disabled storage show up as
/// [`StorageError::Unavailable`].
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))
    }
}

#[cfg(feature = "hydrate")]
impl AttributionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::WriteRejected(format!("{e:?}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Stored(TrackedNumber),
    /// Neither `ctn` nor `phone` carried a value.
    NoCandidate,
    /// Candidate failed the 7..=15 digit check; stored state is untouched.
    Rejected { digits: usize },
    StorageUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Tracked(TrackedNumber),
    Absent,
    StorageUnavailable,
}

impl ReadOutcome {
    pub fn into_tracked(self) -> Option<TrackedNumber> {
        match self {
            Self::Tracked(number) => Some(number),
            Self::Absent | Self::StorageUnavailable => None,
        }
    }
}

/// Persists the campaign phone number seen on inbound links.
///
/// Capture is best-effort: every failure becomes an outcome value and nothing
/// here panics or returns an error. Numbers never expire; a later qualifying
/// candidate is the only thing that replaces one.
#[derive(Debug, Default)]
pub struct AttributionStore<S> {
    storage: S,
}

impl<S: AttributionStorage> AttributionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn capture_from_query(&self, query: &str) -> CaptureOutcome {
        let Some(candidate) = candidate_from_query(query) else {
            return CaptureOutcome::NoCandidate;
        };

        let Some(number) = TrackedNumber::parse(&candidate) else {
            let digits = shared_types::digit_count(&candidate);
            tracing::debug!(digits, "tracked number candidate rejected");
            return CaptureOutcome::Rejected { digits };
        };

        match self.storage.set(TRACKED_NUMBER_KEY, number.as_str()) {
            Ok(()) => {
                tracing::debug!(number = %number, "tracked number stored");
                CaptureOutcome::Stored(number)
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not persist tracked number");
                CaptureOutcome::StorageUnavailable
            }
        }
    }

    pub fn read(&self) -> ReadOutcome {
        match self.storage.get(TRACKED_NUMBER_KEY) {
            Ok(Some(raw)) => TrackedNumber::parse(&raw)
                .map(ReadOutcome::Tracked)
                .unwrap_or(ReadOutcome::Absent),
            Ok(None) => ReadOutcome::Absent,
            Err(e) => {
                tracing::warn!(error = %e, "could not read tracked number");
                ReadOutcome::StorageUnavailable
            }
        }
    }

    pub fn tracked(&self) -> Option<TrackedNumber> {
        self.read().into_tracked()
    }
}

/// First non-empty value of `ctn`, falling back to `phone`.
pub fn candidate_from_query(query: &str) -> Option<String> {
    let params = parse_query(query);
    CAPTURE_PARAMS.iter().find_map(|name| {
        params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .filter(|value| !value.is_empty())
    })
}

/// Form-urlencoded pairs in order of appearance; a leading `?` is ignored.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .strip_prefix('?')
        .unwrap_or(query)
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key), decode_component(value))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| spaced.clone())
}
