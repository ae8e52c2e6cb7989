use std::collections::{BTreeSet, HashMap};
use std::fmt;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pattern::{self, MATCH_OPTIONS};

/// A key together with its value
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct KvPair {
    pub key: String,
    pub value: String,
}

impl KvPair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for KvPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// In-memory key-value store safe for concurrent access
///
/// Keys are opaque strings, conventionally `/`-separated paths such as
/// `/app/db/host`. Share a store between threads with `Arc<Store>`.
#[derive(Debug, Default)]
pub struct Store {
    data: RwLock<HashMap<String, KvPair>>,
}

impl Store {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Set the entry for `key` to `value`, replacing any previous one
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        let pair = KvPair::new(key, value);
        self.data.write().insert(pair.key.clone(), pair);
    }

    /// Set every pair under a single write lock
    pub fn extend<I, K, V>(&self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pairs: Vec<KvPair> = pairs
            .into_iter()
            .map(|(k, v)| KvPair::new(k, v))
            .collect();
        let mut data = self.data.write();
        for pair in pairs {
            data.insert(pair.key.clone(), pair);
        }
    }

    /// Delete the entry for `key`. Deleting an absent key does nothing.
    pub fn del(&self, key: &str) {
        self.data.write().remove(key);
    }

    /// Remove every entry
    pub fn purge(&self) {
        self.data.write().clear();
    }

    /// Get the pair stored under `key`, or [`Error::NotExist`]
    pub fn get(&self, key: &str) -> Result<KvPair> {
        self.data.read().get(key).cloned().ok_or(Error::NotExist)
    }

    /// Get just the value stored under `key`
    pub fn get_value(&self, key: &str) -> Result<String> {
        self.get(key).map(|pair| pair.value)
    }

    /// Get the value stored under `key`, falling back to `default`
    pub fn get_value_or(&self, key: &str, default: &str) -> String {
        self.get_value(key).unwrap_or_else(|_| default.to_string())
    }

    /// Report whether `key` has an entry
    pub fn exists(&self, key: &str) -> bool {
        self.data.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Get every pair whose key matches the glob `pattern`, sorted by key.
    ///
    /// `*` matches any run of characters other than `/`, `?` matches a single
    /// such character, `[...]` matches a character class (`[^...]` negates
    /// it) and `\` escapes the next character. See [`pattern`](crate::pattern)
    /// for details.
    ///
    /// Fails with [`Error::InvalidPattern`] for a malformed pattern and
    /// [`Error::NoMatch`] when no key matches. The pattern is checked before
    /// any key is looked at, so a malformed pattern fails with
    /// `InvalidPattern` even on an empty store, never with `NoMatch`.
    pub fn get_all(&self, pattern: &str) -> Result<Vec<KvPair>> {
        let matcher = pattern::compile(pattern)?;

        let mut pairs: Vec<KvPair> = {
            let data = self.data.read();
            data.values()
                .filter(|pair| matcher.matches_with(&pair.key, MATCH_OPTIONS))
                .cloned()
                .collect()
        };

        if pairs.is_empty() {
            return Err(Error::NoMatch);
        }
        pairs.sort_unstable_by(|a, b| a.key.cmp(&b.key));
        Ok(pairs)
    }

    /// Same as [`get_all`](Self::get_all), keeping only the values
    pub fn get_all_values(&self, pattern: &str) -> Result<Vec<String>> {
        let pairs = self.get_all(pattern)?;
        Ok(pairs.into_iter().map(|pair| pair.value).collect())
    }

    /// Get every pair in the store, sorted by key
    pub fn get_all_kvs(&self) -> Vec<KvPair> {
        let mut pairs: Vec<KvPair> = self.data.read().values().cloned().collect();
        pairs.sort_unstable_by(|a, b| a.key.cmp(&b.key));
        pairs
    }

    /// List the distinct first path segments of every key under `path`.
    ///
    /// `path` is matched as a literal string prefix, then the one character
    /// following it is dropped as the separator. `list("/app")` over
    /// `/app/db/host` and `/app/cache/ttl` gives `["cache", "db"]`.
    pub fn list(&self, path: &str) -> Vec<String> {
        self.collect_children(path, false)
    }

    /// Like [`list`](Self::list), but only segments that have something
    /// nested beneath them.
    pub fn list_dir(&self, path: &str) -> Vec<String> {
        self.collect_children(path, true)
    }

    fn collect_children(&self, path: &str, dirs_only: bool) -> Vec<String> {
        let data = self.data.read();
        let children: BTreeSet<&str> = data
            .keys()
            .filter_map(|key| key.strip_prefix(path))
            .filter_map(skip_separator)
            .filter_map(|rest| match rest.split_once('/') {
                Some((first, _)) => Some(first),
                None if dirs_only => None,
                None => Some(rest),
            })
            .collect();
        children.into_iter().map(str::to_string).collect()
    }
}

/// Drop the single character that follows the matched prefix.
///
/// A key equal to the prefix leaves nothing to drop and names no child.
fn skip_separator(rest: &str) -> Option<&str> {
    let mut chars = rest.chars();
    chars.next()?;
    Some(chars.as_str())
}
