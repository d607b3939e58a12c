use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Identifier-keyed store of successfully retrieved values.
///
/// Entries are only ever added by a successful fetch and live until
/// [`clear`](Self::clear) is called; a failed fetch leaves no trace, so asking
/// again retries.
#[derive(Debug, Clone)]
pub struct RetrievalCache<T> {
    data: HashMap<String, T>,
}

impl<T> Default for RetrievalCache<T> {
    fn default() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<T> RetrievalCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.data.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: T) {
        self.data.insert(key.into(), value);
    }

    /// Returns the cached value for `key`, running `fetch` only on a miss.
    ///
    /// The result of `fetch` is stored only when it is `Ok`.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        key: &str,
        fetch: impl FnOnce() -> Result<T, E>,
    ) -> Result<&T, E> {
        match self.data.entry(key.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(fetch()?)),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }
}
