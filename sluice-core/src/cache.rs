use crate::{CompiledQuery, Error, Result, truncate_long};
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

/// Compiled query cache keyed by the normalized plan shape.
///
/// Write-once per key: the first publisher wins and a racing compilation of
/// the same shape is discarded. Published entries are immutable and shared by
/// reference count, so concurrent executions read the frozen decisions
/// without coordination.
pub struct QueryCache {
    entries: RwLock<HashMap<Arc<str>, Arc<CompiledQuery>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn get(&self, key: &str) -> Option<Arc<CompiledQuery>> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    /// Return the published artifact for `key`, compiling and publishing one
    /// when absent.
    pub fn get_or_compile<F>(&self, key: &str, compile: F) -> Result<Arc<CompiledQuery>>
    where
        F: FnOnce() -> Result<CompiledQuery>,
    {
        if let Some(compiled) = self.get(key) {
            log::trace!("Compiled query cache hit for `{}`", truncate_long!(key));
            return Ok(compiled);
        }
        let compiled = Arc::new(compile()?);
        let mut entries = self
            .entries
            .write()
            .map_err(|_| Error::msg("The compiled query cache is poisoned"))?;
        Ok(entries
            .entry(Arc::from(key))
            .or_insert_with(|| {
                log::debug!("Published compiled query for `{}`", truncate_long!(key));
                compiled
            })
            .clone())
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}
