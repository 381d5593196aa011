//! Translation cache.
//!
//! Maps trimmed markup source to the element sequence it translated to.
//! Entries are never evicted: the cache grows with the number of distinct
//! sources and is meant for a fixed set of literal markup strings. Call
//! [`TranslationCache::clear`] to drop everything.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::element::Element;
use crate::error::TranslateError;

/// An immutable, shared sequence of translated root elements.
pub type Fragment = Arc<[Element]>;

/// Memoizes source string to translated element sequence.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: Mutex<HashMap<String, Fragment>>,
}

impl TranslationCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached translation of `source`, or compute and store it.
    ///
    /// `source` is trimmed before lookup and the trimmed string is what
    /// `translate` receives. Failed translations are not stored.
    pub fn get_or_translate<F>(&self, source: &str, translate: F) -> Result<Fragment, TranslateError>
    where
        F: FnOnce(&str) -> Result<Vec<Element>, TranslateError>,
    {
        let key = source.trim();

        if let Some(hit) = self.lock().get(key) {
            tracing::debug!(len = key.len(), "translation cache hit");
            return Ok(Arc::clone(hit));
        }

        tracing::debug!(len = key.len(), "translation cache miss");

        // Translate without holding the lock; concurrent misses on the same
        // key produce equal results, so the first stored entry wins.
        let fragment: Fragment = translate(key)?.into();

        let mut entries = self.lock();
        let stored = entries.entry(key.to_string()).or_insert(fragment);
        Ok(Arc::clone(stored))
    }

    /// Like [`get_or_translate`](Self::get_or_translate), but require exactly
    /// one root element.
    ///
    /// The check runs after the cache lookup, so a cached multi-root entry
    /// fails here every time without being re-parsed.
    pub fn get_or_translate_single<F>(
        &self,
        source: &str,
        translate: F,
    ) -> Result<Element, TranslateError>
    where
        F: FnOnce(&str) -> Result<Vec<Element>, TranslateError>,
    {
        let fragment = self.get_or_translate(source, translate)?;

        match &*fragment {
            [single] => Ok(single.clone()),
            roots => Err(TranslateError::Cardinality {
                markup: source.trim().to_string(),
                found: roots.len(),
            }),
        }
    }

    /// Look up a source without translating it.
    pub fn get(&self, source: &str) -> Option<Fragment> {
        self.lock().get(source.trim()).cloned()
    }

    /// Number of cached sources.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Fragment>> {
        // Entries are only ever inserted whole, so a poisoned map is still valid
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn paragraphs(source: &str) -> Result<Vec<Element>, TranslateError> {
        Ok(source
            .split('|')
            .map(|part| Element::paragraph(vec![Element::text(part)]))
            .collect())
    }

    #[test]
    fn hit_skips_translation() {
        let cache = TranslationCache::new();
        let calls = Cell::new(0);
        let counted = |source: &str| {
            calls.set(calls.get() + 1);
            paragraphs(source)
        };

        let first = cache.get_or_translate("a|b", counted).unwrap();
        let second = cache.get_or_translate("a|b", counted).unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(first, second);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn keys_are_trimmed() {
        let cache = TranslationCache::new();
        let seen = Cell::new(None);

        cache
            .get_or_translate("  a \n", |source| {
                seen.set(Some(source.len()));
                paragraphs(source)
            })
            .unwrap();

        assert_eq!(seen.get(), Some(1));
        assert!(cache.get("a").is_some());
        assert!(cache.get("\ta\t").is_some());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn failures_are_not_cached() {
        let cache = TranslationCache::new();

        let result = cache.get_or_translate("<foo>", |_| {
            Err(TranslateError::UnsupportedTag {
                tag: "foo".to_string(),
            })
        });

        assert!(result.is_err());
        assert!(cache.is_empty());

        let retried = cache.get_or_translate("<foo>", paragraphs);
        assert!(retried.is_ok());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn single_requires_one_root() {
        let cache = TranslationCache::new();

        let single = cache.get_or_translate_single("a", paragraphs).unwrap();
        assert_eq!(single, Element::paragraph(vec![Element::text("a")]));

        let result = cache.get_or_translate_single("a|b", paragraphs);
        assert_eq!(
            result,
            Err(TranslateError::Cardinality {
                markup: "a|b".to_string(),
                found: 2,
            })
        );
    }

    #[test]
    fn single_fails_on_cached_multi_root_without_retranslating() {
        let cache = TranslationCache::new();
        cache.get_or_translate("a|b", paragraphs).unwrap();

        let result = cache.get_or_translate_single("a|b", |_| {
            panic!("cached entry must not be translated again")
        });

        assert!(matches!(
            result,
            Err(TranslateError::Cardinality { found: 2, .. })
        ));
    }

    #[test]
    fn single_rejects_empty_result() {
        let cache = TranslationCache::new();

        let result = cache.get_or_translate_single("", |_| Ok(vec![]));

        assert!(matches!(
            result,
            Err(TranslateError::Cardinality { found: 0, .. })
        ));
    }

    #[test]
    fn clear_drops_entries() {
        let cache = TranslationCache::new();
        cache.get_or_translate("a", paragraphs).unwrap();

        cache.clear();

        assert!(cache.is_empty());
        assert!(cache.get("a").is_none());
    }
}
