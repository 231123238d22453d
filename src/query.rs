use serde::Serialize;
use std::fmt;

use crate::error::Error;

/// Ordered query-parameter collection.
///
/// Keys follow map semantics with last-write-wins replacement, but
/// iteration order is the order of first insertion so that rendering is
/// deterministic.
///
/// [`Display`] renders the collection in `application/x-www-form-urlencoded`
/// style: `key=value` pairs joined by `&`, both sides percent-encoded with
/// space encoded as `+`.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    #[inline]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Inserts a pair, replacing the value in place when the key already
    /// exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Inserts every pair of the sequence, later duplicates overwriting
    /// earlier values.
    pub fn extend_pairs<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.insert(key, value);
        }
    }

    /// Inserts one pair per field of `params`.
    ///
    /// Field enumeration goes through [`Serialize`], so any struct with
    /// named, scalar fields works. Fails with [`Error::Validation`] when
    /// the object exposes no fields at all, and with [`Error::Encode`]
    /// when it does not serialize to flat key/value pairs.
    pub fn extend_object<T: Serialize>(&mut self, params: &T) -> Result<(), Error> {
        let encoded = serde_urlencoded::to_string(params)?;
        if encoded.is_empty() {
            return Err(Error::Validation(
                "no fields were found on the provided object",
            ));
        }

        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(&encoded)
            .map_err(|_| Error::Validation("object did not serialize to key/value pairs"))?;

        self.extend_pairs(pairs);
        Ok(())
    }

    /// Iterates pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // infallible for string pairs
        match serde_urlencoded::to_string(&self.pairs) {
            Ok(encoded) => f.write_str(&encoded),
            Err(_) => Err(fmt::Error),
        }
    }
}
