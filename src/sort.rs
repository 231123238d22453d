use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Error;


type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// A sort key: an opaque comparator built from a typed accessor.
///
/// Created by [`by`]; consumed by [`DynamicSort::new`] and
/// [`DynamicSort::add_key`].
pub struct SortKey<T> {
    cmp: Comparator<T>,
}

/// Lifts an accessor into a [`SortKey`].
///
/// The accessor runs on both sides of every comparison, so it should be
/// cheap; clone out of the target when the field is not `Copy`.
pub fn by<T, K, F>(accessor: F) -> SortKey<T>
where
    K: Ord,
    F: Fn(&T) -> K + Send + Sync + 'static,
{
    SortKey {
        cmp: Box::new(move |a, b| accessor(a).cmp(&accessor(b))),
    }
}

struct Entry<T> {
    chain: Arc<Vec<Comparator<T>>>,
    descending: bool,
}

/// String-keyed sort over a caller-defined record type.
///
/// Registration binds an ascending and a descending key name to the same
/// accessor chain; lookup is case-insensitive (keys are lowercased both
/// ways). A key that is empty or was never registered falls back to the
/// default accessor, ascending.
///
/// Sorting is stable, so equal primary keys preserve input order unless a
/// secondary accessor breaks the tie. Registration must complete before
/// concurrent [`apply`][DynamicSort::apply] calls begin; `apply` itself is
/// read-only.
pub struct DynamicSort<T> {
    default_chain: Arc<Vec<Comparator<T>>>,
    entries: HashMap<String, Entry<T>>,
}

impl<T> DynamicSort<T> {
    /// Creates a sorter whose fallback orders ascending by `default_key`.
    pub fn new(default_key: SortKey<T>) -> Self {
        Self {
            default_chain: Arc::new(vec![default_key.cmp]),
            entries: HashMap::new(),
        }
    }

    /// Registers `primary` under both key variants, with `then_by`
    /// accessors applied as successive tie-breaks in declaration order.
    ///
    /// The descending variant reverses the whole chain, tie-breaks
    /// included. Fails with [`Error::DuplicateKey`] when either lowercased
    /// key is already registered, leaving the registry untouched.
    pub fn add_key(
        &mut self,
        ascending_key: &str,
        descending_key: &str,
        primary: SortKey<T>,
        then_by: impl IntoIterator<Item = SortKey<T>>,
    ) -> Result<&mut Self, Error> {
        let asc = ascending_key.to_lowercase();
        let desc = descending_key.to_lowercase();

        if self.entries.contains_key(&asc) {
            return Err(Error::DuplicateKey(asc));
        }
        if asc == desc || self.entries.contains_key(&desc) {
            return Err(Error::DuplicateKey(desc));
        }

        let chain: Vec<Comparator<T>> = std::iter::once(primary.cmp)
            .chain(then_by.into_iter().map(|key| key.cmp))
            .collect();
        let chain = Arc::new(chain);

        self.entries
            .insert(asc, Entry { chain: Arc::clone(&chain), descending: false });
        self.entries.insert(desc, Entry { chain, descending: true });

        Ok(self)
    }

    /// Sorts `source` by the chain registered under `key`.
    ///
    /// An empty or unregistered key sorts ascending by the default
    /// accessor.
    pub fn apply(&self, key: &str, source: impl IntoIterator<Item = T>) -> Vec<T> {
        let key = key.to_lowercase();
        let (chain, descending) = match self.entries.get(&key) {
            Some(entry) => (&entry.chain, entry.descending),
            None => (&self.default_chain, false),
        };

        let mut items: Vec<T> = source.into_iter().collect();
        items.sort_by(|a, b| {
            let mut ord = Ordering::Equal;
            for cmp in chain.iter() {
                ord = cmp(a, b);
                if ord != Ordering::Equal {
                    break;
                }
            }
            if descending { ord.reverse() } else { ord }
        });
        items
    }
}

impl<T> std::fmt::Debug for SortKey<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("SortKey").finish()
    }
}

impl<T> std::fmt::Debug for DynamicSort<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut keys: Vec<_> = self.entries.keys().collect();
        keys.sort();
        f.debug_struct("DynamicSort").field("keys", &keys).finish()
    }
}
