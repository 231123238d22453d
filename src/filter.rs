use crate::predicate::Predicate;

#[cfg(test)]
mod test;

type Property<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// Matching mode for [`PropertyFilter::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Word-level, any-overlap matching.
    #[default]
    Loose,
    /// Whole-string equality matching.
    Exact,
}

/// Property-based search filter.
///
/// Holds a query string and an ordered list of property accessors to test
/// it against. Accessors are plain typed closures registered up front;
/// their values are compared as strings.
///
/// An empty query matches everything — the absence of a filter is
/// pass-through by design, not a rejection.
pub struct PropertyFilter<T> {
    query: String,
    properties: Vec<Property<T>>,
    mode: MatchMode,
    case_sensitive: bool,
}

impl<T> PropertyFilter<T> {
    /// Creates a filter for `query` with no properties registered.
    ///
    /// Defaults to [`MatchMode::Loose`], case-insensitive.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            properties: Vec::new(),
            mode: MatchMode::default(),
            case_sensitive: false,
        }
    }

    /// Registers a property to test the query against.
    ///
    /// The accessor's value is stringified, so non-string fields register
    /// as e.g. `|t| t.age`.
    pub fn include<K, F>(&mut self, property: F) -> &mut Self
    where
        K: ToString,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.properties.push(Box::new(move |t| property(t).to_string()));
        self
    }

    /// Sets the mode used by [`apply`][PropertyFilter::apply].
    pub fn match_mode(&mut self, mode: MatchMode) -> &mut Self {
        self.mode = mode;
        self
    }

    /// Sets the case rule used by [`apply`][PropertyFilter::apply].
    pub fn case_sensitive(&mut self, case_sensitive: bool) -> &mut Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Returns true when any whitespace-delimited word of the query equals
    /// any word of any registered property's value.
    ///
    /// An empty query is vacuously true.
    pub fn is_loose_match(&self, target: &T, case_sensitive: bool) -> bool {
        if self.query.is_empty() {
            return true;
        }

        self.properties.iter().any(|property| {
            let value = property(target);
            value.split_whitespace().any(|word| {
                self.query
                    .split_whitespace()
                    .any(|query_word| eq(query_word, word, case_sensitive))
            })
        })
    }

    /// Returns true when the entire query equals some registered
    /// property's full value.
    ///
    /// An empty query is vacuously true.
    pub fn is_exact_match(&self, target: &T, case_sensitive: bool) -> bool {
        if self.query.is_empty() {
            return true;
        }

        self.properties
            .iter()
            .any(|property| eq(&self.query, &property(target), case_sensitive))
    }

    /// Filters `source` with the configured mode and case rule.
    ///
    /// The per-property checks are OR-composed through [`Predicate`], so
    /// a non-empty query with no registered properties matches nothing.
    pub fn apply(&self, source: impl IntoIterator<Item = T>) -> Vec<T> {
        if self.query.is_empty() {
            return source.into_iter().collect();
        }

        let case_sensitive = self.case_sensitive;
        let filter = self
            .properties
            .iter()
            .map(|property| match self.mode {
                MatchMode::Loose => Predicate::from_fn(move |t: &T| {
                    let value = property(t);
                    value.split_whitespace().any(|word| {
                        self.query
                            .split_whitespace()
                            .any(|query_word| eq(query_word, word, case_sensitive))
                    })
                }),
                MatchMode::Exact => Predicate::from_fn(move |t: &T| {
                    eq(&self.query, &property(t), case_sensitive)
                }),
            })
            .fold(Predicate::always_false(), Predicate::or);

        source.into_iter().filter(|t| filter.test(t)).collect()
    }
}

fn eq(a: &str, b: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a.eq_ignore_ascii_case(b)
    }
}

impl<T> std::fmt::Debug for PropertyFilter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("PropertyFilter")
            .field("query", &self.query)
            .field("properties", &self.properties.len())
            .field("mode", &self.mode)
            .field("case_sensitive", &self.case_sensitive)
            .finish()
    }
}
