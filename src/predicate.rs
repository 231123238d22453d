/// Composable boolean predicate over `T`.
///
/// Purely structural: composition builds a closure tree at configuration
/// time, and [`test`][Predicate::test] walks it with no other runtime
/// state. [`PropertyFilter`][crate::PropertyFilter] uses this to OR
/// together its per-property sub-predicates.
pub struct Predicate<'a, T: ?Sized> {
    f: Box<dyn Fn(&T) -> bool + Send + Sync + 'a>,
}

impl<'a, T: ?Sized + 'a> Predicate<'a, T> {
    /// Wraps a closure.
    pub fn from_fn(f: impl Fn(&T) -> bool + Send + Sync + 'a) -> Self {
        Self { f: Box::new(f) }
    }

    /// `|_| true` — the identity of [`and`][Predicate::and].
    pub fn always_true() -> Self {
        Self::from_fn(|_| true)
    }

    /// `|_| false` — the identity of [`or`][Predicate::or].
    pub fn always_false() -> Self {
        Self::from_fn(|_| false)
    }

    /// Short-circuiting conjunction.
    pub fn and(self, other: Self) -> Self {
        Self::from_fn(move |t| (self.f)(t) && (other.f)(t))
    }

    /// Short-circuiting disjunction.
    pub fn or(self, other: Self) -> Self {
        Self::from_fn(move |t| (self.f)(t) || (other.f)(t))
    }

    /// Negation.
    pub fn not(self) -> Self {
        Self::from_fn(move |t| !(self.f)(t))
    }

    /// Evaluates the predicate.
    #[inline]
    pub fn test(&self, target: &T) -> bool {
        (self.f)(target)
    }
}

impl<T: ?Sized> std::fmt::Debug for Predicate<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Predicate").finish()
    }
}
