//! Predicate combinators and first-match-wins dispatch over
//! (predicate, transform) pairs.

/// `true` when every predicate holds for `value`. Stops at the first
/// failure; an empty list is vacuously `true`.
pub fn all_pass<A, P>(predicates: &[P], value: &A) -> bool
where
    P: Fn(&A) -> bool,
{
    predicates.iter().all(|predicate| predicate(value))
}

/// `true` when at least one predicate holds for `value`. Stops at the
/// first success; an empty list is `false`.
pub fn any_pass<A, P>(predicates: &[P], value: &A) -> bool
where
    P: Fn(&A) -> bool,
{
    predicates.iter().any(|predicate| predicate(value))
}

type Predicate<'a, A> = Box<dyn Fn(&A) -> bool + 'a>;
type Transform<'a, A, B> = Box<dyn Fn(A) -> B + 'a>;

/// Ordered list of guarded transforms.
///
/// ```
/// use lourdes::Cond;
///
/// let sign = Cond::new()
///     .when(|x: &i32| *x < 0, |_: i32| "negative")
///     .when(|x: &i32| *x > 0, |_: i32| "positive");
///
/// assert_eq!(sign.apply(-3), Ok("negative"));
/// assert_eq!(sign.apply(0), Err(0));
/// ```
pub struct Cond<'a, A, B> {
    arms: Vec<(Predicate<'a, A>, Transform<'a, A, B>)>,
}

impl<'a, A, B> Cond<'a, A, B> {
    pub fn new() -> Self {
        Self { arms: Vec::new() }
    }

    /// Append an arm. Arms are tried in insertion order.
    pub fn when<P, F>(mut self, predicate: P, transform: F) -> Self
    where
        P: Fn(&A) -> bool + 'a,
        F: Fn(A) -> B + 'a,
    {
        self.arms.push((Box::new(predicate), Box::new(transform)));
        self
    }

    /// Run the transform of the first arm whose predicate holds.
    ///
    /// Unmatched values are handed back untouched in `Err`.
    pub fn apply(&self, value: A) -> Result<B, A> {
        match self.arms.iter().find(|(predicate, _)| predicate(&value)) {
            Some((_, transform)) => Ok(transform(value)),
            None => Err(value),
        }
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }
}

impl<A, B> Default for Cond<'_, A, B> {
    fn default() -> Self {
        Self::new()
    }
}
