//! Lifting plain values into `Option`.

/// `Some(value)` when `predicate` holds, `None` otherwise.
pub fn to_maybe<A, P>(predicate: P, value: A) -> Option<A>
where
    P: FnOnce(&A) -> bool,
{
    if predicate(&value) {
        Some(value)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_predicate() {
        let truthy = |x: &Option<i32>| x.is_some_and(|v| v != 0);
        assert_eq!(to_maybe(truthy, None), None);
        assert_eq!(to_maybe(truthy, Some(0)), None);
        assert_eq!(to_maybe(truthy, Some(1)), Some(Some(1)));
    }

    #[test]
    fn strings() {
        assert_eq!(to_maybe(|s: &&str| !s.is_empty(), ""), None);
        assert_eq!(to_maybe(|s: &&str| !s.is_empty(), "x"), Some("x"));
    }
}
