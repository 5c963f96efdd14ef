//! Lifting plain values into `Result`.

/// `Ok(value)` when `predicate` holds, otherwise `Err(on_left(value))`.
pub fn to_either<A, B, P, L>(predicate: P, on_left: L, value: A) -> Result<A, B>
where
    P: FnOnce(&A) -> bool,
    L: FnOnce(A) -> B,
{
    if predicate(&value) {
        Ok(value)
    } else {
        Err(on_left(value))
    }
}
