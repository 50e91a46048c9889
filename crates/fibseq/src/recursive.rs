//! Fibonacci numbers by direct recursion on the definition.
//!
//! Nothing is cached: building a sequence of `n + 1` terms recomputes every smaller term from scratch,
//! so the total work grows exponentially with `n`.

use crate::log::{debug, trace};
use crate::{Result, Sequence, check_term};

/// F(t), computed as `fib(t - 1) + fib(t - 2)` all the way down.
///
/// Recursion depth equals `t`. Callers must keep `t <= MAX_TERM` or the sum overflows.
///
/// ```
/// assert_eq!(fibseq::recursive::fib(0), 0);
/// assert_eq!(fibseq::recursive::fib(1), 1);
/// assert_eq!(fibseq::recursive::fib(10), 55);
/// ```
pub fn fib(t: u32) -> u64 {
    if t <= 1 {
        return t as u64;
    }
    fib(t - 1) + fib(t - 2)
}

/// Build the first `n + 1` Fibonacci numbers by calling [`fib`] once per index.
pub fn sequence(n: u32) -> Result<Sequence> {
    check_term(n)?;
    debug!("recursive sequence: n={}", n);

    let terms = (0..=n)
        .map(|i| {
            trace!("fib({})", i);
            fib(i)
        })
        .collect();

    Ok(Sequence::new(terms))
}
