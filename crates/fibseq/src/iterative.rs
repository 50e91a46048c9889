//! Fibonacci numbers built by walking forward with two accumulators.

use crate::log::debug;
use crate::{Result, Sequence, check_term};

/// Build the first `n + 1` Fibonacci numbers in a single forward pass.
///
/// Each term is derived from the two accumulated before it, so this is O(n) in both time and space.
///
/// ```
/// assert_eq!(fibseq::iterative::sequence(0)?, [0]);
/// assert_eq!(fibseq::iterative::sequence(5)?, [0, 1, 1, 2, 3, 5]);
/// # Ok::<(), fibseq::Error>(())
/// ```
pub fn sequence(n: u32) -> Result<Sequence> {
    check_term(n)?;
    debug!("iterative sequence: n={}", n);

    let len = n as usize + 1;
    let mut terms: Vec<u64> = Vec::with_capacity(len);
    for i in 0..len {
        let term = match i {
            0 | 1 => i as u64,
            _ => terms[i - 1] + terms[i - 2],
        };
        terms.push(term);
    }

    Ok(Sequence::new(terms))
}

/// Compute the single term F(t) without keeping the rest of the sequence.
pub fn term(t: u32) -> Result<u64> {
    check_term(t)?;
    if t == 0 {
        return Ok(0);
    }

    let (mut prev, mut current) = (0u64, 1u64);
    for _ in 1..t {
        (prev, current) = (current, prev + current);
    }
    Ok(current)
}
