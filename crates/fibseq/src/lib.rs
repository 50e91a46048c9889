#![forbid(unsafe_code)]
#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

//! Fibonacci sequences computed two ways: an accumulating loop ([`iterative`]) and a naive
//! self-referential function ([`recursive`]).
//!
//! Both produce the same [`Sequence`]; they differ only in how much work it takes to get there.
//!
//! ```
//! use fibseq::{Method, iterative, recursive};
//!
//! let looped = iterative::sequence(5)?;
//! let recursed = recursive::sequence(5)?;
//! assert_eq!(looped, recursed);
//! assert_eq!(looped.to_string(), "[0 1 1 2 3 5]");
//! assert_eq!(Method::Recursion.sequence(10)?.last(), Some(55));
//! # Ok::<(), fibseq::Error>(())
//! ```

#[cfg(feature = "log")]
#[allow(clippy::single_component_path_imports, unused_imports)]
use log;

#[cfg(not(feature = "log"))]
#[allow(unused_macros)]
pub(crate) mod log {
    macro_rules! debug    ( ($($tt:tt)*) => {{}} );
    macro_rules! trace    ( ($($tt:tt)*) => {{}} );
    pub(crate) use debug;
    pub(crate) use trace;
}

mod error;
mod method;
mod sequence;

pub mod iterative;
pub mod recursive;

pub use error::*;
pub use method::Method;
pub use sequence::Sequence;

/// The largest term index whose Fibonacci number fits in a `u64`.
///
/// F(93) = 12200160415121876738; F(94) would overflow.
pub const MAX_TERM: u32 = 93;

/// Reject term indices past [`MAX_TERM`].
pub(crate) fn check_term(n: u32) -> Result<()> {
    match n {
        n if n > MAX_TERM => Err(Error::TermOutOfRange { requested: n, max: MAX_TERM }),
        _ => Ok(()),
    }
}
