use core::{fmt::Display, str::FromStr};

use crate::{Error, Result, Sequence, iterative, recursive};

/// How a [`Sequence`] gets computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// [`iterative::sequence`]
    Loop,
    /// [`recursive::sequence`]
    Recursion,
}

impl Method {
    /// Every method, in presentation order
    pub const ALL: [Method; 2] = [Method::Loop, Method::Recursion];

    pub fn sequence(self, n: u32) -> Result<Sequence> {
        match self {
            Self::Loop => iterative::sequence(n),
            Self::Recursion => recursive::sequence(n),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Loop => "loop",
            Self::Recursion => "recursion",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "loop" => Ok(Self::Loop),
            "recursion" => Ok(Self::Recursion),
            _ => Err(Error::InvalidInput(format!("unknown method: {}", s))),
        }
    }
}
