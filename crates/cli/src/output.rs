use std::{io::Write, str::FromStr};

use fibseq::{Error, Method, Sequence};

/// How the terms of a sequence are laid out on the line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// `[0 1 1 2]`
    #[default]
    Bracketed,
    /// `[0, 1, 1, 2]`
    List,
    /// `0, 1, 1, 2`
    Plain,
}

impl Style {
    pub fn format(self, sequence: &Sequence) -> String {
        let joined = |sep: &str| sequence.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(sep);
        match self {
            Self::Bracketed => sequence.to_string(),
            Self::List => format!("[{}]", joined(", ")),
            Self::Plain => joined(", "),
        }
    }
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bracketed" => Ok(Self::Bracketed),
            "list" => Ok(Self::List),
            "plain" => Ok(Self::Plain),
            _ => Err(Error::InvalidInput(format!("unknown style: {}", s))),
        }
    }
}

/// A single labelled output line, without the trailing newline.
pub fn render(method: Method, sequence: &Sequence, style: Style) -> String {
    format!("Fibonacci sequence ({}):  {}", method.label(), style.format(sequence))
}

/// Write one line per result, in the order given.
pub fn present<W: Write>(mut out: W, results: &[(Method, Sequence)], style: Style) -> std::io::Result<()> {
    for (method, sequence) in results {
        writeln!(out, "{}", render(*method, sequence, style))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibseq::{iterative, recursive};

    #[test]
    fn renders_reference_lines() -> fibseq::Result<()> {
        let looped = iterative::sequence(5)?;
        let recursed = recursive::sequence(5)?;

        let mut out = Vec::new();
        present(&mut out, &[(Method::Loop, looped), (Method::Recursion, recursed)], Style::default())?;

        assert_eq!(
            String::from_utf8_lossy(&out),
            "Fibonacci sequence (loop):  [0 1 1 2 3 5]\nFibonacci sequence (recursion):  [0 1 1 2 3 5]\n"
        );
        Ok(())
    }

    #[test]
    fn styles() -> fibseq::Result<()> {
        let seq = iterative::sequence(3)?;
        assert_eq!(Style::Bracketed.format(&seq), "[0 1 1 2]");
        assert_eq!(Style::List.format(&seq), "[0, 1, 1, 2]");
        assert_eq!(Style::Plain.format(&seq), "0, 1, 1, 2");
        assert_eq!(render(Method::Loop, &iterative::sequence(0)?, Style::List), "Fibonacci sequence (loop):  [0]");
        Ok(())
    }

    #[test]
    fn style_from_str() {
        assert_eq!("plain".parse::<Style>().ok(), Some(Style::Plain));
        assert!("csv".parse::<Style>().is_err());
    }
}
