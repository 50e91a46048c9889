use std::io::{BufRead, Write};

use fibseq::{Error, Result};

pub const PROMPT: &str = "Enter a positive integer: ";

/// Parse a term count, ignoring surrounding whitespace.
pub fn parse_terms(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    trimmed
        .parse::<u32>()
        .map_err(|e| Error::InvalidInput(format!("expected a non-negative integer, got {:?} ({})", trimmed, e)))
}

/// Write [`PROMPT`] to `prompt_out` and read one term count from `input`.
pub fn read_terms<R: BufRead, W: Write>(mut input: R, mut prompt_out: W) -> Result<u32> {
    prompt_out.write_all(PROMPT.as_bytes())?;
    prompt_out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InvalidInput("no input given".to_string()));
    }

    log::debug!("read line: {:?}", line);
    parse_terms(&line)
}
