use std::str::FromStr;

use anyhow::Result;
use circ_common::warn;
use colored::*;
use console::Term;

use crate::terminal::colors;

/// Writes an inline prompt and reads one trimmed line.
pub fn read_line(term: &Term, prompt: &str) -> Result<String> {
    term.write_str(&format!(
        "{} {}: ",
        ">".color(colors::SEPARATOR),
        prompt.color(colors::PRIMARY)
    ))?;

    let line = term.read_line()?;
    Ok(line.trim().to_string())
}

/// Re-prompts until the line is non-empty.
pub fn read_required(term: &Term, prompt: &str) -> Result<String> {
    loop {
        let line = read_line(term, prompt)?;
        if !line.is_empty() {
            return Ok(line);
        }
        warn!("A value is required");
    }
}

/// Re-prompts until the input parses as `T`.
pub fn read_parsed<T>(term: &Term, prompt: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    loop {
        let line = read_required(term, prompt)?;
        match line.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(err) => warn!("{}", err),
        }
    }
}
