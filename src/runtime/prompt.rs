//! User interaction operations (questions, confirmations, checklists).

use anyhow::Result;

use super::RealRuntime;

use std::io::{self, BufRead, Write};

/// Core, testable implementation that reads from any BufRead and writes to any Write.
/// This is intentionally free-standing so tests can exercise it without needing a RealRuntime.
pub(crate) fn ask_with_io<R: BufRead, W: Write>(
    question: &str,
    default: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    if default.is_empty() {
        write!(output, "{}: ", question)?;
    } else {
        write!(output, "{} [{}]: ", question, default)?;
    }
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let answer = line.trim();
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}

pub(crate) fn confirm_with_io<R: BufRead, W: Write>(
    question: &str,
    default: bool,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    write!(output, "{} {} ", question, hint)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let response = line.trim().to_lowercase();
    if response.is_empty() {
        return Ok(default);
    }
    Ok(response == "y" || response == "yes")
}

/// Renders a numbered checklist and parses the selection. The answer replaces
/// the selection with a comma-separated list of 1-based numbers; an empty line
/// keeps `preselected` and `none` clears it. Out-of-range numbers are ignored,
/// and indices come back sorted and deduplicated.
pub(crate) fn pick_with_io<R: BufRead, W: Write>(
    question: &str,
    choices: &[String],
    preselected: &[usize],
    input: &mut R,
    output: &mut W,
) -> Result<Vec<usize>> {
    writeln!(output, "{}", question)?;
    for (index, choice) in choices.iter().enumerate() {
        let marker = if preselected.contains(&index) { "x" } else { " " };
        writeln!(output, "  {}) [{}] {}", index + 1, marker, choice)?;
    }
    write!(
        output,
        "Selection (comma-separated numbers, Enter keeps [x], 'none' clears): "
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let answer = line.trim().to_lowercase();
    if answer.is_empty() {
        return Ok(preselected.to_vec());
    }
    if answer == "none" || answer == "0" {
        return Ok(Vec::new());
    }

    let mut picked: Vec<usize> = answer
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter_map(|token| token.parse::<usize>().ok())
        .filter(|n| (1..=choices.len()).contains(n))
        .map(|n| n - 1)
        .collect();
    picked.sort_unstable();
    picked.dedup();
    Ok(picked)
}

impl RealRuntime {
    pub(crate) fn ask_impl(&self, question: &str, default: &str) -> Result<String> {
        // Wire the generic implementation to real stdin/stdout.
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut stdin_lock = stdin.lock();
        ask_with_io(question, default, &mut stdin_lock, &mut stdout)
    }

    pub(crate) fn confirm_impl(&self, question: &str, default: bool) -> Result<bool> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut stdin_lock = stdin.lock();
        confirm_with_io(question, default, &mut stdin_lock, &mut stdout)
    }

    pub(crate) fn pick_impl(
        &self,
        question: &str,
        choices: &[String],
        preselected: &[usize],
    ) -> Result<Vec<usize>> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut stdin_lock = stdin.lock();
        pick_with_io(question, choices, preselected, &mut stdin_lock, &mut stdout)
    }
}
