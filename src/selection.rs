//! Caller-side disambiguation between search candidates.

use std::io::{self, BufRead, Write};

use crate::api::CandidateRecord;

const MAX_ATTEMPTS: usize = 3;

/// How to pick one candidate out of several
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Take the provider's top-ranked result
    First,
    /// Ask on the terminal
    Interactive,
}

/// One display line for a candidate: `Title (Year) [tmdb-id]`
pub fn format_candidate(candidate: &CandidateRecord) -> String {
    match candidate.year() {
        Some(year) => format!("{} ({}) [tmdb-{}]", candidate.title, year, candidate.id),
        None => format!("{} [tmdb-{}]", candidate.title, candidate.id),
    }
}

/// Pick a candidate index. A single candidate is taken without asking.
///
/// In interactive mode the list is written to `writer` and a 1-based number
/// is read from `reader`. A blank line, `q`, or EOF cancels; invalid input
/// re-prompts a limited number of times.
pub fn choose_candidate(
    candidates: &[CandidateRecord],
    policy: SelectionPolicy,
    reader: &mut impl BufRead,
    writer: &mut impl Write,
) -> io::Result<Option<usize>> {
    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 || policy == SelectionPolicy::First {
        return Ok(Some(0));
    }

    writeln!(writer)?;
    writeln!(writer, "Multiple matches found:")?;
    for (i, candidate) in candidates.iter().enumerate() {
        writeln!(writer, "  {:>2}. {}", i + 1, format_candidate(candidate))?;
    }
    writeln!(writer)?;

    for _ in 0..MAX_ATTEMPTS {
        write!(writer, "Select a match [1-{}, q to quit]: ", candidates.len())?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let answer = line.trim();
        if answer.is_empty() || answer.eq_ignore_ascii_case("q") {
            return Ok(None);
        }

        match answer.parse::<usize>() {
            Ok(n) if (1..=candidates.len()).contains(&n) => return Ok(Some(n - 1)),
            _ => writeln!(writer, "Invalid choice: {}", answer)?,
        }
    }

    Ok(None)
}

/// Ask a yes/no question. Only `y` or `yes` (any case) count as yes.
pub fn confirm(prompt: &str, reader: &mut impl BufRead, writer: &mut impl Write) -> io::Result<bool> {
    write!(writer, "{} [y/N]: ", prompt)?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        writeln!(writer)?;
        return Ok(false);
    }

    let answer = line.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
