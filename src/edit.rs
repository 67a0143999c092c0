//! Single-shot, pattern-driven line edits on project files.
//!
//! A file is read into a line buffer and scanned top to bottom. The first line
//! matching the pattern is handed to an edit callback, which decides what goes
//! into the buffer in its place. Once an edit reports a change, the rest of the
//! file is copied verbatim, so a file carrying several historic version lines
//! is only patched once.

use crate::error::{ReleaseError, Result};
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;

/// What an edit callback did with a matched line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The buffer now holds the edit; stop matching
    Changed,
    /// Nothing was changed; keep matching later lines
    Unchanged,
    /// Give up on this file without writing it
    Abort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    Done,
    Aborted,
}

/// Rewrite `path` in place, applying `edit` to the first matching line.
///
/// The callback receives the buffer built so far, the pattern's captures and the
/// original line (newline included). The matched line is not copied on its own:
/// the callback pushes whatever should replace it, including the original line if
/// it should be kept.
///
/// # Returns
/// * `Ok(true)` - The file was rewritten
/// * `Ok(false)` - The edit aborted; the file is untouched
/// * `Err(NotFound)` - No edit reported a change; the file is untouched
pub fn update_file<E>(path: &Path, pattern: &Regex, edit: E) -> Result<bool>
where
    E: FnMut(&mut Vec<String>, &Captures<'_>, &str) -> EditOutcome,
{
    apply(path, pattern, edit, None::<fn(&mut Vec<String>, bool) -> bool>)
}

/// Like [`update_file`], with a fallback run after the scan.
///
/// `append` gets the finished buffer and whether an edit already changed it, and
/// returns the final changed status. This is how a line gets inserted when there
/// was nothing to replace.
pub fn update_file_with_append<E, A>(
    path: &Path,
    pattern: &Regex,
    edit: E,
    append: A,
) -> Result<bool>
where
    E: FnMut(&mut Vec<String>, &Captures<'_>, &str) -> EditOutcome,
    A: FnOnce(&mut Vec<String>, bool) -> bool,
{
    apply(path, pattern, edit, Some(append))
}

fn apply<E, A>(path: &Path, pattern: &Regex, mut edit: E, append: Option<A>) -> Result<bool>
where
    E: FnMut(&mut Vec<String>, &Captures<'_>, &str) -> EditOutcome,
    A: FnOnce(&mut Vec<String>, bool) -> bool,
{
    let content = fs::read_to_string(path)?;
    let mut buffer: Vec<String> = Vec::new();
    let mut state = ScanState::Scanning;

    for line in content.split_inclusive('\n') {
        if state == ScanState::Scanning {
            if let Some(caps) = pattern.captures(line) {
                state = match edit(&mut buffer, &caps, line) {
                    EditOutcome::Changed => ScanState::Done,
                    EditOutcome::Unchanged => ScanState::Scanning,
                    EditOutcome::Abort => ScanState::Aborted,
                };
                if state == ScanState::Aborted {
                    return Ok(false);
                }
                continue;
            }
        }
        buffer.push(line.to_string());
    }

    let mut changed = state == ScanState::Done;
    if let Some(append) = append {
        changed = append(&mut buffer, changed);
    }

    if !changed {
        return Err(ReleaseError::not_found(
            pattern.as_str(),
            path.display().to_string(),
        ));
    }

    fs::write(path, buffer.concat())?;
    Ok(true)
}
