//! Markdown body checks.
//!
//! The body scanner is a line-oriented state machine over fenced code blocks
//! (``` and ~~~ per CommonMark): a fence of 3+ identical characters opens a
//! block, and only a fence of the same character with at least the opening
//! length closes it. An open block at EOF is a lint error pointing at the
//! opening fence line.

use std::path::Path;

use crate::error::LintError;

/// Body parsing state for code block tracking
#[derive(Debug, Clone, PartialEq, Eq)]
enum BodyState {
    Prose,
    FencedBlock {
        fence_char: char,
        opening_fence_len: usize,
        opening_line: usize,
        opening_column: usize,
        opening_text: String,
    },
}

fn parse_fence(trimmed_line: &str) -> Option<(char, usize)> {
    let fence_char = match trimmed_line.as_bytes().first() {
        Some(b'`') => '`',
        Some(b'~') => '~',
        _ => return None,
    };

    let fence_len = trimmed_line
        .chars()
        .take_while(|&c| c == fence_char)
        .count();
    if fence_len >= 3 {
        Some((fence_char, fence_len))
    } else {
        None
    }
}

/// Scan a Markdown body for unbalanced code fences.
///
/// `start_line` is the 1-indexed file line of the first body line, so
/// reported positions are file-absolute.
pub fn check_fences(body: &str, path: &Path, start_line: usize) -> Vec<LintError> {
    let mut errors = Vec::new();
    let mut state = BodyState::Prose;

    for (idx, line) in body.lines().enumerate() {
        let line_number = start_line + idx;
        let trimmed_line = line.trim_start();
        let Some((fence_char, fence_len)) = parse_fence(trimmed_line) else {
            continue;
        };

        match &state {
            BodyState::Prose => {
                let column = line.len() - trimmed_line.len() + 1;
                state = BodyState::FencedBlock {
                    fence_char,
                    opening_fence_len: fence_len,
                    opening_line: line_number,
                    opening_column: column,
                    opening_text: trimmed_line.to_owned(),
                };
            }
            BodyState::FencedBlock {
                fence_char: open_fence_char,
                opening_fence_len,
                ..
            } => {
                // Closing requires a matching delimiter with sufficient length.
                if fence_char == *open_fence_char && fence_len >= *opening_fence_len {
                    state = BodyState::Prose;
                }
            }
        }
    }

    if let BodyState::FencedBlock {
        opening_line,
        opening_column,
        opening_text,
        ..
    } = state
    {
        errors.push(LintError {
            file: path.to_owned(),
            line: opening_line,
            column: opening_column,
            field: String::new(),
            raw_value: opening_text.clone(),
            error: "Code fence is never closed".to_owned(),
            context: opening_text,
        });
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(body: &str) -> Vec<LintError> {
        check_fences(body, Path::new("test.md"), 1)
    }

    #[test]
    fn test_balanced_fences_ok() {
        let body = "# T\n\n```bash\ndocker run --rm alpine\n```\n\nprose\n";
        assert!(check(body).is_empty());
    }

    #[test]
    fn test_unclosed_fence_reported() {
        let body = "intro\n```json\n{\"Effect\": \"Deny\"}\n";
        let errors = check(body);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 2);
        assert!(errors[0].error.contains("never closed"));
        assert_eq!(errors[0].raw_value, "```json");
    }

    #[test]
    fn test_tilde_fence_balanced() {
        let body = "~~~yaml\nkey: value\n~~~\n";
        assert!(check(body).is_empty());
    }

    #[test]
    fn test_mismatched_fence_char_does_not_close() {
        // A ~~~ line must not close a ``` block.
        let body = "```\n~~~\n";
        let errors = check(body);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 1);
    }

    #[test]
    fn test_shorter_fence_does_not_close() {
        let body = "`````\n```\n";
        let errors = check(body);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_longer_closing_fence_closes() {
        let body = "```\ncode\n`````\n";
        assert!(check(body).is_empty());
    }

    #[test]
    fn test_backticks_inside_tilde_block_ignored() {
        let body = "~~~\n```\n~~~\n";
        assert!(check(body).is_empty());
    }

    #[test]
    fn test_start_line_offset_applied() {
        let body = "```bash\n";
        let errors = check_fences(body, Path::new("test.md"), 12);
        assert_eq!(errors[0].line, 12);
    }

    #[test]
    fn test_indented_fence_column() {
        let body = "  ```\n";
        let errors = check(body);
        assert_eq!(errors[0].column, 3);
    }

    #[test]
    fn test_two_backticks_is_not_a_fence() {
        let body = "``code span``\n";
        assert!(check(body).is_empty());
    }
}
