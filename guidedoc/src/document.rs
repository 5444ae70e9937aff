//! Splitting a guide file into its front-matter block and Markdown body.
//!
//! The file-level contract: a document begins with a line that is exactly
//! `---`, followed by raw YAML, terminated by the next `---` line. Everything
//! after the closing delimiter is the body. Only the leading block is
//! metadata — a later `---` pair in the body is ordinary Markdown (a
//! thematic break) and is left alone.

use thiserror::Error;

/// Errors produced while splitting a document.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum DocumentError {
    /// The file does not begin with a `---` front-matter delimiter.
    #[error("document does not begin with a '---' front-matter block")]
    MissingFrontMatter,
    /// The opening `---` delimiter is never closed.
    #[error("front-matter block opened on line 1 is never closed with '---'")]
    UnterminatedFrontMatter,
    /// The front-matter block contains only blank lines.
    #[error("front-matter block is empty")]
    EmptyFrontMatter,
}

/// A guide document split into metadata and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Raw YAML between the `---` delimiters, without the delimiters.
    pub raw_front_matter: String,
    /// Markdown body after the closing delimiter.
    pub body: String,
    /// 1-indexed line number of the first body line in the original file.
    /// Lets body diagnostics report file-absolute positions.
    pub body_start_line: usize,
}

/// Strip a UTF-8 byte-order mark if present.
fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}

/// A delimiter line is exactly `---` (trailing CR tolerated).
fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches('\r') == "---"
}

impl Document {
    /// Split `content` into front-matter and body.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MissingFrontMatter`] if the first line is not
    /// `---`, [`DocumentError::UnterminatedFrontMatter`] if no closing `---`
    /// follows, and [`DocumentError::EmptyFrontMatter`] if the block holds
    /// only blank lines.
    pub fn parse(content: &str) -> Result<Self, DocumentError> {
        let content = strip_bom(content);
        let mut lines = content.lines();

        match lines.next() {
            Some(first) if is_delimiter(first) => {}
            _ => return Err(DocumentError::MissingFrontMatter),
        }

        let mut front_matter_lines: Vec<&str> = Vec::new();
        let mut closing_line: Option<usize> = None;

        // Line 1 is the opening delimiter; front-matter starts on line 2.
        for (idx, line) in lines.enumerate() {
            let line_number = idx + 2;
            if is_delimiter(line) {
                closing_line = Some(line_number);
                break;
            }
            front_matter_lines.push(line);
        }

        let Some(closing_line) = closing_line else {
            return Err(DocumentError::UnterminatedFrontMatter);
        };

        let raw_front_matter = front_matter_lines.join("\n");
        if raw_front_matter.trim().is_empty() {
            return Err(DocumentError::EmptyFrontMatter);
        }

        let body_start_line = closing_line + 1;
        let body = content
            .lines()
            .skip(closing_line)
            .collect::<Vec<_>>()
            .join("\n");

        Ok(Self {
            raw_front_matter,
            body,
            body_start_line,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_document() {
        let content = "---\ntitle: T\n---\n# Heading\n\nBody text\n";
        let doc = Document::parse(content).unwrap();
        assert_eq!(doc.raw_front_matter, "title: T");
        assert_eq!(doc.body, "# Heading\n\nBody text");
        assert_eq!(doc.body_start_line, 4);
    }

    #[test]
    fn test_parse_missing_front_matter() {
        let content = "# Just a heading\n";
        assert_eq!(
            Document::parse(content),
            Err(DocumentError::MissingFrontMatter)
        );
    }

    #[test]
    fn test_parse_unterminated_front_matter() {
        let content = "---\ntitle: T\nno closing fence\n";
        assert_eq!(
            Document::parse(content),
            Err(DocumentError::UnterminatedFrontMatter)
        );
    }

    #[test]
    fn test_parse_empty_front_matter() {
        let content = "---\n\n   \n---\nBody\n";
        assert_eq!(
            Document::parse(content),
            Err(DocumentError::EmptyFrontMatter)
        );
    }

    #[test]
    fn test_parse_empty_file() {
        assert_eq!(Document::parse(""), Err(DocumentError::MissingFrontMatter));
    }

    #[test]
    fn test_parse_bom_tolerated() {
        let content = "\u{feff}---\ntitle: T\n---\nBody\n";
        let doc = Document::parse(content).unwrap();
        assert_eq!(doc.raw_front_matter, "title: T");
    }

    #[test]
    fn test_parse_crlf_delimiters() {
        let content = "---\r\ntitle: T\r\n---\r\nBody\r\n";
        let doc = Document::parse(content).unwrap();
        assert_eq!(doc.raw_front_matter.trim_end_matches('\r'), "title: T");
        assert_eq!(doc.body_start_line, 4);
    }

    #[test]
    fn test_parse_thematic_break_in_body_is_not_metadata() {
        let content = "---\ntitle: T\n---\nIntro\n---\nMore body\n";
        let doc = Document::parse(content).unwrap();
        assert_eq!(doc.raw_front_matter, "title: T");
        assert!(doc.body.contains("More body"));
    }

    #[test]
    fn test_parse_empty_body() {
        let content = "---\ntitle: T\n---\n";
        let doc = Document::parse(content).unwrap();
        assert!(doc.body.is_empty());
        assert_eq!(doc.body_start_line, 4);
    }
}
