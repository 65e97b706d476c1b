mod adjustment;

pub use adjustment::Adjustment;

use std::fmt;
use std::io::{self, Write};

use crate::TARGET_LENGTH;

/// Character count of a piece of content measured against a target length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub length: usize,
    pub target: usize,
}

impl Report {
    /// Count the characters of `content` against `TARGET_LENGTH`.
    pub fn measure(content: &str) -> Self {
        Self::with_target(content, TARGET_LENGTH)
    }

    pub fn with_target(content: &str, target: usize) -> Self {
        Self {
            length: content.chars().count(),
            target,
        }
    }

    pub fn adjustment(&self) -> Adjustment {
        Adjustment::between(self.length, self.target)
    }

    /// Write the summary, a blank line, the `Content:` header and `content`.
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W, content: &str) -> io::Result<()> {
        writeln!(out, "{}", self)?;
        writeln!(out)?;
        writeln!(out, "Content:")?;
        writeln!(out, "{}", content)?;
        out.flush()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current length: {} characters", self.length)?;
        write!(f, "Need to {} characters", self.adjustment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(content: &str) -> String {
        let mut out = Vec::new();
        Report::measure(content).write_to(&mut out, content).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn short_content_needs_characters_added() {
        assert_eq!(
            render("hello"),
            "Current length: 5 characters\nNeed to add 395 characters\n\nContent:\nhello\n"
        );
    }

    #[test]
    fn exact_length_asks_to_remove_zero() {
        let content = "x".repeat(400);
        let report = Report::measure(&content);
        assert_eq!(report.adjustment(), Adjustment::Remove(0));
        assert_eq!(
            report.to_string(),
            "Current length: 400 characters\nNeed to remove 0 characters"
        );
    }

    #[test]
    fn long_content_needs_characters_removed() {
        let content = "ab".repeat(225);
        assert_eq!(
            Report::measure(&content).to_string(),
            "Current length: 450 characters\nNeed to remove 50 characters"
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        let report = Report::measure("h\u{e9}llo w\u{f6}rld \u{1f980}");
        assert_eq!(report.length, 13);
        assert_eq!(report.adjustment(), Adjustment::Add(387));
    }

    #[test]
    fn empty_content() {
        assert_eq!(
            render(""),
            "Current length: 0 characters\nNeed to add 400 characters\n\nContent:\n\n"
        );
    }
}
