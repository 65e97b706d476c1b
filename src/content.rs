use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a UTF-8 text file and return its content with line endings
/// normalized and surrounding whitespace removed.
///
/// The file is closed before this returns, whether or not the read succeeded.
pub fn read_content(path: &Path) -> Result<String> {
    let mut raw = String::new();
    {
        let mut file = File::open(path)
            .with_context(|| format!("failed to open input file at {}", path.display()))?;
        file.read_to_string(&mut raw)
            .with_context(|| format!("failed to read input file at {}", path.display()))?;
    }

    let normalized = normalize_newlines(&raw);
    Ok(trim_whitespace(&normalized).to_owned())
}

/// Turn `\r\n` and lone `\r` into `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Strip leading and trailing whitespace.
///
/// Besides Unicode white space this also strips the ASCII file, group,
/// record and unit separators (U+001C..=U+001F).
pub fn trim_whitespace(text: &str) -> &str {
    text.trim_matches(is_strippable)
}

fn is_strippable(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}
