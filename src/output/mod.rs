//! Presence list output.
//!
//! Each query found in at least one reference produces one line:
//!
//! ```text
//! <query> | <name1>:1 <name2>:1 ... <nameK>:1
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Destination for presence list lines
pub trait OutputSink {
    /// Append one line; the sink adds the line terminator.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the line cannot be written.
    fn append_line(&mut self, line: &str) -> io::Result<()>;

    /// Flush buffered output at the end of a run.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if buffered output cannot be written.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink writing newline-terminated lines to any [`Write`]
pub struct PresenceWriter<W: Write> {
    inner: W,
}

impl<W: Write> PresenceWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl PresenceWriter<BufWriter<Box<dyn Write>>> {
    /// Create a buffered writer for a file path, or stdout when `path` is `-`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created.
    pub fn create(path: &Path) -> io::Result<Self> {
        let inner: Box<dyn Write> = if path.as_os_str() == "-" {
            Box::new(io::stdout().lock())
        } else {
            Box::new(File::create(path)?)
        };
        Ok(Self::new(BufWriter::new(inner)))
    }
}

impl<W: Write> OutputSink for PresenceWriter<W> {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.inner, "{line}")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// In-memory sink collecting lines without terminators
impl OutputSink for Vec<String> {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Format the presence line for a query, or `None` when nothing matched.
///
/// # Examples
///
/// ```
/// use map_strings::output::format_presence_line;
///
/// assert_eq!(
///     format_presence_line("ACGT", &["ref1", "ref3"]).as_deref(),
///     Some("ACGT | ref1:1 ref3:1")
/// );
/// assert_eq!(format_presence_line("ACGT", &[]), None);
/// ```
#[must_use]
pub fn format_presence_line(query: &str, names: &[&str]) -> Option<String> {
    if names.is_empty() {
        return None;
    }

    let names_len: usize = names.iter().map(|name| name.len() + 3).sum();
    let mut line = String::with_capacity(query.len() + 2 + names_len);
    line.push_str(query);
    line.push_str(" |");
    for name in names {
        line.push(' ');
        line.push_str(name);
        line.push_str(":1");
    }
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_presence_line() {
        assert_eq!(
            format_presence_line("AAAA", &["ref2"]).as_deref(),
            Some("AAAA | ref2:1")
        );
        assert_eq!(
            format_presence_line("AC", &["a", "b", "c"]).as_deref(),
            Some("AC | a:1 b:1 c:1")
        );
        assert!(format_presence_line("AC", &[]).is_none());
    }

    #[test]
    fn test_presence_writer() {
        let mut writer = PresenceWriter::new(Vec::new());
        writer.append_line("ACGT | ref1:1").unwrap();
        writer.append_line("AAAA | ref2:1").unwrap();
        writer.finish().unwrap();

        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, "ACGT | ref1:1\nAAAA | ref2:1\n");
    }

    #[test]
    fn test_vec_sink() {
        let mut lines: Vec<String> = Vec::new();
        lines.append_line("x | y:1").unwrap();
        assert_eq!(lines, vec!["x | y:1".to_string()]);
    }
}
