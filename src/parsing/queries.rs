//! Reader for query files.
//!
//! Each non-blank line contributes its first whitespace-delimited token as a
//! query, so plain k-mer lists and k-mer count tables such as
//! `ACGTTG | s1:1 s2:1` are both accepted. Queries keep their input order.

use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read queries from a file, or from stdin when `path` is `-`
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
pub fn read_queries(path: &Path) -> std::io::Result<Vec<String>> {
    if path.as_os_str() == "-" {
        parse_queries(std::io::stdin().lock())
    } else {
        let file = std::fs::File::open(path)?;
        parse_queries(BufReader::new(file))
    }
}

/// Read queries from any buffered reader
///
/// # Errors
///
/// Returns an I/O error if reading fails.
pub fn parse_queries<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut queries = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if let Some(token) = line.split_whitespace().next() {
            queries.push(token.to_string());
        }
    }

    Ok(queries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_queries() {
        let text = "ACGT\n\n  TTGA  \nGGCC | s1:1 s2:1\r\n";
        let queries = parse_queries(text.as_bytes()).unwrap();
        assert_eq!(queries, vec!["ACGT", "TTGA", "GGCC"]);
    }

    #[test]
    fn test_parse_queries_empty() {
        let queries = parse_queries("".as_bytes()).unwrap();
        assert!(queries.is_empty());
    }

    #[test]
    fn test_read_queries_missing_file() {
        assert!(read_queries(Path::new("/nonexistent/queries.txt")).is_err());
    }
}
