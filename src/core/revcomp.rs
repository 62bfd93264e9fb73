//! Nucleotide reverse complement.

/// Complement a single base. `A`/`T` and `C`/`G` are swapped; any other byte,
/// including lowercase bases and `N`, is returned unchanged.
#[inline]
#[must_use]
pub const fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

/// Reverse complement a nucleotide string.
///
/// Only uppercase `ACGT` are complemented. Every other character passes
/// through in its reversed position, so the function is total and
/// `reverse_complement(&reverse_complement(s)) == s` for any input.
///
/// # Examples
///
/// ```
/// use map_strings::core::revcomp::reverse_complement;
///
/// assert_eq!(reverse_complement("AACG"), "CGTT");
/// assert_eq!(reverse_complement("ANt"), "tNT");
/// assert_eq!(reverse_complement(""), "");
/// ```
#[must_use]
pub fn reverse_complement(seq: &str) -> String {
    // Multi-byte characters are reversed as whole chars; only ASCII bases change.
    seq.chars()
        .rev()
        .map(|c| {
            if c.is_ascii() {
                complement(c as u8) as char
            } else {
                c
            }
        })
        .collect()
}
