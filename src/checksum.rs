//! NMEA checksum utility.
//!
//! Not wired into the dispatch path by default: many transports already
//! guarantee line integrity. Call [is_valid] as a pre-check, or set
//! [crate::Config::require_checksum] to enforce it on every sentence.

/// Computes the checksum of a sentence: the XOR fold of every byte strictly
/// between the `$` and the `*` delimiter, as two uppercase hex digits.
/// A sentence with nothing between the delimiters yields `"00"`.
pub fn checksum(sentence: &str) -> String {
    let mut sum = 0u8;
    for byte in sentence.bytes() {
        match byte {
            b'$' => {},
            b'*' => break,
            byte => sum ^= byte,
        }
    }
    format!("{:02X}", sum)
}

/// Returns true if the text after the first `*` matches the computed
/// checksum. The hex comparison is case sensitive; a sentence carrying no
/// `*` trailer never validates.
pub fn is_valid(sentence: &str) -> bool {
    match sentence.split_once('*') {
        Some((_, appended)) => appended == checksum(sentence),
        None => false,
    }
}
