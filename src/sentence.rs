//! Sentence tags and field level helpers.
use std::fmt;
use std::str::FromStr;

use crate::interpreter::DecodeError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of recognized talker+type tags. Fields of a sentence are
/// positional: a field index always carries the same meaning for a given
/// kind, and an empty field means "value not available", never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SentenceKind {
    /// `$GPRMC`: recommended minimum navigation data
    Rmc,
    /// `$GPGSV`: satellites in view
    Gsv,
    /// `$GPGSA`: active satellites and dilution of precision
    Gsa,
}

impl SentenceKind {
    /// Matches the first field of a sentence against the recognized set.
    pub(crate) fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "$GPRMC" => Some(Self::Rmc),
            "$GPGSV" => Some(Self::Gsv),
            "$GPGSA" => Some(Self::Gsa),
            _ => None,
        }
    }
    /// The wire tag, `$` included.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Rmc => "$GPRMC",
            Self::Gsv => "$GPGSV",
            Self::Gsa => "$GPGSA",
        }
    }
}

impl fmt::Display for SentenceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Splits a raw line on commas. No trimming, no quote handling: NMEA fields
/// are bare tokens. Always yields at least one field.
pub(crate) fn fields(sentence: &str) -> Vec<&str> {
    sentence.split(',').collect()
}

/// Parses one non-empty field with the fixed `.`-decimal grammar of
/// [FromStr], independent of the host locale. Failures are recorded as a
/// [DecodeError::FieldParse] for that field alone.
pub(crate) fn parse_field<T: FromStr>(
    kind: SentenceKind,
    index: usize,
    value: &str,
    errors: &mut Vec<DecodeError>,
) -> Option<T> {
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.push(DecodeError::FieldParse {
                kind,
                index,
                value: value.to_string(),
            });
            None
        },
    }
}

/// Verifies the sentence is long enough for every required field index,
/// before any indexed access. The first absent index is recorded as a
/// [DecodeError::MalformedSentence].
pub(crate) fn check_len(
    fields: &[&str],
    kind: SentenceKind,
    required: &[usize],
    errors: &mut Vec<DecodeError>,
) -> bool {
    for &index in required {
        if index >= fields.len() {
            errors.push(DecodeError::MalformedSentence { kind, index });
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_recognition() {
        assert_eq!(SentenceKind::from_tag("$GPRMC"), Some(SentenceKind::Rmc));
        assert_eq!(SentenceKind::from_tag("$GPGSV"), Some(SentenceKind::Gsv));
        assert_eq!(SentenceKind::from_tag("$GPGSA"), Some(SentenceKind::Gsa));
        assert_eq!(SentenceKind::from_tag("$GPGGA"), None);
        assert_eq!(SentenceKind::from_tag("GPRMC"), None);
        assert_eq!(SentenceKind::from_tag(""), None);
    }

    #[test]
    fn splitting_preserves_empty_fields() {
        assert_eq!(fields("$GPRMC,,V,"), vec!["$GPRMC", "", "V", ""]);
        assert_eq!(fields(""), vec![""]);
    }

    #[test]
    fn length_check_reports_first_absent_index() {
        let mut errors = Vec::new();
        let split = fields("$GPRMC,123519,A,4807.038,N");
        assert!(check_len(&split, SentenceKind::Rmc, &[1, 2], &mut errors));
        assert!(errors.is_empty());

        assert!(!check_len(&split, SentenceKind::Rmc, &[3, 4, 5, 6], &mut errors));
        assert_eq!(
            errors,
            vec![DecodeError::MalformedSentence {
                kind: SentenceKind::Rmc,
                index: 5,
            }],
        );
    }
}
