//! Reply line parsing helpers.
//!
//! The channel hands back reply lines verbatim. Callers that expect a fixed
//! shape (a coordinate triple, an event record, a boolean) use these helpers
//! and surface a [`ReplyError`] when the line does not match.

use std::str::FromStr;

use arrayvec::ArrayVec;
use thiserror::Error;

use mcpi_link_types::{Vec3, FIELD_SEPARATOR, RECORD_SEPARATOR};

/// A reply line did not have the shape the caller expected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplyError {
    #[error("expected {expected} fields, got {got}: {line:?}")]
    FieldCount {
        expected: usize,
        got: usize,
        line: String,
    },

    #[error("field {field:?} is not a valid number in {line:?}")]
    Number { field: String, line: String },

    #[error("expected a boolean reply, got {line:?}")]
    Bool { line: String },
}

/// Split `line` into exactly `N` comma-separated fields.
pub fn split_fields<const N: usize>(line: &str) -> Result<ArrayVec<&str, N>, ReplyError> {
    let mut fields = ArrayVec::<&str, N>::new();
    let mut got = 0usize;
    for field in line.split(FIELD_SEPARATOR) {
        got += 1;
        // Keep counting past capacity so the error reports the real count.
        let _ = fields.try_push(field);
    }
    if got != N {
        return Err(ReplyError::FieldCount {
            expected: N,
            got,
            line: line.to_string(),
        });
    }
    Ok(fields)
}

/// Parse one field as a number.
pub fn parse_number<T: FromStr>(field: &str, line: &str) -> Result<T, ReplyError> {
    field.trim().parse::<T>().map_err(|_| ReplyError::Number {
        field: field.to_string(),
        line: line.to_string(),
    })
}

/// Parse a bare numeric reply.
pub fn parse_scalar<T: FromStr>(line: &str) -> Result<T, ReplyError> {
    parse_number(line, line)
}

/// Parse an `x,y,z` reply.
///
/// ```
/// use mcpi_link_protocol::reply::parse_vec3;
/// use mcpi_link_types::Vec3;
///
/// assert_eq!(parse_vec3::<f64>("1.5,64.0,-2").unwrap(), Vec3::new(1.5, 64.0, -2.0));
/// assert!(parse_vec3::<i32>("1,2").is_err());
/// ```
pub fn parse_vec3<T: FromStr>(line: &str) -> Result<Vec3<T>, ReplyError> {
    let f = split_fields::<3>(line)?;
    Ok(Vec3::new(
        parse_number(f[0], line)?,
        parse_number(f[1], line)?,
        parse_number(f[2], line)?,
    ))
}

/// Parse a boolean reply (`true`/`false`, `1`/`0`, case-insensitive).
pub fn parse_bool(line: &str) -> Result<bool, ReplyError> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        Ok(false)
    } else {
        Err(ReplyError::Bool {
            line: line.to_string(),
        })
    }
}

/// Non-empty `|`-separated records of a multi-record reply.
pub fn records(line: &str) -> impl Iterator<Item = &str> {
    line.split(RECORD_SEPARATOR).filter(|r| !r.is_empty())
}

/// Non-empty `,`-separated items of a list reply.
pub fn list(line: &str) -> impl Iterator<Item = &str> {
    line.split(FIELD_SEPARATOR).filter(|r| !r.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_fields_exact_count() {
        let f = split_fields::<5>("1,2,3,0,abc").unwrap();
        assert_eq!(f.as_slice(), &["1", "2", "3", "0", "abc"]);
    }

    #[test]
    fn split_fields_reports_real_count() {
        let err = split_fields::<3>("1,2,3,4,5").unwrap_err();
        assert_eq!(
            err,
            ReplyError::FieldCount {
                expected: 3,
                got: 5,
                line: "1,2,3,4,5".to_string()
            }
        );
        let err = split_fields::<3>("1").unwrap_err();
        assert!(matches!(err, ReplyError::FieldCount { got: 1, .. }));
    }

    #[test]
    fn parse_vec3_rejects_non_numbers() {
        let err = parse_vec3::<i32>("1,two,3").unwrap_err();
        assert!(matches!(err, ReplyError::Number { ref field, .. } if field == "two"));
    }

    #[test]
    fn parse_scalar_trims_whitespace() {
        assert_eq!(parse_scalar::<i32>(" 72").unwrap(), 72);
        assert_eq!(parse_scalar::<f64>("-12.5").unwrap(), -12.5);
    }

    #[test]
    fn parse_bool_variants() {
        assert!(parse_bool("True").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(!parse_bool("false").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(parse_bool("Fail").is_err());
    }

    #[test]
    fn records_skip_empty_entries() {
        let r: Vec<&str> = records("1,2,3,0,a||4,5,6,1,b|").collect();
        assert_eq!(r, vec!["1,2,3,0,a", "4,5,6,1,b"]);
        assert_eq!(records("").count(), 0);
    }

    #[test]
    fn list_skips_empty_items() {
        let l: Vec<&str> = list("stone,,dirt").collect();
        assert_eq!(l, vec!["stone", "dirt"]);
    }
}
