//! Pair extraction
//!
//! Pulls the key code and the code point out of a definition line. The search
//! patterns are independent of the classifier's: the first word starting with
//! `0x` is the key code, the first `U+` run is the code point.

use crate::error::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static CODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b0x[0-9a-f]+").unwrap());
static CODE_POINT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"U\+([0-9A-F]{4,6})").unwrap());

/// A key code and its code point, both as C hex literals (`0x0100`, `0x00C1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtractedPair {
    pub code: String,
    pub codepoint: String,
}

impl ExtractedPair {
    /// Numeric value of the key code. Only used for diagnostics; the text is
    /// what ends up in generated source.
    pub fn code_value(&self) -> Option<u32> {
        parse_hex_literal(&self.code)
    }

    pub fn codepoint_value(&self) -> Option<u32> {
        parse_hex_literal(&self.codepoint)
    }
}

impl fmt::Display for ExtractedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.code, self.codepoint)
    }
}

fn parse_hex_literal(literal: &str) -> Option<u32> {
    u32::from_str_radix(literal.strip_prefix("0x")?, 16).ok()
}

/// Extract the pair from a line the classifier already accepted.
///
/// Prefer [`crate::Classifier::try_parse`], which guarantees that precondition.
pub fn extract_pair(line: &str) -> Result<ExtractedPair, ExtractError> {
    let code = CODE_REGEX
        .find(line)
        .ok_or_else(|| ExtractError::MissingCode {
            line: line.trim_end().to_string(),
        })?;
    let digits = CODE_POINT_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| ExtractError::MissingCodePoint {
            line: line.trim_end().to_string(),
        })?;

    Ok(ExtractedPair {
        code: code.as_str().to_string(),
        codepoint: format!("0x{}", digits.as_str()),
    })
}
