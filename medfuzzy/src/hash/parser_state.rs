// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2025 medfuzzy developers

use crate::macros::impl_error;


/// An enumeration representing a cause of
/// a [fuzzy hash](crate::FuzzyHash) parse error.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The separator (`:`) does not appear exactly once.
    InvalidFormat,
    /// The digest is not a valid hexadecimal string.
    InvalidDigest,
    /// The tolerance is not a valid decimal integer.
    InvalidTolerance,
}

impl core::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self { // grcov-excl-br-line:MATCH_ENUM
            ParseErrorKind::InvalidFormat    => "separator ':' must appear exactly once",
            ParseErrorKind::InvalidDigest    => "digest is not a valid hexadecimal string",
            ParseErrorKind::InvalidTolerance => "tolerance is not a valid integer",
        })
    }
}


// grcov-excl-br-start:STRUCT_MEMBER

/// The error type for parse operations of [`FuzzyHash`](crate::FuzzyHash).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError(
    pub(crate) ParseErrorKind,
    pub(crate) usize
);

// grcov-excl-br-end

/// The trait implementing a [`FuzzyHash`](crate::FuzzyHash) parse error.
pub trait ParseErrorInfo {
    /// Returns the cause of the error.
    fn kind(&self) -> ParseErrorKind;
    /// Returns the offset which (possibly) caused the error.
    ///
    /// Note that this offset may not be exact but may be usable as a hint.
    fn offset(&self) -> usize;
}

impl ParseErrorInfo for ParseError {
    fn kind(&self) -> ParseErrorKind { self.0 }
    fn offset(&self) -> usize { self.1 }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "error occurred while parsing a fuzzy hash (at byte offset {1}): {0}",
            self.kind(),
            self.offset()
        )
    }
}

impl_error!(ParseError {});


/// Finds the separator and splits the string into the digest and
/// the tolerance parts.
///
/// On success, it returns both parts and the offset of the tolerance part.
pub(crate) fn split_fields(str: &[u8]) -> Result<(&[u8], &[u8], usize), ParseError> {
    let separator = match str.iter().position(|&ch| ch == b':') {
        Some(index) => index,
        None => return Err(ParseError(ParseErrorKind::InvalidFormat, str.len())),
    };
    let (digest, rest) = str.split_at(separator);
    let tolerance = &rest[1..];
    if let Some(index) = tolerance.iter().position(|&ch| ch == b':') {
        return Err(ParseError(ParseErrorKind::InvalidFormat, separator + 1 + index));
    }
    Ok((digest, tolerance, separator + 1))
}

/// Decodes the digest part.
pub(crate) fn parse_digest(digest: &[u8]) -> Result<alloc::vec::Vec<u8>, ParseError> {
    hex::decode(digest).map_err(|err| {
        let offset = match err {
            hex::FromHexError::InvalidHexCharacter { index, .. } => index,
            hex::FromHexError::OddLength => digest.len(),
            hex::FromHexError::InvalidStringLength => 0,
        };
        ParseError(ParseErrorKind::InvalidDigest, offset)
    })
}

/// Parses the tolerance part (starting at `offset` of the whole string).
pub(crate) fn parse_tolerance(tolerance: &[u8], offset: usize) -> Result<i64, ParseError> {
    core::str::from_utf8(tolerance)
        .ok()
        .and_then(|value| value.parse::<i64>().ok())
        .ok_or(ParseError(ParseErrorKind::InvalidTolerance, offset))
}





// grcov-excl-br-stop
