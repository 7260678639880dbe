#![allow(clippy::module_name_repetitions)]

/// Why a string failed to parse as a [`crate::UUID`].
///
/// Every rejection carries enough detail (position, offending character) to
/// report a useful message rather than a bare "invalid UUID".
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidParseError {
    #[error("UUID string has the wrong length")]
    InvalidLength,

    #[error("invalid character {ch:?} at position {idx}")]
    InvalidCharacter { ch: char, idx: usize },

    #[error("hyphen in the wrong position")]
    InvalidHyphenPlacement,

    #[error("unbalanced braces")]
    InvalidBraces,
}

/// Why an explicit-timestamp UUID constructor (`v1_at`/`v6_at`/`v7_at`)
/// failed. Never produced by the process-clock-driven generators, whose
/// timestamps are always already in range.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidConstructionError {
    #[error("the timestamp provided is before the representable epoch")]
    TimestampBeforeEpoch,

    #[error("the timestamp provided overflows the timestamp field")]
    TimestampOverflow,
}

/// The `name` argument to a v3/v5 constructor could not be coerced to bytes.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no byte representation for this name")]
pub struct InvalidNameError;

/// Why a Flake's 32-character encoding failed to decode.
///
/// Never surfaced on the public API: [`crate::Flake::from_string`] collapses
/// this to `None` instead of returning a `Result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlakeDecodeError {
    InvalidLength,
    InvalidCharacter(usize),
}
