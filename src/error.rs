//! Error types for text decoding.
//!
//! This module contains the [`Error`] type which represents all possible errors
//! that can occur when decoding text into a destination. Every error belongs to
//! one of the categories of [`ErrorKind`]:
//!
//! - [`ErrorKind::Type`]: the destination itself is unusable (a read-only or
//!   missing reference, a non-sequence passed to [`decode_slice`], or a type
//!   with no decoding strategy). These are programming errors.
//! - [`ErrorKind::Parse`]: the text does not match what the destination type
//!   expects. The offending input is always kept for diagnostics.
//! - [`ErrorKind::Custom`]: a message produced by a user hook or by serde.
//!
//! # Example
//!
//! ```
//! use untext::{parse, Error, ErrorKind};
//!
//! let mut flag = false;
//! match parse("yes", &mut flag) {
//!     Err(Error::InvalidBool(input)) => assert_eq!(input, "yes"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//!
//! let mut num = 0i64;
//! let err = parse("abc", &mut num).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Parse);
//! assert_eq!(err.input(), Some("abc"));
//! ```
//!
//! [`decode_slice`]: crate::decode_slice

use std::fmt::{self, Display};
use std::num::{ParseFloatError, ParseIntError};
use std::str::Utf8Error;

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ErrorKind {
    /// The destination cannot be decoded into.
    Type,
    /// The input text is invalid for the destination type.
    Parse,
    /// Produced by a hook or by serde.
    Custom,
}

/// Why a destination handle is not settable.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NotSettableReason {
    /// A shared reference was passed where a mutable one is required.
    ReadOnly,
    /// No reference was passed at all.
    Nil,
}

/// The underlying failure of a numeric parse.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum NumberError {
    Int(ParseIntError),
    Float(ParseFloatError),
    /// A finite float literal that overflows the target width.
    FloatRange,
}

impl From<ParseIntError> for NumberError {
    fn from(error: ParseIntError) -> Self {
        NumberError::Int(error)
    }
}

impl From<ParseFloatError> for NumberError {
    fn from(error: ParseFloatError) -> Self {
        NumberError::Float(error)
    }
}

impl Display for NumberError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NumberError::Int(error) => Display::fmt(error, formatter),
            NumberError::Float(error) => Display::fmt(error, formatter),
            NumberError::FloatRange => {
                formatter.write_str("number too large to fit in target type")
            }
        }
    }
}

/// This type represents all possible errors that can occur when decoding text.
#[derive(Debug)]
pub enum Error {
    /// A free-form message, returned by hooks and by serde `Deserialize` impls.
    Message(String),

    /// The destination handle cannot be written through.
    ///
    /// Returned before any parsing is attempted.
    NotSettable {
        type_name: &'static str,
        reason: NotSettableReason,
    },

    /// [`decode_slice`](crate::decode_slice) was given a destination that is
    /// not a sequence.
    NotSequence { type_name: &'static str },

    /// The destination type has no decoding strategy.
    ///
    /// Aggregates (vectors through the single-value entry points, structs,
    /// maps) end up here.
    Unsupported {
        type_name: &'static str,
        input: String,
    },

    /// The input is neither `true` nor `false`.
    InvalidBool(String),

    /// The input is not a base-10 number that fits the destination.
    InvalidNumber { input: String, source: NumberError },

    /// The input is not an RFC 3339 date-time.
    InvalidDateTime {
        input: String,
        source: time::error::Parse,
    },

    /// Byte input destined for text is not valid UTF-8.
    ///
    /// `input` holds a lossy rendering of the bytes.
    InvalidUtf8 { input: String, source: Utf8Error },

    /// The input is not exactly one character.
    InvalidChar(String),

    /// The destination's own `FromStr` rejected the input.
    InvalidText { input: String, message: String },
}

impl Error {
    /// Builds an [`Error::Message`], for use in hooks.
    pub fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Message(_) => ErrorKind::Custom,
            Error::NotSettable { .. } | Error::NotSequence { .. } | Error::Unsupported { .. } => {
                ErrorKind::Type
            }
            Error::InvalidBool(_)
            | Error::InvalidNumber { .. }
            | Error::InvalidDateTime { .. }
            | Error::InvalidUtf8 { .. }
            | Error::InvalidChar(_)
            | Error::InvalidText { .. } => ErrorKind::Parse,
        }
    }

    /// Returns `true` for errors about the destination rather than the input.
    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    /// Returns `true` for errors about the input text.
    pub fn is_parse_error(&self) -> bool {
        self.kind() == ErrorKind::Parse
    }

    /// The original input text, when the error carries it.
    pub fn input(&self) -> Option<&str> {
        match self {
            Error::Unsupported { input, .. }
            | Error::InvalidNumber { input, .. }
            | Error::InvalidDateTime { input, .. }
            | Error::InvalidUtf8 { input, .. }
            | Error::InvalidText { input, .. } => Some(input.as_str()),
            Error::InvalidBool(input) | Error::InvalidChar(input) => Some(input.as_str()),
            Error::Message(_) | Error::NotSettable { .. } | Error::NotSequence { .. } => None,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Message(message) => formatter.write_str(message),
            Error::NotSettable {
                type_name,
                reason: NotSettableReason::ReadOnly,
            } => write!(
                formatter,
                "expected a mutable reference, got a shared reference to `{type_name}`"
            ),
            Error::NotSettable {
                type_name,
                reason: NotSettableReason::Nil,
            } => write!(
                formatter,
                "expected a mutable reference, got no reference to `{type_name}`"
            ),
            Error::NotSequence { type_name } => {
                write!(formatter, "expected a sequence, got `{type_name}`")
            }
            Error::Unsupported { type_name, input } => {
                write!(formatter, "cannot decode {input:?} into type `{type_name}`")
            }
            Error::InvalidBool(input) => write!(formatter, "cannot decode {input:?} as bool"),
            Error::InvalidNumber { input, source } => {
                write!(formatter, "failed to decode {input:?}: {source}")
            }
            Error::InvalidDateTime { input, source } => {
                write!(formatter, "failed to decode {input:?}: {source}")
            }
            Error::InvalidUtf8 { input, source } => {
                write!(formatter, "failed to decode {input:?}: {source}")
            }
            Error::InvalidChar(input) => {
                write!(formatter, "cannot decode {input:?} as a single character")
            }
            Error::InvalidText { input, message } => {
                write!(formatter, "failed to decode {input:?}: {message}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidNumber {
                source: NumberError::Int(error),
                ..
            } => Some(error),
            Error::InvalidNumber {
                source: NumberError::Float(error),
                ..
            } => Some(error),
            Error::InvalidDateTime { source, .. } => Some(source),
            Error::InvalidUtf8 { source, .. } => Some(source),
            _ => None,
        }
    }
}
