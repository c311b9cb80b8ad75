//! The decoder core.
//!
//! A destination tells the decoder what it is through [`Decode::slot`] and may
//! take over decoding entirely through one of the hook traits. The entry points
//! probe the hooks in this order, first match wins:
//!
//! | Entry point | Probes |
//! |-------------|--------|
//! | [`parse`]   | [`ParseStr`], [`UnmarshalText`], [`ParseText`], built-in |
//! | [`decode`]  | [`UnmarshalText`], [`ParseText`], built-in |
//! | indirection | [`ParseText`], built-in |
//!
//! The built-in strategies are:
//!
//! | Destination | Accepted text |
//! |-------------|---------------|
//! | `OffsetDateTime` | RFC 3339, e.g. `0001-02-03T04:05:06Z` |
//! | `bool` | exactly `true` or `false` |
//! | `i8` ... `i128`, `isize` | base-10, optional sign, range-checked |
//! | `u8` ... `u128`, `usize` | base-10, range-checked |
//! | `f32`, `f64` | base-10 float literal that fits the target precision |
//! | `String` | anything, copied |
//! | `Option<T>`, `Box<T>` | whatever `T` accepts |
//!
//! Anything else fails with [`Error::Unsupported`]. A failed decode never
//! writes to the destination.

use tracing::{debug, trace};

use crate::util::{
    cold_path, lossy, parse_bool, parse_date_time, parse_float, parse_number, view,
};
use crate::{Error, NotSettableReason, Result, Slot};

/// A type that text can be decoded into.
///
/// Implementations describe their storage with [`slot`](Decode::slot) and may
/// expose hooks that replace the built-in strategy.
///
/// # Example
///
/// A type that stores an integer but accepts its own notation:
///
/// ```
/// use untext::{Decode, Error, ParseText, Result, Slot, parse};
///
/// #[derive(Default)]
/// struct Percent(i64);
///
/// impl ParseText for Percent {
///     fn parse_text(&mut self, input: &[u8]) -> Result<()> {
///         let digits = input.strip_suffix(b"%").ok_or_else(|| Error::custom("missing %"))?;
///         let mut value = 0i64;
///         untext::decode(digits, &mut value)?;
///         self.0 = value;
///         Ok(())
///     }
/// }
///
/// impl Decode for Percent {
///     fn slot(&mut self) -> Slot<'_> {
///         Slot::I64(&mut self.0)
///     }
///
///     fn text_hook(&mut self) -> Option<&mut dyn ParseText> {
///         Some(self)
///     }
/// }
///
/// let mut percent = Percent::default();
/// parse("42%", &mut percent).unwrap();
/// assert_eq!(percent.0, 42);
/// assert!(parse("42", &mut percent).is_err());
/// ```
pub trait Decode {
    /// Typed access to the storage the built-in strategies write into.
    fn slot(&mut self) -> Slot<'_>;

    /// Name used in error messages.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Custom hook over raw text, checked at every level.
    fn text_hook(&mut self) -> Option<&mut dyn ParseText> {
        None
    }

    /// Custom hook over a string, checked by [`parse`] only.
    fn str_hook(&mut self) -> Option<&mut dyn ParseStr> {
        None
    }

    /// Standard self-decoding capability, checked at the outermost entry only.
    fn unmarshaler(&mut self) -> Option<&mut dyn UnmarshalText> {
        None
    }
}

/// Parses raw text into `self`, replacing the built-in strategy.
pub trait ParseText {
    /// Receives the raw input, at the outermost level and behind indirection.
    fn parse_text(&mut self, input: &[u8]) -> Result<()>;
}

/// Parses a string into `self`, replacing every other strategy in [`parse`].
pub trait ParseStr {
    /// Receives the string given to [`parse`], including each element of a slice.
    fn parse_str(&mut self, input: &str) -> Result<()>;
}

/// The standard way a type decodes itself from text.
///
/// Every [`FromStr`](std::str::FromStr) type whose error is displayable has
/// this capability. Rejections become [`Error::InvalidText`].
pub trait UnmarshalText {
    /// Receives the raw input when `self` is the destination of an entry point.
    fn unmarshal_text(&mut self, input: &[u8]) -> Result<()>;
}

impl<T> UnmarshalText for T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    fn unmarshal_text(&mut self, input: &[u8]) -> Result<()> {
        let text = view(input)?;
        *self = text.parse::<T>().map_err(|err| {
            cold_path();
            Error::InvalidText {
                input: text.to_owned(),
                message: err.to_string(),
            }
        })?;
        Ok(())
    }
}

/// The value the decoder allocates before decoding into new storage.
///
/// Needed by indirection targets and sequence elements. The zero value is
/// never observable: it is either overwritten or dropped.
pub trait Zero {
    fn zero() -> Self;
}

/// A wrapper that owns freshly allocated storage for its target.
pub trait Indirect {
    /// Decodes into a new zero value and attaches it only on success.
    fn decode_indirect(&mut self, input: &[u8]) -> Result<()>;
}

impl<T: Decode + Zero> Indirect for Option<T> {
    fn decode_indirect(&mut self, input: &[u8]) -> Result<()> {
        let mut value = T::zero();
        decode_value(input, &mut value)?;
        *self = Some(value);
        Ok(())
    }
}

impl<T: Decode + Zero> Indirect for Box<T> {
    fn decode_indirect(&mut self, input: &[u8]) -> Result<()> {
        let mut value = Box::new(T::zero());
        decode_value(input, &mut *value)?;
        *self = value;
        Ok(())
    }
}

/// A destination as received by an entry point.
pub enum Handle<'a> {
    Settable(&'a mut dyn Decode),
    NotSettable {
        type_name: &'static str,
        reason: NotSettableReason,
    },
}

/// Anything that can be turned into a [`Handle`].
///
/// `&mut T` is settable. `&T` and `None` are accepted so that misuse surfaces
/// as [`Error::NotSettable`] instead of a compile error at dynamic call sites.
pub trait Destination<'a> {
    fn into_handle(self) -> Handle<'a>;
}

impl<'a> Destination<'a> for Handle<'a> {
    #[inline]
    fn into_handle(self) -> Handle<'a> {
        self
    }
}

impl<'a, T: Decode> Destination<'a> for &'a mut T {
    #[inline]
    fn into_handle(self) -> Handle<'a> {
        Handle::Settable(self)
    }
}

impl<'a, T: Decode> Destination<'a> for &'a T {
    #[inline]
    fn into_handle(self) -> Handle<'a> {
        Handle::NotSettable {
            type_name: self.type_name(),
            reason: NotSettableReason::ReadOnly,
        }
    }
}

impl<'a, T: Decode> Destination<'a> for Option<&'a mut T> {
    #[inline]
    fn into_handle(self) -> Handle<'a> {
        match self {
            Some(dest) => Handle::Settable(dest),
            None => Handle::NotSettable {
                type_name: std::any::type_name::<T>(),
                reason: NotSettableReason::Nil,
            },
        }
    }
}

pub(crate) fn settable<'a>(dest: impl Destination<'a>) -> Result<&'a mut dyn Decode> {
    match dest.into_handle() {
        Handle::Settable(dest) => Ok(dest),
        Handle::NotSettable { type_name, reason } => {
            cold_path();
            Err(Error::NotSettable { type_name, reason })
        }
    }
}

/// Decodes raw text into `dest`.
///
/// # Example
///
/// ```
/// let mut num = 0u16;
/// untext::decode(b"8080", &mut num).unwrap();
/// assert_eq!(num, 8080);
///
/// assert!(untext::decode(b"65536", &mut num).unwrap_err().is_parse_error());
/// assert_eq!(num, 8080);
/// ```
///
/// # Errors
///
/// - [`Error::NotSettable`] if `dest` cannot be written through
/// - [`Error::Unsupported`] if the destination type has no strategy
/// - a parse error if the text does not fit the destination type
/// - whatever a hook returns, unchanged
pub fn decode<'a>(input: impl AsRef<[u8]>, dest: impl Destination<'a>) -> Result<()> {
    let dest = settable(dest)?;
    decode_outermost(input.as_ref(), dest)
}

/// Decodes a string into `dest`.
///
/// Behaves like [`decode`], but a destination with a [`ParseStr`] hook gets the
/// string directly.
///
/// # Example
///
/// ```
/// use time::OffsetDateTime;
///
/// let mut num = 0i64;
/// untext::parse("10", &mut num).unwrap();
/// assert_eq!(num, 10);
///
/// let mut inst = OffsetDateTime::UNIX_EPOCH;
/// untext::parse("0001-02-03T04:05:06Z", &mut inst).unwrap();
/// assert_eq!(inst.year(), 1);
/// ```
pub fn parse<'a>(input: &str, dest: impl Destination<'a>) -> Result<()> {
    let dest = settable(dest)?;
    let type_name = dest.type_name();
    if let Some(hook) = dest.str_hook() {
        trace!(type_name, "delegating to string hook");
        return hook.parse_str(input);
    }
    decode_outermost(input.as_bytes(), dest)
}

fn decode_outermost(input: &[u8], dest: &mut dyn Decode) -> Result<()> {
    let type_name = dest.type_name();
    if let Some(unmarshaler) = dest.unmarshaler() {
        trace!(type_name, "delegating to standard text decoding");
        return unmarshaler.unmarshal_text(input);
    }
    decode_value(input, dest)
}

/// Hook-then-built-in dispatch shared by the entry points and indirection.
pub(crate) fn decode_value(input: &[u8], dest: &mut dyn Decode) -> Result<()> {
    let type_name = dest.type_name();
    if let Some(hook) = dest.text_hook() {
        trace!(type_name, "delegating to text hook");
        return hook.parse_text(input);
    }

    let slot = dest.slot();
    let kind = slot.kind();
    let result = match slot {
        Slot::DateTime(dest) => view(input)
            .and_then(parse_date_time)
            .map(|value| *dest = value),
        Slot::Bool(dest) => view(input).and_then(parse_bool).map(|value| *dest = value),
        Slot::I8(dest) => store(input, dest),
        Slot::I16(dest) => store(input, dest),
        Slot::I32(dest) => store(input, dest),
        Slot::I64(dest) => store(input, dest),
        #[cfg(feature = "i128")]
        Slot::I128(dest) => store(input, dest),
        Slot::Isize(dest) => store(input, dest),
        Slot::U8(dest) => store(input, dest),
        Slot::U16(dest) => store(input, dest),
        Slot::U32(dest) => store(input, dest),
        Slot::U64(dest) => store(input, dest),
        #[cfg(feature = "i128")]
        Slot::U128(dest) => store(input, dest),
        Slot::Usize(dest) => store(input, dest),
        Slot::F32(dest) => view(input).and_then(parse_float::<f32>).map(|value| *dest = value),
        Slot::F64(dest) => view(input).and_then(parse_float::<f64>).map(|value| *dest = value),
        Slot::String(dest) => view(input).map(|text| *dest = text.to_owned()),
        Slot::Indirect(dest) => return dest.decode_indirect(input),
        Slot::Sequence(_) | Slot::Other => {
            cold_path();
            Err(Error::Unsupported {
                type_name,
                input: lossy(input),
            })
        }
    };

    if let Err(error) = &result {
        debug!(type_name, ?kind, %error, "built-in decoding failed");
    }
    result
}

fn store<T>(input: &[u8], dest: &mut T) -> Result<()>
where
    T: std::str::FromStr,
    crate::NumberError: From<T::Err>,
{
    *dest = parse_number(view(input)?)?;
    Ok(())
}
