//! Serde deserializer over a single text value.
//!
//! This module provides a [`serde::Deserializer`] implementation that produces
//! Rust values from one piece of text, following the same rules as
//! [`decode`](crate::decode). The type being deserialized drives the parse: a
//! `u16` asks for a range-checked base-10 number, a `bool` for `true` or
//! `false`, and so on.
//!
//! # Quick Start
//!
//! ```
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! #[serde(rename_all = "lowercase")]
//! enum Mode {
//!     Read,
//!     Write,
//! }
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Port(u16);
//!
//! let mode: Mode = untext::de::from_str("write").unwrap();
//! assert_eq!(mode, Mode::Write);
//!
//! let port: Port = untext::de::from_str("8080").unwrap();
//! assert_eq!(port, Port(8080));
//! ```
//!
//! # Text to Rust Type Mapping
//!
//! | Rust Types | Accepted text |
//! |------------|---------------|
//! | `bool` | `true`, `false` |
//! | `i8` ... `i128`, `u8` ... `u128` | base-10, range-checked |
//! | `f32`, `f64` | float literal within range |
//! | `char` | exactly one character |
//! | `&str`, `String` | anything |
//! | `Option<T>` | always `Some`, whatever `T` accepts |
//! | `()`, unit structs | the empty string |
//! | newtype structs | whatever the inner type accepts |
//! | enums | the name of a unit variant |
//!
//! Sequences, tuples, maps and structs with fields are not text and fail with
//! [`Error::Unsupported`].
//!
//! [`Error::Unsupported`]: crate::Error::Unsupported

use serde::{
    Deserialize,
    de::{self, DeserializeOwned, IntoDeserializer, value::StrDeserializer},
};

use crate::util::{cold_path, parse_bool, parse_char, parse_float, parse_number, view};
use crate::{Decode, Error, ParseText, Result, Slot, Zero};

/// Text deserializer implementing [`serde::Deserializer`].
///
/// # Example
///
/// ```
/// use serde::Deserialize;
/// use untext::de::Deserializer;
///
/// let mut de = Deserializer::new("-12");
/// let value = i32::deserialize(&mut de).unwrap();
/// assert_eq!(value, -12);
/// ```
///
/// For most use cases, prefer the convenience functions [`from_str`] and
/// [`from_slice`].
pub struct Deserializer<'de> {
    input: &'de str,
}

impl<'de> Deserializer<'de> {
    pub fn new(input: &'de str) -> Self {
        Self { input }
    }

    fn unsupported(&self, type_name: &'static str) -> Error {
        cold_path();
        Error::Unsupported {
            type_name,
            input: self.input.to_owned(),
        }
    }
}

/// Deserialize a value from text.
///
/// # Errors
///
/// Returns a parse error if the text does not fit `T`, and
/// [`Error::Unsupported`](crate::Error::Unsupported) if `T` is an aggregate.
pub fn from_str<'de, T>(input: &'de str) -> Result<T>
where
    T: Deserialize<'de>,
{
    let mut deserializer = Deserializer::new(input);
    T::deserialize(&mut deserializer)
}

/// Deserialize a value from bytes holding UTF-8 text.
///
/// # Errors
///
/// Same as [`from_str`], plus [`Error::InvalidUtf8`](crate::Error::InvalidUtf8).
pub fn from_slice<'de, T>(input: &'de [u8]) -> Result<T>
where
    T: Deserialize<'de>,
{
    from_str(view(input)?)
}

macro_rules! deserialize_number {
    ($($method:ident => $visit:ident : $ty:ty),* $(,)?) => {
        $(
            fn $method<V>(self, visitor: V) -> std::result::Result<V::Value, Self::Error>
            where
                V: de::Visitor<'de>,
            {
                visitor.$visit(parse_number::<$ty>(self.input)?)
            }
        )*
    };
}

impl<'de> de::Deserializer<'de> for &mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.input)
    }

    fn deserialize_bool<V>(self, visitor: V) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_bool(parse_bool(self.input)?)
    }

    deserialize_number! {
        deserialize_i8 => visit_i8: i8,
        deserialize_i16 => visit_i16: i16,
        deserialize_i32 => visit_i32: i32,
        deserialize_i64 => visit_i64: i64,
        deserialize_u8 => visit_u8: u8,
        deserialize_u16 => visit_u16: u16,
        deserialize_u32 => visit_u32: u32,
        deserialize_u64 => visit_u64: u64,
    }

    fn deserialize_f32<V>(self, visitor: V) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_f32(parse_float(self.input)?)
    }

    fn deserialize_f64<V>(self, visitor: V) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_f64(parse_float(self.input)?)
    }

    #[cfg(feature = "i128")]
    deserialize_number! {
        deserialize_i128 => visit_i128: i128,
        deserialize_u128 => visit_u128: u128,
    }

    fn deserialize_char<V>(self, visitor: V) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_char(parse_char(self.input)?)
    }

    fn deserialize_str<V>(self, visitor: V) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.input)
    }

    fn deserialize_string<V>(self, visitor: V) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_string(self.input.to_owned())
    }

    fn deserialize_bytes<V>(self, visitor: V) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_bytes(self.input.as_bytes())
    }

    fn deserialize_byte_buf<V>(self, visitor: V) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_byte_buf(self.input.as_bytes().to_vec())
    }

    fn deserialize_option<V>(self, visitor: V) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_unit<V>(self, visitor: V) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        if self.input.is_empty() {
            visitor.visit_unit()
        } else {
            Err(self.unsupported("()"))
        }
    }

    fn deserialize_unit_struct<V>(
        self,
        name: &'static str,
        visitor: V,
    ) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        if self.input.is_empty() {
            visitor.visit_unit()
        } else {
            Err(self.unsupported(name))
        }
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V>(self, _visitor: V) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        Err(self.unsupported("sequence"))
    }

    fn deserialize_tuple<V>(
        self,
        _len: usize,
        _visitor: V,
    ) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        Err(self.unsupported("tuple"))
    }

    fn deserialize_tuple_struct<V>(
        self,
        name: &'static str,
        _len: usize,
        _visitor: V,
    ) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        Err(self.unsupported(name))
    }

    fn deserialize_map<V>(self, _visitor: V) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        Err(self.unsupported("map"))
    }

    fn deserialize_struct<V>(
        self,
        name: &'static str,
        _fields: &'static [&'static str],
        _visitor: V,
    ) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        Err(self.unsupported(name))
    }

    /// Only unit variants can be named by plain text.
    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        let variant: StrDeserializer<'_, Error> = self.input.into_deserializer();
        visitor.visit_enum(variant)
    }

    fn deserialize_identifier<V>(self, visitor: V) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_borrowed_str(self.input)
    }

    fn deserialize_ignored_any<V>(self, visitor: V) -> std::result::Result<V::Value, Self::Error>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn is_human_readable(&self) -> bool {
        true
    }
}

/// A destination for any [`Deserialize`] type.
///
/// Decoding into `Serde<T>` runs [`from_slice`] through a text hook, so the
/// wrapper composes with `Option`, `Box` and [`decode_slice`](crate::decode_slice).
///
/// # Example
///
/// ```
/// use serde::Deserialize;
/// use untext::Serde;
///
/// #[derive(Deserialize, Default, Debug, PartialEq)]
/// #[serde(rename_all = "lowercase")]
/// enum Color {
///     #[default]
///     Red,
///     Green,
/// }
///
/// let mut colors: Vec<Serde<Color>> = Vec::new();
/// untext::decode_slice(&["green", "red"], &mut colors).unwrap();
/// assert_eq!(colors, [Serde(Color::Green), Serde(Color::Red)]);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Serde<T>(pub T);

impl<T: DeserializeOwned> ParseText for Serde<T> {
    fn parse_text(&mut self, input: &[u8]) -> Result<()> {
        self.0 = from_slice(input)?;
        Ok(())
    }
}

impl<T: DeserializeOwned> Decode for Serde<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Other
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn text_hook(&mut self) -> Option<&mut dyn ParseText> {
        Some(self)
    }
}

impl<T: Default> Zero for Serde<T> {
    fn zero() -> Self {
        Serde(T::default())
    }
}
