//! Decode arbitrary text into typed destinations.
//!
//! `untext` is the counterpart of [`Display`](std::fmt::Display): given some
//! text and a mutable reference, it parses the text according to the type of
//! the reference and writes the result.
//!
//! ```
//! use time::OffsetDateTime;
//!
//! let mut num = 0i64;
//! untext::parse("10", &mut num).unwrap();
//! assert_eq!(num, 10);
//!
//! let mut inst = OffsetDateTime::UNIX_EPOCH;
//! untext::parse("0001-02-03T04:05:06Z", &mut inst).unwrap();
//! assert_eq!(inst.second(), 6);
//!
//! let mut nums: Vec<i64> = Vec::new();
//! untext::decode_slice(&["10", "20"], &mut nums).unwrap();
//! assert_eq!(nums, [10, 20]);
//! ```
//!
//! Types outside the built-in set take part by implementing [`Decode`],
//! usually together with one of the hooks [`ParseText`] or [`ParseStr`], or
//! through [`decode_via_from_str!`] when they already implement
//! [`FromStr`](std::str::FromStr). With the `serde` feature, any
//! `Deserialize` type can be decoded through [`Serde`].

mod decode;
#[cfg(feature = "serde")]
pub mod de;
mod error;
mod impls;
mod kind;
mod slice;
mod util;

pub use decode::*;
#[cfg(feature = "serde")]
pub use de::Serde;
pub use error::*;
pub use kind::*;
pub use slice::*;
