use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4};

use time::OffsetDateTime;

use crate::{Decode, Slot, Zero};

macro_rules! impl_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Decode for $ty {
                #[inline]
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$variant(self)
                }
            }

            impl Zero for $ty {
                #[inline]
                fn zero() -> Self {
                    <$ty>::default()
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => String,
}

#[cfg(feature = "i128")]
impl_primitive! {
    i128 => I128,
    u128 => U128,
}

impl Decode for OffsetDateTime {
    #[inline]
    fn slot(&mut self) -> Slot<'_> {
        Slot::DateTime(self)
    }
}

impl Zero for OffsetDateTime {
    #[inline]
    fn zero() -> Self {
        OffsetDateTime::UNIX_EPOCH
    }
}

impl<T: Decode + Zero> Decode for Option<T> {
    #[inline]
    fn slot(&mut self) -> Slot<'_> {
        Slot::Indirect(self)
    }
}

impl<T> Zero for Option<T> {
    #[inline]
    fn zero() -> Self {
        None
    }
}

impl<T: Decode + Zero> Decode for Box<T> {
    #[inline]
    fn slot(&mut self) -> Slot<'_> {
        Slot::Indirect(self)
    }
}

impl<T: Zero> Zero for Box<T> {
    #[inline]
    fn zero() -> Self {
        Box::new(T::zero())
    }
}

impl<T: Decode + Zero> Decode for Vec<T> {
    #[inline]
    fn slot(&mut self) -> Slot<'_> {
        Slot::Sequence(self)
    }
}

impl<T> Zero for Vec<T> {
    #[inline]
    fn zero() -> Self {
        Vec::new()
    }
}

/// Implements [`Decode`](crate::Decode) for types that decode through their
/// [`FromStr`](std::str::FromStr) implementation.
///
/// The generated impl exposes the type both as the standard
/// [`UnmarshalText`](crate::UnmarshalText) capability and as a
/// [`ParseText`](crate::ParseText) hook, so it also works behind `Option` and
/// `Box`. Prefix the list with `default:` to also implement
/// [`Zero`](crate::Zero) through [`Default`], which those wrappers and
/// sequences require. Without it, implement `Zero` by hand.
///
/// # Example
///
/// ```
/// use std::str::FromStr;
///
/// #[derive(Debug, Default, PartialEq)]
/// enum Level {
///     #[default]
///     Low,
///     High,
/// }
///
/// impl FromStr for Level {
///     type Err = String;
///
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         match s {
///             "low" => Ok(Level::Low),
///             "high" => Ok(Level::High),
///             _ => Err(format!("unknown level {s}")),
///         }
///     }
/// }
///
/// untext::decode_via_from_str!(default: Level);
///
/// let mut level = Level::Low;
/// untext::parse("high", &mut level).unwrap();
/// assert_eq!(level, Level::High);
///
/// let mut levels: Vec<Level> = Vec::new();
/// untext::decode_slice(&["low", "high"], &mut levels).unwrap();
/// assert_eq!(levels, [Level::Low, Level::High]);
/// ```
#[macro_export]
macro_rules! decode_via_from_str {
    (default: $($ty:ty),* $(,)?) => {
        $crate::decode_via_from_str!($($ty),*);

        $(
            impl $crate::Zero for $ty {
                fn zero() -> Self {
                    <$ty as ::core::default::Default>::default()
                }
            }
        )*
    };
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::ParseText for $ty {
                fn parse_text(&mut self, input: &[u8]) -> $crate::Result<()> {
                    $crate::UnmarshalText::unmarshal_text(self, input)
                }
            }

            impl $crate::Decode for $ty {
                fn slot(&mut self) -> $crate::Slot<'_> {
                    $crate::Slot::Other
                }

                fn text_hook(&mut self) -> ::core::option::Option<&mut dyn $crate::ParseText> {
                    ::core::option::Option::Some(self)
                }

                fn unmarshaler(
                    &mut self,
                ) -> ::core::option::Option<&mut dyn $crate::UnmarshalText> {
                    ::core::option::Option::Some(self)
                }
            }
        )*
    };
}

decode_via_from_str!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);

impl Zero for IpAddr {
    fn zero() -> Self {
        IpAddr::V4(Ipv4Addr::UNSPECIFIED)
    }
}

impl Zero for Ipv4Addr {
    fn zero() -> Self {
        Ipv4Addr::UNSPECIFIED
    }
}

impl Zero for Ipv6Addr {
    fn zero() -> Self {
        Ipv6Addr::UNSPECIFIED
    }
}

impl Zero for SocketAddr {
    fn zero() -> Self {
        SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0))
    }
}
