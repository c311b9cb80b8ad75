use time::OffsetDateTime;

use crate::{Indirect, Sequence};

/// Classification of a destination type.
///
/// The decoder picks its parsing strategy from the `Kind` of the destination's
/// [`Slot`]. It is derived once per call and never stored.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Kind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    #[cfg(feature = "i128")]
    I128,
    Isize,
    U8,
    U16,
    U32,
    U64,
    #[cfg(feature = "i128")]
    U128,
    Usize,
    F32,
    F64,
    String,
    DateTime,
    Indirect,
    Sequence,
    Other,
}

impl Kind {
    /// Returns `true` for the kinds that hold a single scalar value.
    ///
    /// # Example
    ///
    /// ```
    /// use untext::Kind;
    ///
    /// assert!(Kind::I32.is_primitive());
    /// assert!(Kind::String.is_primitive());
    /// assert!(!Kind::Indirect.is_primitive());
    /// assert!(!Kind::DateTime.is_primitive());
    /// ```
    pub const fn is_primitive(self) -> bool {
        self.is_numeric() || matches!(self, Self::Bool | Self::String)
    }

    pub const fn is_numeric(self) -> bool {
        self.is_signed() || self.is_unsigned() || self.is_float()
    }

    pub const fn is_signed(self) -> bool {
        match self {
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::Isize => true,
            #[cfg(feature = "i128")]
            Self::I128 => true,
            _ => false,
        }
    }

    pub const fn is_unsigned(self) -> bool {
        match self {
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize => true,
            #[cfg(feature = "i128")]
            Self::U128 => true,
            _ => false,
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Returns `true` if the decoder has a built-in strategy for this kind.
    ///
    /// Sequences are only supported by [`decode_slice`](crate::decode_slice).
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Sequence | Self::Other)
    }
}

/// Typed access to the storage of a destination.
///
/// A [`Decode`](crate::Decode) implementation hands out one of these to tell the
/// decoder both what the destination is and where to write.
pub enum Slot<'a> {
    Bool(&'a mut bool),
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    #[cfg(feature = "i128")]
    I128(&'a mut i128),
    Isize(&'a mut isize),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    #[cfg(feature = "i128")]
    U128(&'a mut u128),
    Usize(&'a mut usize),
    F32(&'a mut f32),
    F64(&'a mut f64),
    String(&'a mut String),
    DateTime(&'a mut OffsetDateTime),
    Indirect(&'a mut dyn Indirect),
    Sequence(&'a mut dyn Sequence),
    Other,
}

impl Slot<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Slot::Bool(_) => Kind::Bool,
            Slot::I8(_) => Kind::I8,
            Slot::I16(_) => Kind::I16,
            Slot::I32(_) => Kind::I32,
            Slot::I64(_) => Kind::I64,
            #[cfg(feature = "i128")]
            Slot::I128(_) => Kind::I128,
            Slot::Isize(_) => Kind::Isize,
            Slot::U8(_) => Kind::U8,
            Slot::U16(_) => Kind::U16,
            Slot::U32(_) => Kind::U32,
            Slot::U64(_) => Kind::U64,
            #[cfg(feature = "i128")]
            Slot::U128(_) => Kind::U128,
            Slot::Usize(_) => Kind::Usize,
            Slot::F32(_) => Kind::F32,
            Slot::F64(_) => Kind::F64,
            Slot::String(_) => Kind::String,
            Slot::DateTime(_) => Kind::DateTime,
            Slot::Indirect(_) => Kind::Indirect,
            Slot::Sequence(_) => Kind::Sequence,
            Slot::Other => Kind::Other,
        }
    }
}
