use tracing::trace;

use crate::decode::settable;
use crate::util::cold_path;
use crate::{Decode, Destination, Error, Result, Slot, Zero, parse};

/// A growable sequence whose elements can be decoded one input at a time.
pub trait Sequence {
    /// Replaces the contents with one element per input, in order.
    ///
    /// Implementations must leave `self` untouched when any element fails.
    fn decode_elements(&mut self, inputs: &mut dyn ExactSizeIterator<Item = &str>) -> Result<()>;
}

impl<T: Decode + Zero> Sequence for Vec<T> {
    fn decode_elements(&mut self, inputs: &mut dyn ExactSizeIterator<Item = &str>) -> Result<()> {
        let mut elements = Vec::with_capacity(inputs.len());
        for input in inputs {
            let mut element = T::zero();
            parse(input, &mut element)?;
            elements.push(element);
        }
        *self = elements;
        Ok(())
    }
}

/// Decodes a list of strings into a sequence destination.
///
/// Each input goes through [`parse`], so element hooks apply. Inputs are
/// processed in order and the first failure is returned without looking at
/// the rest. The destination is replaced only when every element succeeded;
/// on failure it keeps its previous contents.
///
/// # Example
///
/// ```
/// let mut nums: Vec<i64> = Vec::new();
/// untext::decode_slice(&["10", "20"], &mut nums).unwrap();
/// assert_eq!(nums, [10, 20]);
///
/// assert!(untext::decode_slice(&["10", "x"], &mut nums).is_err());
/// assert_eq!(nums, [10, 20]);
/// ```
///
/// # Errors
///
/// - [`Error::NotSettable`] if `dest` cannot be written through
/// - [`Error::NotSequence`] if `dest` is not a sequence
/// - the first element error, unchanged
pub fn decode_slice<'a, S: AsRef<str>>(inputs: &[S], dest: impl Destination<'a>) -> Result<()> {
    let dest = settable(dest)?;
    let type_name = dest.type_name();
    match dest.slot() {
        Slot::Sequence(sequence) => {
            sequence.decode_elements(&mut inputs.iter().map(|input| input.as_ref()))?;
            trace!(type_name, len = inputs.len(), "decoded sequence");
            Ok(())
        }
        _ => {
            cold_path();
            Err(Error::NotSequence { type_name })
        }
    }
}
