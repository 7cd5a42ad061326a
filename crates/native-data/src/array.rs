//! Multi-dimensional views over big-endian element data.
//!
//! Elements are laid out in logical row-major order: the last axis varies
//! fastest, matching how flat host arrays are reshaped.

use alloc::vec;
use alloc::vec::Vec;

use ndarray::{ArrayBase, ArrayD, Data, Dimension, IxDyn};

use crate::convert::decode;
use crate::endian::BigEndian;
use crate::error::{Error, Region, Result};

/// Decode `product(dims)` elements starting at `byte_start` into an array of
/// shape `dims`.
///
/// An empty `dims` yields a zero-dimensional array holding one element.
pub fn decode_array<T: BigEndian>(
    bytes: &[u8],
    byte_start: usize,
    dims: &[usize],
) -> Result<ArrayD<T>> {
    let count = dims
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or(Error::overflow(Region::Elements))?;

    let data: Vec<T> = decode(bytes, byte_start, 0, count)?;
    ArrayD::from_shape_vec(IxDyn(dims), data).map_err(|_| Error::overflow(Region::Elements))
}

/// Encode every element of `array`, in logical order, as big-endian bytes.
pub fn encode_array<T, S, D>(array: &ArrayBase<S, D>) -> Vec<u8>
where
    T: BigEndian,
    S: Data<Elem = T>,
    D: Dimension,
{
    let mut out = vec![0u8; array.len() * T::WIDTH];
    for (chunk, &val) in out.chunks_exact_mut(T::WIDTH).zip(array.iter()) {
        val.write_be(chunk);
    }
    out
}
