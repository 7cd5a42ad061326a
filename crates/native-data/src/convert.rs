//! Bulk conversion between byte buffers and numeric arrays.
//!
//! All routines validate both access ranges before writing anything, so a
//! failed call leaves the destination untouched.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::Range;

use bytemuck::Zeroable;

use crate::endian::BigEndian;
use crate::error::{Error, Region, Result};

/// Validate `[start, start + count)` against a buffer of `capacity` units.
fn span(region: Region, capacity: usize, start: usize, count: usize) -> Result<Range<usize>> {
    let end = start.checked_add(count).ok_or(Error::overflow(region))?;
    if end > capacity {
        return Err(Error::past_end(region, end, capacity));
    }
    Ok(start..end)
}

/// Byte range covered by `len` elements of `T` starting at byte `start`.
fn byte_span<T: BigEndian>(capacity: usize, start: usize, len: usize) -> Result<Range<usize>> {
    let count = len
        .checked_mul(T::WIDTH)
        .ok_or(Error::overflow(Region::Bytes))?;
    span(Region::Bytes, capacity, start, count)
}

/// Decode `len` big-endian elements from `bytes[byte_start..]` into
/// `dest[dest_start..dest_start + len]`.
pub fn decode_into<T: BigEndian>(
    bytes: &[u8],
    byte_start: usize,
    dest: &mut [T],
    dest_start: usize,
    len: usize,
) -> Result<()> {
    let src = byte_span::<T>(bytes.len(), byte_start, len)?;
    let dst = span(Region::Elements, dest.len(), dest_start, len)?;

    for (chunk, slot) in bytes[src].chunks_exact(T::WIDTH).zip(&mut dest[dst]) {
        *slot = T::read_be(chunk);
    }
    Ok(())
}

/// Decode `len` elements into a new array of length `dest_start + len`.
///
/// Slots before `dest_start` are zero.
pub fn decode<T: BigEndian>(
    bytes: &[u8],
    byte_start: usize,
    dest_start: usize,
    len: usize,
) -> Result<Vec<T>> {
    byte_span::<T>(bytes.len(), byte_start, len)?;
    let total = dest_start
        .checked_add(len)
        .ok_or(Error::overflow(Region::Elements))?;

    let mut out = vec![T::zeroed(); total];
    decode_into(bytes, byte_start, &mut out, dest_start, len)?;
    Ok(out)
}

/// Encode `values[array_start..array_start + len]` as big-endian bytes into
/// `dest[byte_start..]`.
pub fn encode_into<T: BigEndian>(
    values: &[T],
    array_start: usize,
    dest: &mut [u8],
    byte_start: usize,
    len: usize,
) -> Result<()> {
    let src = span(Region::Elements, values.len(), array_start, len)?;
    let dst = byte_span::<T>(dest.len(), byte_start, len)?;

    for (chunk, &val) in dest[dst].chunks_exact_mut(T::WIDTH).zip(&values[src]) {
        val.write_be(chunk);
    }
    Ok(())
}

/// Encode `len` elements into a new buffer of `byte_start + len * WIDTH` bytes.
///
/// Bytes before `byte_start` are zero.
pub fn encode<T: BigEndian>(
    values: &[T],
    array_start: usize,
    byte_start: usize,
    len: usize,
) -> Result<Vec<u8>> {
    span(Region::Elements, values.len(), array_start, len)?;
    let total = len
        .checked_mul(T::WIDTH)
        .and_then(|n| n.checked_add(byte_start))
        .ok_or(Error::overflow(Region::Bytes))?;

    let mut out = vec![0u8; total];
    encode_into(values, array_start, &mut out, byte_start, len)?;
    Ok(out)
}

// --- Whole-value helpers ---

/// Big-endian bytes of a single value.
pub fn to_bytes<T: BigEndian>(value: T) -> Vec<u8> {
    let mut out = vec![0u8; T::WIDTH];
    value.write_be(&mut out);
    out
}

/// Big-endian bytes of every element of `values`, in order.
pub fn slice_to_bytes<T: BigEndian>(values: &[T]) -> Vec<u8> {
    let mut out = vec![0u8; values.len() * T::WIDTH];
    for (chunk, &val) in out.chunks_exact_mut(T::WIDTH).zip(values) {
        val.write_be(chunk);
    }
    out
}

/// Read one value from the bytes at `start`.
pub fn read<T: BigEndian>(bytes: &[u8], start: usize) -> Result<T> {
    let range = byte_span::<T>(bytes.len(), start, 1)?;
    Ok(T::read_be(&bytes[range]))
}

/// Write one value into `dest` at byte `start`.
pub fn write<T: BigEndian>(value: T, dest: &mut [u8], start: usize) -> Result<()> {
    let range = byte_span::<T>(dest.len(), start, 1)?;
    value.write_be(&mut dest[range]);
    Ok(())
}

/// Decode `len` elements starting at byte `start` into a fresh array.
pub fn from_bytes<T: BigEndian>(bytes: &[u8], start: usize, len: usize) -> Result<Vec<T>> {
    decode(bytes, start, 0, len)
}
