//! Host-runtime adapter over [`crate::convert`].
//!
//! Host entry points receive signed 32-bit indices and nullable arrays, and
//! host byte arrays hold signed bytes. This layer unpacks those arguments,
//! calls the pure conversion routines and turns any failure into a
//! [`HostException`] the caller can raise on the host side. Registration of
//! the entry points with the host is left to the embedding glue.

pub mod error;

pub use error::{ExceptionKind, HostException, Result};

use crate::convert;
use crate::endian::BigEndian;
use crate::error::{Cause, Error, Region};

/// Index or length as passed by the host (a signed 32-bit int).
pub type HostInt = i32;

fn start_arg(region: Region, value: HostInt) -> crate::Result<usize> {
    usize::try_from(value).map_err(|_| Error::OutOfBounds {
        region,
        cause: Cause::NegativeStart(i64::from(value)),
    })
}

fn len_arg(region: Region, value: HostInt) -> crate::Result<usize> {
    usize::try_from(value).map_err(|_| Error::OutOfBounds {
        region,
        cause: Cause::NegativeLength(i64::from(value)),
    })
}

fn required<T>(arg: Option<T>, name: &'static str) -> Result<T> {
    arg.ok_or_else(|| {
        debug!("raising NullPointerException: {} is null", name);
        HostException::null_argument(name)
    })
}

fn raise(e: Error) -> HostException {
    let exc = HostException::from(e);
    debug!("raising {}: {}", exc.class_name(), exc.message());
    exc
}

/// Copy `len` elements of `in_data` starting at `in_start` into the host byte
/// array `out_data` at byte `out_start`, big-endian.
pub fn copy_to_bytes<T: BigEndian>(
    in_data: Option<&[T]>,
    in_start: HostInt,
    out_data: Option<&mut [i8]>,
    out_start: HostInt,
    len: HostInt,
) -> Result<()> {
    trace!(
        "copy {} elements of width {} to bytes at {}",
        len,
        T::WIDTH,
        out_start
    );
    let in_data = required(in_data, "inData")?;
    let out_data = required(out_data, "outData")?;

    let args = || -> crate::Result<(usize, usize, usize)> {
        Ok((
            start_arg(Region::Elements, in_start)?,
            len_arg(Region::Elements, len)?,
            start_arg(Region::Bytes, out_start)?,
        ))
    };
    let (in_start, len, out_start) = args().map_err(raise)?;

    let out_bytes: &mut [u8] = bytemuck::cast_slice_mut(out_data);
    convert::encode_into(in_data, in_start, out_bytes, out_start, len).map_err(raise)
}

/// Copy `len` elements decoded from the host byte array `in_data` at byte
/// `in_start` into `out_data` starting at `out_start`.
pub fn copy_from_bytes<T: BigEndian>(
    in_data: Option<&[i8]>,
    in_start: HostInt,
    out_data: Option<&mut [T]>,
    out_start: HostInt,
    len: HostInt,
) -> Result<()> {
    trace!(
        "copy {} elements of width {} from bytes at {}",
        len,
        T::WIDTH,
        in_start
    );
    let in_data = required(in_data, "inData")?;
    let out_data = required(out_data, "outData")?;

    let args = || -> crate::Result<(usize, usize, usize)> {
        Ok((
            start_arg(Region::Bytes, in_start)?,
            len_arg(Region::Bytes, len)?,
            start_arg(Region::Elements, out_start)?,
        ))
    };
    let (in_start, len, out_start) = args().map_err(raise)?;

    // Host bytes are signed; reinterpret them as unsigned before assembly.
    let in_bytes: &[u8] = bytemuck::cast_slice(in_data);
    convert::decode_into(in_bytes, in_start, out_data, out_start, len).map_err(raise)
}

/// Encode `len` elements starting at `start` into a new host byte array.
pub fn to_host_bytes<T: BigEndian>(
    data: Option<&[T]>,
    start: HostInt,
    len: HostInt,
) -> Result<Vec<i8>> {
    let data = required(data, "data")?;
    let start = start_arg(Region::Elements, start).map_err(raise)?;
    let len = len_arg(Region::Elements, len).map_err(raise)?;

    let bytes = convert::encode(data, start, 0, len).map_err(raise)?;
    Ok(bytemuck::allocation::cast_vec(bytes))
}

/// Decode `len` elements from the host byte array starting at byte `start`.
pub fn from_host_bytes<T: BigEndian>(
    data: Option<&[i8]>,
    start: HostInt,
    len: HostInt,
) -> Result<Vec<T>> {
    let data = required(data, "data")?;
    let start = start_arg(Region::Bytes, start).map_err(raise)?;
    let len = len_arg(Region::Bytes, len).map_err(raise)?;

    convert::decode(bytemuck::cast_slice(data), start, 0, len).map_err(raise)
}

macro_rules! host_entry_points {
    ($($t:ty => $name:literal: $to_byte:ident, $copy_to_byte:ident, $from_byte:ident, $copy_from_byte:ident;)*) => {
        $(
            #[doc = concat!("`", $name, "ToByte(", $name, "[] data, int start, int len)`.")]
            pub fn $to_byte(data: Option<&[$t]>, start: HostInt, len: HostInt) -> Result<Vec<i8>> {
                to_host_bytes(data, start, len)
            }

            #[doc = concat!("`copy", $name, "ToByte(", $name, "[] inData, int inStart, byte[] outData, int outStart, int len)`.")]
            pub fn $copy_to_byte(
                in_data: Option<&[$t]>,
                in_start: HostInt,
                out_data: Option<&mut [i8]>,
                out_start: HostInt,
                len: HostInt,
            ) -> Result<()> {
                copy_to_bytes(in_data, in_start, out_data, out_start, len)
            }

            #[doc = concat!("`byteTo", $name, "(byte[] data, int start, int len)`.")]
            pub fn $from_byte(data: Option<&[i8]>, start: HostInt, len: HostInt) -> Result<Vec<$t>> {
                from_host_bytes(data, start, len)
            }

            #[doc = concat!("`copyByteTo", $name, "(byte[] inData, int inStart, ", $name, "[] outData, int outStart, int len)`.")]
            pub fn $copy_from_byte(
                in_data: Option<&[i8]>,
                in_start: HostInt,
                out_data: Option<&mut [$t]>,
                out_start: HostInt,
                len: HostInt,
            ) -> Result<()> {
                copy_from_bytes(in_data, in_start, out_data, out_start, len)
            }
        )*
    };
}

host_entry_points! {
    i16 => "Short": short_to_byte, copy_short_to_byte, byte_to_short, copy_byte_to_short;
    i32 => "Int": int_to_byte, copy_int_to_byte, byte_to_int, copy_byte_to_int;
    i64 => "Long": long_to_byte, copy_long_to_byte, byte_to_long, copy_byte_to_long;
    f32 => "Float": float_to_byte, copy_float_to_byte, byte_to_float, copy_byte_to_float;
    f64 => "Double": double_to_byte, copy_double_to_byte, byte_to_double, copy_byte_to_double;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_long_roundtrip_through_signed_bytes() {
        let values = [0x0102030405060708_i64, -1, i64::MIN];
        let mut host = [0i8; 24];
        copy_long_to_byte(Some(&values), 0, Some(&mut host), 0, 3).unwrap();
        assert_eq!(&host[..8], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(&host[8..16], &[-1; 8]);
        assert_eq!(host[16], i8::MIN);

        let mut back = [0_i64; 3];
        copy_byte_to_long(Some(&host), 0, Some(&mut back), 0, 3).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn negative_bytes_do_not_sign_extend() {
        // 0x00 0x00 0x00 0x80 as signed host bytes.
        let host = [0i8, 0, 0, -128];
        let values = byte_to_int(Some(&host), 0, 1).unwrap();
        assert_eq!(values, [0x80]);
    }

    #[test]
    fn null_arrays_raise_null_pointer() {
        let mut out = [0i8; 8];
        let err = copy_long_to_byte(None, 0, Some(&mut out), 0, 1).unwrap_err();
        assert_eq!(err.kind(), ExceptionKind::NullPointer);
        assert_eq!(err.message(), "inData is null");

        let err = copy_byte_to_long(Some(&out), 0, None, 0, 1).unwrap_err();
        assert_eq!(err.kind(), ExceptionKind::NullPointer);
        assert_eq!(err.message(), "outData is null");
    }

    #[test]
    fn negative_start_raises_out_of_bounds() {
        let mut out = [0_i32; 2];
        let err = copy_byte_to_int(Some(&[0i8; 8]), -4, Some(&mut out), 0, 1).unwrap_err();
        assert_eq!(err.kind(), ExceptionKind::IndexOutOfBounds);
        assert_eq!(err.message(), "byte range out of bounds: negative start -4");

        let err = copy_byte_to_int(Some(&[0i8; 8]), 0, Some(&mut out), -1, 1).unwrap_err();
        assert_eq!(
            err.message(),
            "element range out of bounds: negative start -1"
        );
    }

    #[test]
    fn negative_length_raises_out_of_bounds() {
        let mut out = [0i8; 8];
        let err = copy_short_to_byte(Some(&[1_i16]), 0, Some(&mut out), 0, -1).unwrap_err();
        assert_eq!(err.kind(), ExceptionKind::IndexOutOfBounds);
        assert_eq!(
            err.message(),
            "element range out of bounds: negative length -1"
        );
    }

    #[test]
    fn short_destination_leaves_host_array_untouched() {
        let mut out = [7i8; 12];
        let err = copy_double_to_byte(Some(&[1.0, 2.0]), 0, Some(&mut out), 0, 2).unwrap_err();
        assert_eq!(err.kind(), ExceptionKind::IndexOutOfBounds);
        assert_eq!(out, [7; 12]);
    }

    #[test]
    fn whole_array_helpers() {
        let bytes = float_to_byte(Some(&[1.0_f32, -1.0]), 0, 2).unwrap();
        assert_eq!(bytes.len(), 8);
        assert_eq!(bytes[0], 0x3F);
        assert_eq!(bytes[4], 0xBF_u8 as i8);

        let values = byte_to_float(Some(&bytes), 4, 1).unwrap();
        assert_eq!(values, [-1.0]);

        assert_eq!(short_to_byte(Some(&[0x0102]), 0, 1).unwrap(), [1, 2]);
        assert!(byte_to_double(None, 0, 1).is_err());
        assert!(long_to_byte(Some(&[1]), 1, 1).is_err());
    }

    #[test]
    fn zero_length_copy_is_noop() {
        let mut out = [3i8; 4];
        copy_int_to_byte(Some(&[]), 0, Some(&mut out), 0, 0).unwrap();
        assert_eq!(out, [3; 4]);
    }
}
