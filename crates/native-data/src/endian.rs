//! Big-endian element encoding.
//!
//! Every numeric type that can cross the byte boundary implements
//! [`BigEndian`]: a fixed width plus one function to assemble a value from its
//! big-endian bytes and one to extract those bytes again. The bulk routines in
//! [`crate::convert`] are written once against this trait and monomorphized
//! per element type.

use bytemuck::Pod;

/// A fixed-width numeric type stored most-significant byte first.
pub trait BigEndian: Pod {
    /// Number of bytes one element occupies in a byte buffer.
    const WIDTH: usize = core::mem::size_of::<Self>();

    /// Assemble a value from exactly [`Self::WIDTH`] big-endian bytes.
    ///
    /// # Panics
    /// Panics if `bytes.len() != Self::WIDTH`.
    fn read_be(bytes: &[u8]) -> Self;

    /// Write the big-endian bytes of `self` into exactly [`Self::WIDTH`] bytes.
    ///
    /// # Panics
    /// Panics if `out.len() != Self::WIDTH`.
    fn write_be(self, out: &mut [u8]);
}

macro_rules! impl_big_endian {
    ($($t:ty),* $(,)?) => {
        $(
            impl BigEndian for $t {
                #[inline]
                fn read_be(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; core::mem::size_of::<$t>()];
                    raw.copy_from_slice(bytes);
                    <$t>::from_be_bytes(raw)
                }

                #[inline]
                fn write_be(self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_be_bytes());
                }
            }
        )*
    };
}

impl_big_endian!(u8, i8, i16, u16, i32, u32, i64, u64, f32, f64);
