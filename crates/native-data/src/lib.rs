#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[macro_use]
mod logging;

pub mod convert;
pub mod endian;
pub mod error;

#[cfg(feature = "array")]
pub mod array;

#[cfg(feature = "bridge")]
pub mod bridge;

pub use convert::{decode, decode_into, encode, encode_into};
pub use endian::BigEndian;
pub use error::{Error, Result};
