/// Which side of a conversion an access range was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The raw byte buffer.
    Bytes,
    /// The typed numeric array.
    Elements,
}

/// Why an access range was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    /// A start index below zero, as passed by a host caller.
    NegativeStart(i64),
    /// An element count below zero, as passed by a host caller.
    NegativeLength(i64),
    /// Computing the end of the range overflowed `usize`.
    Overflow,
    /// The range ends past the end of the buffer.
    PastEnd { end: usize, capacity: usize },
}

/// All errors that can occur while converting between bytes and numbers.
///
/// There is a single kind: every failure is a bounds violation detected
/// before any output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A computed access range falls outside a buffer's valid extent.
    OutOfBounds { region: Region, cause: Cause },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    pub(crate) fn overflow(region: Region) -> Self {
        Error::OutOfBounds {
            region,
            cause: Cause::Overflow,
        }
    }

    pub(crate) fn past_end(region: Region, end: usize, capacity: usize) -> Self {
        Error::OutOfBounds {
            region,
            cause: Cause::PastEnd { end, capacity },
        }
    }

    /// The side of the conversion the rejected range belonged to.
    pub fn region(&self) -> Region {
        match self {
            Error::OutOfBounds { region, .. } => *region,
        }
    }
}

impl core::fmt::Display for Region {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Region::Bytes => write!(f, "byte"),
            Region::Elements => write!(f, "element"),
        }
    }
}

impl core::fmt::Display for Cause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Cause::NegativeStart(v) => write!(f, "negative start {v}"),
            Cause::NegativeLength(v) => write!(f, "negative length {v}"),
            Cause::Overflow => write!(f, "range end overflows"),
            Cause::PastEnd { end, capacity } => {
                write!(f, "range ends at {end} but capacity is {capacity}")
            }
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::OutOfBounds { region, cause } => {
                write!(f, "{region} range out of bounds: {cause}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
