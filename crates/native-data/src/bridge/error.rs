/// Exception classes the host runtime understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionKind {
    /// A required array argument was null.
    NullPointer,
    /// An index or length fell outside an array.
    IndexOutOfBounds,
}

impl ExceptionKind {
    /// Host class descriptor to raise for this kind.
    pub fn class_name(self) -> &'static str {
        match self {
            ExceptionKind::NullPointer => "java/lang/NullPointerException",
            ExceptionKind::IndexOutOfBounds => "java/lang/IndexOutOfBoundsException",
        }
    }
}

/// An error translated into the host's exception convention.
#[derive(Debug, Clone, PartialEq)]
pub struct HostException {
    kind: ExceptionKind,
    message: String,
    source: Option<crate::Error>,
}

impl HostException {
    /// A null array was passed for the argument named `argument`.
    pub fn null_argument(argument: &'static str) -> Self {
        HostException {
            kind: ExceptionKind::NullPointer,
            message: format!("{argument} is null"),
            source: None,
        }
    }

    pub fn kind(&self) -> ExceptionKind {
        self.kind
    }

    pub fn class_name(&self) -> &'static str {
        self.kind.class_name()
    }

    /// Message to pass along with the raised exception.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<crate::Error> for HostException {
    fn from(e: crate::Error) -> Self {
        HostException {
            kind: ExceptionKind::IndexOutOfBounds,
            message: e.to_string(),
            source: Some(e),
        }
    }
}

impl std::fmt::Display for HostException {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.class_name(), self.message)
    }
}

impl std::error::Error for HostException {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Convenience result type for host entry points.
pub type Result<T> = std::result::Result<T, HostException>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Region;

    #[test]
    fn from_core_error() {
        let e: HostException = crate::Error::overflow(Region::Bytes).into();
        assert_eq!(e.kind(), ExceptionKind::IndexOutOfBounds);
        assert_eq!(e.class_name(), "java/lang/IndexOutOfBoundsException");
        assert_eq!(e.message(), "byte range out of bounds: range end overflows");
    }

    #[test]
    fn null_argument() {
        let e = HostException::null_argument("outData");
        assert_eq!(e.kind(), ExceptionKind::NullPointer);
        assert_eq!(e.message(), "outData is null");
    }

    #[test]
    fn display_includes_class() {
        let e = HostException::null_argument("inData");
        assert_eq!(
            e.to_string(),
            "java/lang/NullPointerException: inData is null"
        );
    }

    #[test]
    fn error_source() {
        use std::error::Error as StdError;

        let e = HostException::null_argument("inData");
        assert!(e.source().is_none());

        let e: HostException = crate::Error::past_end(Region::Elements, 4, 2).into();
        assert!(e.source().is_some());
    }
}
