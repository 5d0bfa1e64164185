use std::fmt;

/// Failure to convert a driver value into the requested destination type.
///
/// Carries the driver-level name of the source value and the name of the
/// destination type, so callers can tell exactly which column/value pair
/// misbehaved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoercionError {
    /// No conversion exists between the two types.
    Unsupported {
        src: &'static str,
        dst: &'static str,
    },
    /// A conversion exists, but this particular value is malformed for it
    /// (for example text that does not parse as a number).
    Invalid {
        src: &'static str,
        dst: &'static str,
        reason: String,
    },
}

impl CoercionError {
    pub fn unsupported(src: &'static str, dst: &'static str) -> Self {
        CoercionError::Unsupported { src, dst }
    }

    pub fn invalid(src: &'static str, dst: &'static str, reason: impl Into<String>) -> Self {
        CoercionError::Invalid {
            src,
            dst,
            reason: reason.into(),
        }
    }

    /// Stable string key for this error category. Useful for error mapping.
    pub fn key(&self) -> &'static str {
        match self {
            CoercionError::Unsupported { .. } => "unsupported_coercion",
            CoercionError::Invalid { .. } => "invalid_coercion",
        }
    }

    /// Driver-level name of the source value.
    pub fn src_type(&self) -> &'static str {
        match self {
            CoercionError::Unsupported { src, .. } | CoercionError::Invalid { src, .. } => src,
        }
    }

    /// Name of the destination type.
    pub fn dst_type(&self) -> &'static str {
        match self {
            CoercionError::Unsupported { dst, .. } | CoercionError::Invalid { dst, .. } => dst,
        }
    }
}

impl fmt::Display for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoercionError::Unsupported { src, dst } => {
                write!(
                    f,
                    "unsupported conversion from driver value {} into {}",
                    src, dst
                )
            }
            CoercionError::Invalid { src, dst, reason } => {
                write!(f, "converting driver value {} into {}: {}", src, dst, reason)
            }
        }
    }
}

impl std::error::Error for CoercionError {}

/// Failure to produce a driver value on the bind direction.
///
/// The built-in conversions only fail on out-of-range unsigned widening;
/// the type mostly exists so custom inner types have an error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindError {
    type_name: &'static str,
    reason: String,
}

impl BindError {
    pub fn new(type_name: &'static str, reason: impl Into<String>) -> Self {
        BindError {
            type_name,
            reason: reason.into(),
        }
    }

    /// Name of the type that failed to bind.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot bind {} as a driver value: {}",
            self.type_name, self.reason
        )
    }
}

impl std::error::Error for BindError {}

/// Category of a JSON decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The input is not valid JSON.
    Syntax,
    /// The input is valid JSON of the wrong shape for the target type.
    Data,
    /// The input ended before a complete JSON value.
    Eof,
}

/// A JSON decode failure, wrapping the engine's own error.
///
/// [`kind`](Self::kind) distinguishes malformed JSON from structurally
/// valid JSON that does not fit the target type.
#[derive(Debug)]
pub struct DecodeError {
    inner: serde_json::Error,
}

impl DecodeError {
    pub(crate) fn new(inner: serde_json::Error) -> Self {
        DecodeError { inner }
    }

    pub fn kind(&self) -> DecodeErrorKind {
        match self.inner.classify() {
            serde_json::error::Category::Data => DecodeErrorKind::Data,
            serde_json::error::Category::Eof => DecodeErrorKind::Eof,
            serde_json::error::Category::Syntax | serde_json::error::Category::Io => {
                DecodeErrorKind::Syntax
            }
        }
    }

    /// The underlying engine error.
    pub fn inner(&self) -> &serde_json::Error {
        &self.inner
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "json decode: {}", self.inner)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}

/// A JSON encode failure, wrapping the engine's own error.
#[derive(Debug)]
pub struct EncodeError {
    inner: serde_json::Error,
}

impl EncodeError {
    pub(crate) fn new(inner: serde_json::Error) -> Self {
        EncodeError { inner }
    }

    /// The underlying engine error.
    pub fn inner(&self) -> &serde_json::Error {
        &self.inner
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "json encode: {}", self.inner)
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}
