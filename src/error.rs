use core::fmt::Display;
use core::fmt::Formatter;

use crate::encoder::ColorType;

/// Coarse classification of an [EncodingError]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The session was configured with invalid values or fed malformed data
    Configuration,

    /// A block or finish call arrived while the session could not accept it
    Sequencing,

    /// The output sink rejected a write
    Io,
}

/// # The error type for encoding
#[derive(Debug)]
pub enum EncodingError {
    /// Width or height is zero
    ZeroImageDimensions { width: u16, height: u16 },

    /// Quality is outside of 1..=100
    InvalidQuality(u8),

    /// A quantization factor is outside of 1..=255
    InvalidQuantizationValue { index: usize, value: u16 },

    /// A block submission does not match the configured color type
    ComponentCountMismatch {
        color_type: ColorType,
        expected: usize,
        actual: usize,
    },

    /// A quantized coefficient can't be represented in a baseline stream
    CoefficientOutOfRange {
        component: usize,
        index: usize,
        value: i32,
    },

    /// A block or finish call was made before `reset`
    NotInitialized,

    /// A block or finish call was made after `finish` or after a failed call
    Finished,

    /// More blocks were submitted than the frame header declares
    TooManyBlocks { expected: usize },

    /// A custom [JfifWrite](crate::JfifWrite) sink rejected a write
    ///
    /// The sinks of this crate never return it. It is the error for sinks
    /// that are not backed by `std::io::Write`, e.g. fixed size buffers in
    /// `no_std` builds.
    Write(&'static str),

    /// An io error occurred during writing
    #[cfg(feature = "std")]
    IoError(std::io::Error),
}

impl EncodingError {
    /// Returns the kind of this error
    pub fn kind(&self) -> ErrorKind {
        use EncodingError::*;

        match self {
            ZeroImageDimensions { .. }
            | InvalidQuality(_)
            | InvalidQuantizationValue { .. }
            | ComponentCountMismatch { .. }
            | CoefficientOutOfRange { .. } => ErrorKind::Configuration,
            NotInitialized | Finished | TooManyBlocks { .. } => ErrorKind::Sequencing,
            Write(_) => ErrorKind::Io,
            #[cfg(feature = "std")]
            IoError(_) => ErrorKind::Io,
        }
    }
}

/// Result alias used by all fallible operations of this crate
pub type EncoderResult<T> = Result<T, EncodingError>;

#[cfg(feature = "std")]
impl From<std::io::Error> for EncodingError {
    fn from(err: std::io::Error) -> EncodingError {
        EncodingError::IoError(err)
    }
}

impl Display for EncodingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        use EncodingError::*;
        match self {
            ZeroImageDimensions { width, height } => {
                write!(f, "Image dimensions must be non zero: {}x{}", width, height)
            }
            InvalidQuality(quality) => {
                write!(f, "Invalid quality: {} not in 1..=100", quality)
            }
            InvalidQuantizationValue { index, value } => write!(
                f,
                "Invalid quantization factor at index {}: {} not in 1..=255",
                index, value
            ),
            ComponentCountMismatch {
                color_type,
                expected,
                actual,
            } => write!(
                f,
                "Color type {:?} expects {} component block(s) per call, got {}",
                color_type, expected, actual
            ),
            CoefficientOutOfRange {
                component,
                index,
                value,
            } => write!(
                f,
                "Quantized coefficient {} of component {} out of range: {}",
                index, component, value
            ),
            NotInitialized => write!(f, "Encoder used before reset"),
            Finished => write!(f, "Encoder used after finish or a previous error"),
            TooManyBlocks { expected } => {
                write!(f, "More than the expected {} blocks were submitted", expected)
            }
            Write(err) => write!(f, "{}", err),
            #[cfg(feature = "std")]
            IoError(err) => err.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodingError::IoError(err) => Some(err),
            _ => None,
        }
    }
}
