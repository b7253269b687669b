// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Error kinds and the sticky legacy error flag.

use crate::convert::ConversionError;
use crate::gl::{self, GLenum, GLsizei, GlEnum};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{call} is not allowed between begin and end")]
    InsideBeginEnd { call: &'static str },
    #[error("texture unit {unit:?} is outside TEXTURE0..TEXTURE{max}")]
    UnitOutOfRange { unit: GlEnum, max: usize },
    #[error("negative count {0}")]
    NegativeCount(GLsizei),
    #[error("count {count} exceeds the {supplied} values supplied")]
    CountExceedsSupplied { count: GLsizei, supplied: usize },
    #[error("invalid value {param} for {pname:?}")]
    InvalidPixelStore { pname: GlEnum, param: i32 },
    #[error("negative size {width}x{height}")]
    NegativeSize { width: GLsizei, height: GLsizei },
    #[error("source holds {actual} bytes but {required} are required")]
    SourceTooSmall { required: usize, actual: usize },
    #[error("no byte size for {format:?}/{ty:?}")]
    UnknownPixelSize { format: GlEnum, ty: GlEnum },
    #[error("swizzle error: ({format:?}, {ty:?} -> GL_RGBA, GL_UNSIGNED_BYTE): {source}")]
    Conversion {
        format: GlEnum,
        ty: GlEnum,
        #[source]
        source: ConversionError,
    },
    #[error("Can't write texture dump {0}")]
    DumpIo(#[from] std::io::Error),
    #[error("Can't encode texture dump {0}")]
    DumpEncoding(#[from] png::EncodingError),
    #[error("Can't dump {format:?}/{ty:?} pixels")]
    DumpUnsupported { format: GlEnum, ty: GlEnum },
    #[cfg(feature = "backend_gles")]
    #[error("Can't load driver {0}")]
    DriverLoad(#[from] libloading::Error),
}

impl Error {
    /// The legacy error code this condition raises, if any.
    ///
    /// Conversion and dump failures only degrade the call; they are logged
    /// but never surface through [ErrorFlag].
    pub const fn gl_code(&self) -> Option<GLenum> {
        match self {
            Error::InsideBeginEnd { .. } => Some(gl::INVALID_OPERATION),
            Error::UnitOutOfRange { .. } | Error::UnknownPixelSize { .. } => {
                Some(gl::INVALID_ENUM)
            }
            Error::NegativeCount(_)
            | Error::CountExceedsSupplied { .. }
            | Error::InvalidPixelStore { .. }
            | Error::NegativeSize { .. }
            | Error::SourceTooSmall { .. } => Some(gl::INVALID_VALUE),
            Error::Conversion { .. }
            | Error::DumpIo(_)
            | Error::DumpEncoding(_)
            | Error::DumpUnsupported { .. } => None,
            #[cfg(feature = "backend_gles")]
            Error::DriverLoad(_) => None,
        }
    }
}

/// Holds the first unretrieved error code, as the legacy API does.
#[derive(Debug, Default)]
pub struct ErrorFlag {
    pending: Option<GLenum>,
}

impl ErrorFlag {
    /// Records `code` unless an earlier error is still waiting to be read.
    pub fn set(&mut self, code: GLenum) {
        if self.pending.is_none() {
            self.pending = Some(code);
        }
    }

    /// Returns the pending code (or `NO_ERROR`) and clears it.
    pub fn take(&mut self) -> GLenum {
        self.pending.take().unwrap_or(gl::NO_ERROR)
    }

    pub fn peek(&self) -> GLenum {
        self.pending.unwrap_or(gl::NO_ERROR)
    }
}
