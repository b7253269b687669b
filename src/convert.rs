// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Contracts for the pixel routines this layer delegates to.

The layer decides *whether* pixels must be reformatted, scaled or dumped; it
does not implement the per-pixel algorithms.  Embedders supply a
[PixelConverter] (and optionally a [PixelDumper]) when they create a
[crate::TextureContext].
*/

use crate::Error;
use crate::gl::{GLenum, GLfloat, GLsizei, GLuint};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("conversion not supported")]
    Unsupported,
    #[error("source holds {actual} bytes but {required} are required")]
    ShortSource { required: usize, actual: usize },
}

/// Reformats and rescales pixel rectangles.
pub trait PixelConverter {
    /// Converts a tightly packed `width`x`height` image between format/type pairs.
    #[allow(clippy::too_many_arguments)]
    fn convert(
        &self,
        src: &[u8],
        width: GLsizei,
        height: GLsizei,
        src_format: GLenum,
        src_type: GLenum,
        dst_format: GLenum,
        dst_type: GLenum,
    ) -> Result<Vec<u8>, ConversionError>;

    /// Resamples an image by `ratio` in both directions, keeping format and type.
    fn scale(
        &self,
        src: &[u8],
        width: GLsizei,
        height: GLsizei,
        ratio: GLfloat,
        format: GLenum,
        ty: GLenum,
    ) -> Result<Vec<u8>, ConversionError>;
}

/// Writes an uploaded image somewhere a human can look at it.
pub trait PixelDumper {
    fn dump(
        &self,
        pixels: &[u8],
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
        texture: GLuint,
    ) -> Result<(), Error>;
}

/// Converter used when the embedder supplies none.  Every request fails, so
/// non-native uploads are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unconverting;

impl PixelConverter for Unconverting {
    fn convert(
        &self,
        _src: &[u8],
        _width: GLsizei,
        _height: GLsizei,
        _src_format: GLenum,
        _src_type: GLenum,
        _dst_format: GLenum,
        _dst_type: GLenum,
    ) -> Result<Vec<u8>, ConversionError> {
        Err(ConversionError::Unsupported)
    }

    fn scale(
        &self,
        _src: &[u8],
        _width: GLsizei,
        _height: GLsizei,
        _ratio: GLfloat,
        _format: GLenum,
        _ty: GLenum,
    ) -> Result<Vec<u8>, ConversionError> {
        Err(ConversionError::Unsupported)
    }
}
