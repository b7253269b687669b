// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Format classification for texture uploads.
//!
//! The embedded driver accepts a much smaller set of format/type pairs than the
//! desktop API.  This module decides, per upload, whether the caller's pair can
//! be handed over as-is or must be converted to the canonical fallback
//! (`GL_RGBA`, `GL_UNSIGNED_BYTE`).
//!
//! # Native pairs
//!
//! ## Formats
//! - `GL_ALPHA`, `GL_LUMINANCE` - 1 channel
//! - `GL_LUMINANCE_ALPHA` - 2 channels
//! - `GL_RGB` - 3 channels
//! - `GL_RGBA` - 4 channels
//!
//! ## Types
//! - `GL_UNSIGNED_BYTE`
//! - `GL_UNSIGNED_SHORT_5_6_5`, `GL_UNSIGNED_SHORT_4_4_4_4`, `GL_UNSIGNED_SHORT_5_5_5_1`
//!
//! `GL_UNSIGNED_INT_8_8_8_8_REV` is accepted by rewriting it to `GL_UNSIGNED_BYTE`;
//! on little-endian hosts both describe the same byte order.
//!
//! # Examples
//!
//! ```
//! use texture_shim::gl;
//! use texture_shim::pixel_formats::{Classification, classify, pixel_size};
//!
//! assert_eq!(classify(gl::RGBA, gl::UNSIGNED_BYTE), Classification::Native);
//! assert_eq!(classify(gl::BGRA, gl::UNSIGNED_BYTE), Classification::Convert);
//! assert_eq!(pixel_size(gl::RGB, gl::FLOAT), Some(12));
//! ```

pub(crate) mod png_support;

pub use png_support::PngDumper;

use crate::Error;
use crate::buffer::PixelBuffer;
use crate::convert::PixelConverter;
use crate::gl::{self, GLenum, GLsizei, GlEnum};

/// The canonical pair everything unsupported is converted to.
pub const FALLBACK_FORMAT: GLenum = gl::RGBA;
pub const FALLBACK_TYPE: GLenum = gl::UNSIGNED_BYTE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The driver takes the pair unmodified.
    Native,
    /// The driver takes the data once the type is renamed.
    Retype(GLenum),
    /// The data must be converted to [FALLBACK_FORMAT]/[FALLBACK_TYPE].
    Convert,
}

pub const fn is_native_format(format: GLenum) -> bool {
    matches!(
        format,
        gl::ALPHA | gl::RGB | gl::RGBA | gl::LUMINANCE | gl::LUMINANCE_ALPHA
    )
}

pub const fn is_native_type(ty: GLenum) -> bool {
    matches!(
        ty,
        gl::UNSIGNED_BYTE
            | gl::UNSIGNED_SHORT_5_6_5
            | gl::UNSIGNED_SHORT_4_4_4_4
            | gl::UNSIGNED_SHORT_5_5_5_1
    )
}

/// A native type with the same memory layout as `ty`, if `ty` is not native itself.
pub const fn equivalent_type(ty: GLenum) -> Option<GLenum> {
    match ty {
        gl::UNSIGNED_INT_8_8_8_8_REV => Some(gl::UNSIGNED_BYTE),
        _ => None,
    }
}

pub const fn classify(format: GLenum, ty: GLenum) -> Classification {
    if !is_native_format(format) {
        return Classification::Convert;
    }
    if is_native_type(ty) {
        return Classification::Native;
    }
    match equivalent_type(ty) {
        Some(t) => Classification::Retype(t),
        None => Classification::Convert,
    }
}

const fn channels(format: GLenum) -> Option<usize> {
    Some(match format {
        gl::RED
        | gl::GREEN
        | gl::BLUE
        | gl::ALPHA
        | gl::LUMINANCE
        | gl::INTENSITY
        | gl::DEPTH_COMPONENT
        | gl::STENCIL_INDEX
        | gl::COLOR_INDEX => 1,
        gl::LUMINANCE_ALPHA | gl::RG => 2,
        gl::RGB | gl::BGR => 3,
        gl::RGBA | gl::BGRA => 4,
        _ => return None,
    })
}

/// Bytes per pixel of a format/type pair.
///
/// Returns `None` for unknown enums and for `GL_BITMAP`, whose pixels are
/// smaller than a byte.
pub const fn pixel_size(format: GLenum, ty: GLenum) -> Option<usize> {
    if matches!(format, gl::BITMAP) {
        return None;
    }
    let Some(channels) = channels(format) else {
        return None;
    };
    Some(match ty {
        gl::BYTE | gl::UNSIGNED_BYTE => channels,
        gl::SHORT | gl::UNSIGNED_SHORT | gl::HALF_FLOAT => channels * 2,
        gl::INT | gl::UNSIGNED_INT | gl::FLOAT => channels * 4,
        gl::UNSIGNED_BYTE_3_3_2 | gl::UNSIGNED_BYTE_2_3_3_REV => 1,
        gl::UNSIGNED_SHORT_5_6_5
        | gl::UNSIGNED_SHORT_5_6_5_REV
        | gl::UNSIGNED_SHORT_4_4_4_4
        | gl::UNSIGNED_SHORT_4_4_4_4_REV
        | gl::UNSIGNED_SHORT_5_5_5_1
        | gl::UNSIGNED_SHORT_1_5_5_5_REV => 2,
        gl::UNSIGNED_INT_8_8_8_8
        | gl::UNSIGNED_INT_8_8_8_8_REV
        | gl::UNSIGNED_INT_10_10_10_2
        | gl::UNSIGNED_INT_2_10_10_10_REV => 4,
        _ => return None,
    })
}

/// Like [swizzle] for an upload without pixels.
fn swizzle_pair(format: &mut GLenum, ty: &mut GLenum) {
    match classify(*format, *ty) {
        Classification::Native => {}
        Classification::Retype(t) => *ty = t,
        Classification::Convert => {
            *format = FALLBACK_FORMAT;
            *ty = FALLBACK_TYPE;
        }
    }
}

/// Like [swizzle] for an upload that carries pixels.
fn swizzle_pixels<'a>(
    width: GLsizei,
    height: GLsizei,
    format: &mut GLenum,
    ty: &mut GLenum,
    mut pixels: PixelBuffer<'a>,
    converter: &dyn PixelConverter,
) -> Result<PixelBuffer<'a>, Error> {
    match classify(*format, *ty) {
        Classification::Native => {}
        Classification::Retype(t) => *ty = t,
        Classification::Convert => {
            match converter.convert(
                pixels.as_bytes(),
                width,
                height,
                *format,
                *ty,
                FALLBACK_FORMAT,
                FALLBACK_TYPE,
            ) {
                Ok(converted) => pixels.replace(converted),
                Err(source) => {
                    let err = Error::Conversion {
                        format: GlEnum(*format),
                        ty: GlEnum(*ty),
                        source,
                    };
                    logwise::error_sync!("{err}", err = logwise::privacy::LogIt(&err));
                    return Err(err);
                }
            }
            *format = FALLBACK_FORMAT;
            *ty = FALLBACK_TYPE;
            return Ok(pixels);
        }
    }
    logwise::trace_sync!(
        "swizzle: native {format}",
        format = logwise::privacy::LogIt(GlEnum(*format))
    );
    Ok(pixels)
}

/// Brings `format`/`ty` (and the pixels, if any) into a pair the driver accepts.
///
/// Native pairs pass through untouched.  Anything else is converted with
/// `converter`; the pair is rewritten to the fallback even when there are no
/// pixels, so placeholder allocations agree with later uploads.
///
/// A failed conversion is returned as [Error::Conversion] and the caller should
/// skip the upload.  `format`/`ty` are left as they were in that case.
pub fn swizzle<'a>(
    width: GLsizei,
    height: GLsizei,
    format: &mut GLenum,
    ty: &mut GLenum,
    pixels: Option<PixelBuffer<'a>>,
    converter: &dyn PixelConverter,
) -> Result<Option<PixelBuffer<'a>>, Error> {
    match pixels {
        Some(pixels) => swizzle_pixels(width, height, format, ty, pixels, converter).map(Some),
        None => {
            swizzle_pair(format, ty);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{ConversionError, Unconverting};
    use std::cell::Cell;

    /// Counts calls and fills the output with 0xAB.
    #[derive(Default)]
    struct Counting {
        converts: Cell<usize>,
    }

    impl PixelConverter for Counting {
        fn convert(
            &self,
            _src: &[u8],
            width: GLsizei,
            height: GLsizei,
            _src_format: GLenum,
            _src_type: GLenum,
            dst_format: GLenum,
            dst_type: GLenum,
        ) -> Result<Vec<u8>, ConversionError> {
            assert_eq!((dst_format, dst_type), (gl::RGBA, gl::UNSIGNED_BYTE));
            self.converts.set(self.converts.get() + 1);
            Ok(vec![0xAB; (width * height * 4) as usize])
        }

        fn scale(
            &self,
            _src: &[u8],
            _width: GLsizei,
            _height: GLsizei,
            _ratio: f32,
            _format: GLenum,
            _ty: GLenum,
        ) -> Result<Vec<u8>, ConversionError> {
            unreachable!()
        }
    }

    #[test]
    fn sizes() {
        assert_eq!(pixel_size(gl::RGBA, gl::UNSIGNED_BYTE), Some(4));
        assert_eq!(pixel_size(gl::LUMINANCE_ALPHA, gl::UNSIGNED_BYTE), Some(2));
        assert_eq!(pixel_size(gl::RGB, gl::UNSIGNED_SHORT_5_6_5), Some(2));
        assert_eq!(pixel_size(gl::BGRA, gl::UNSIGNED_INT_8_8_8_8_REV), Some(4));
        assert_eq!(pixel_size(gl::RGBA, gl::HALF_FLOAT), Some(8));
        assert_eq!(pixel_size(gl::BITMAP, gl::UNSIGNED_BYTE), None);
        assert_eq!(pixel_size(0xFFFF, gl::UNSIGNED_BYTE), None);
    }

    #[test]
    fn classification() {
        assert_eq!(classify(gl::ALPHA, gl::UNSIGNED_SHORT_4_4_4_4), Classification::Native);
        assert_eq!(
            classify(gl::RGBA, gl::UNSIGNED_INT_8_8_8_8_REV),
            Classification::Retype(gl::UNSIGNED_BYTE)
        );
        assert_eq!(classify(gl::RGBA, gl::FLOAT), Classification::Convert);
        assert_eq!(
            classify(gl::BGRA, gl::UNSIGNED_INT_8_8_8_8_REV),
            Classification::Convert
        );
    }

    #[test]
    fn native_pair_passes_original_through() {
        let data = [0u8; 16];
        let converter = Counting::default();
        let (mut format, mut ty) = (gl::RGBA, gl::UNSIGNED_BYTE);
        let pixels = Some(PixelBuffer::original(&data));
        let out = swizzle(2, 2, &mut format, &mut ty, pixels, &converter)
            .unwrap()
            .unwrap();
        assert!(out.is_original());
        assert_eq!(out.as_bytes().as_ptr(), data.as_ptr());
        assert_eq!(converter.converts.get(), 0);
        assert_eq!((format, ty), (gl::RGBA, gl::UNSIGNED_BYTE));
    }

    #[test]
    fn reversed_type_is_renamed() {
        let data = [0u8; 4];
        let converter = Counting::default();
        let (mut format, mut ty) = (gl::RGBA, gl::UNSIGNED_INT_8_8_8_8_REV);
        let pixels = Some(PixelBuffer::original(&data));
        let out = swizzle(1, 1, &mut format, &mut ty, pixels, &converter)
            .unwrap()
            .unwrap();
        assert!(out.is_original());
        assert_eq!(ty, gl::UNSIGNED_BYTE);
        assert_eq!(converter.converts.get(), 0);
    }

    #[test]
    fn unsupported_pair_converts_once() {
        let data = [0u8; 4 * 4 * 4];
        let converter = Counting::default();
        let (mut format, mut ty) = (gl::BGRA, gl::UNSIGNED_BYTE);
        let pixels = Some(PixelBuffer::original(&data));
        let out = swizzle(4, 4, &mut format, &mut ty, pixels, &converter)
            .unwrap()
            .unwrap();
        assert!(!out.is_original());
        assert_eq!(out.as_bytes()[0], 0xAB);
        assert_eq!(converter.converts.get(), 1);
        assert_eq!((format, ty), (gl::RGBA, gl::UNSIGNED_BYTE));
    }

    #[test]
    fn null_data_still_rewrites_pair() {
        let converter = Counting::default();
        let (mut format, mut ty) = (gl::BGRA, gl::FLOAT);
        let out = swizzle(8, 8, &mut format, &mut ty, None, &converter).unwrap();
        assert!(out.is_none());
        assert_eq!(converter.converts.get(), 0);
        assert_eq!((format, ty), (gl::RGBA, gl::UNSIGNED_BYTE));
    }

    #[test]
    fn failed_conversion_is_reported() {
        let data = [0u8; 8];
        let (mut format, mut ty) = (gl::RGB, gl::FLOAT);
        let pixels = Some(PixelBuffer::original(&data));
        let result = swizzle(1, 1, &mut format, &mut ty, pixels, &Unconverting);
        assert!(matches!(result, Err(Error::Conversion { .. })));
        assert_eq!((format, ty), (gl::RGB, gl::FLOAT));
    }
}
