// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Row unpacking.

The embedded driver has no `GL_UNPACK_ROW_LENGTH`, `GL_UNPACK_SKIP_PIXELS` or
`GL_UNPACK_SKIP_ROWS`, so uploads that use them are repacked here into a tight
`width`x`height` image before they reach the driver.

Pixels smaller than a byte (`GL_BITMAP`) are not supported.
*/

use crate::Error;
use crate::gl::{GLenum, GLint, GLsizei, GlEnum};
use crate::pixel_formats::pixel_size;

/// Unpack state set through `pixel_storei`.
///
/// Persists until it is set again; callers reset `row_length` to 0 to get
/// tightly packed uploads back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnpackConfig {
    pub row_length: GLint,
    pub skip_pixels: GLint,
    pub skip_rows: GLint,
    pub lsb_first: bool,
    /// Tracked for validation only; the driver still receives it.
    pub alignment: GLint,
}

impl Default for UnpackConfig {
    fn default() -> Self {
        Self {
            row_length: 0,
            skip_pixels: 0,
            skip_rows: 0,
            lsb_first: false,
            alignment: 4,
        }
    }
}

impl UnpackConfig {
    /// Whether an upload of `width` pixels per row has to be repacked.
    pub fn needs_repack(&self, width: GLsizei) -> bool {
        self.row_length != 0 && self.row_length != width
    }

    /// Bytes of source the repack reads for a `width`x`height` image.
    ///
    /// `None` when the unpack state describes more memory than can be addressed.
    pub fn required_source_len(
        &self,
        width: GLsizei,
        height: GLsizei,
        pixel_size: usize,
    ) -> Option<usize> {
        if width <= 0 || height <= 0 {
            return Some(0);
        }
        let stride = (self.row_length as usize).checked_mul(pixel_size)?;
        let start = (self.skip_rows as usize)
            .checked_mul(stride)?
            .checked_add((self.skip_pixels as usize).checked_mul(pixel_size)?)?;
        (height as usize - 1)
            .checked_mul(stride)?
            .checked_add((width as usize).checked_mul(pixel_size)?)?
            .checked_add(start)
    }

    /// Copies the `width`x`height` sub-rectangle described by this config out of `src`.
    ///
    /// The result is tightly packed, `width * height * pixel_size` bytes long.
    pub fn repack(
        &self,
        src: &[u8],
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
    ) -> Result<Vec<u8>, Error> {
        if width < 0 || height < 0 {
            return Err(Error::NegativeSize { width, height });
        }
        let pixel_size = pixel_size(format, ty).ok_or(Error::UnknownPixelSize {
            format: GlEnum(format),
            ty: GlEnum(ty),
        })?;
        if width == 0 || height == 0 {
            return Ok(Vec::new());
        }
        let too_small = |required| Error::SourceTooSmall {
            required,
            actual: src.len(),
        };
        let required = self
            .required_source_len(width, height, pixel_size)
            .ok_or(too_small(usize::MAX))?;
        if src.len() < required {
            return Err(too_small(required));
        }

        //every offset below is at most `required`, so none of this overflows
        let stride = self.row_length as usize * pixel_size;
        let row_bytes = width as usize * pixel_size;
        let start = self.skip_rows as usize * stride + self.skip_pixels as usize * pixel_size;
        let capacity = row_bytes
            .checked_mul(height as usize)
            .ok_or(too_small(usize::MAX))?;
        let mut dst = Vec::with_capacity(capacity);
        for row in 0..height as usize {
            let offset = start + row * stride;
            dst.extend_from_slice(&src[offset..offset + row_bytes]);
        }
        logwise::trace_sync!(
            "repacked {w}x{h} from row length {row_length}",
            w = width,
            h = height,
            row_length = self.row_length
        );
        Ok(dst)
    }
}

/// Bytes the driver reads for a tightly packed `width`x`height` image whose
/// rows start on `alignment` byte boundaries.
///
/// `None` when the size cannot be addressed.
pub fn aligned_image_len(
    width: GLsizei,
    height: GLsizei,
    pixel_size: usize,
    alignment: GLint,
) -> Option<usize> {
    if width <= 0 || height <= 0 {
        return Some(0);
    }
    let row = (width as usize).checked_mul(pixel_size)?;
    let alignment = alignment.max(1) as usize;
    let stride = row.checked_next_multiple_of(alignment)?;
    (height as usize - 1).checked_mul(stride)?.checked_add(row)
}
