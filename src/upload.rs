// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Image uploads and sub-updates.

Every upload goes through the same pipeline before the driver sees it:

1. rows are repacked when the unpack state asks for a row length the driver
   cannot express,
2. the format/type pair is brought to one the driver accepts, converting the
   pixels if needed,
3. the debug hooks from [crate::Config] run,
4. the call is forwarded and the registry learns the new size.

Buffers created along the way are owned by the pipeline and dropped once the
driver returns; the caller's slice is only ever borrowed.
*/

use crate::Error;
use crate::bittricks::npot;
use crate::buffer::PixelBuffer;
use crate::context::TextureContext;
use crate::driver::Driver;
use crate::gl::{self, GLenum, GLfloat, GLint, GLsizei, GlEnum};
use crate::pixel_formats::{pixel_size, swizzle};
use crate::unpack::aligned_image_len;

/// Factor applied to both dimensions when [crate::Config::shrink] is set.
const SHRINK_RATIO: GLfloat = 0.5;

impl<D: Driver> TextureContext<D> {
    /// Runs the caller's pixels, if any, through repacking and format conversion.
    ///
    /// `format`/`ty` come back as the pair to hand to the driver, along with
    /// the unpack alignment the driver must read the buffer with, if it is not
    /// the application's.
    fn prepare<'a>(
        &self,
        data: Option<&'a [u8]>,
        width: GLsizei,
        height: GLsizei,
        format: &mut GLenum,
        ty: &mut GLenum,
    ) -> Result<(Option<PixelBuffer<'a>>, Option<GLint>), Error> {
        let pixels = match data {
            Some(data) if self.unpack.needs_repack(width) => Some(PixelBuffer::owned(
                self.unpack.repack(data, width, height, *format, *ty)?,
            )),
            Some(data) => {
                let pixels = PixelBuffer::original(data);
                self.read_alignment(&pixels, width, height, *format, *ty)?;
                Some(pixels)
            }
            None => None,
        };
        let pixels = swizzle(width, height, format, ty, pixels, self.converter.as_ref())?;
        let alignment = match &pixels {
            Some(pixels) => self.read_alignment(pixels, width, height, *format, *ty)?,
            None => None,
        };
        Ok((pixels, alignment))
    }

    /// Checks that the driver's read of `pixels` stays inside the buffer.
    ///
    /// The caller's bytes are read with the application's alignment.  Buffers
    /// built here are tightly packed, so when their rows miss that alignment
    /// the driver has to read them with alignment 1, which is returned.
    fn read_alignment(
        &self,
        pixels: &PixelBuffer<'_>,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
    ) -> Result<Option<GLint>, Error> {
        let too_small = |required| Error::SourceTooSmall {
            required,
            actual: pixels.len(),
        };
        let size = pixel_size(format, ty).ok_or(Error::UnknownPixelSize {
            format: GlEnum(format),
            ty: GlEnum(ty),
        })?;
        let alignment = self.unpack.alignment.max(1);
        let row = (width.max(0) as usize)
            .checked_mul(size)
            .ok_or(too_small(usize::MAX))?;
        let tight = (!pixels.is_original() && row % alignment as usize != 0).then_some(1);
        let required = aligned_image_len(width, height, size, tight.unwrap_or(alignment))
            .ok_or(too_small(usize::MAX))?;
        if pixels.len() < required {
            return Err(too_small(required));
        }
        Ok(tight)
    }

    /// Runs `call` on the driver, with `alignment` in effect if given.
    fn with_alignment(&mut self, alignment: Option<GLint>, call: impl FnOnce(&mut D)) {
        let Some(alignment) = alignment else {
            return call(&mut self.driver);
        };
        self.driver.pixel_storei(gl::UNPACK_ALIGNMENT, alignment);
        call(&mut self.driver);
        self.driver
            .pixel_storei(gl::UNPACK_ALIGNMENT, self.unpack.alignment);
    }

    /// Shrink and dump hooks.  Failures here are logged and never stop the upload.
    fn debug_hooks(
        &self,
        pixels: &mut PixelBuffer<'_>,
        width: &mut GLsizei,
        height: &mut GLsizei,
        format: GLenum,
        ty: GLenum,
    ) {
        if self.config.shrink && *width > 1 && *height > 1 {
            match self
                .converter
                .scale(pixels.as_bytes(), *width, *height, SHRINK_RATIO, format, ty)
            {
                Ok(scaled) => {
                    pixels.replace(scaled);
                    *width = (*width as GLfloat * SHRINK_RATIO) as GLsizei;
                    *height = (*height as GLfloat * SHRINK_RATIO) as GLsizei;
                }
                Err(err) => {
                    logwise::warn_sync!(
                        "shrink skipped: {err}",
                        err = logwise::privacy::LogIt(&err)
                    );
                }
            }
        }
        if self.config.texture_dump {
            if let Some(record) = self.registry.bound_to_active() {
                let texture = record.texture;
                if let Err(err) =
                    self.dumper
                        .dump(pixels.as_bytes(), *width, *height, format, ty, texture)
                {
                    logwise::warn_sync!(
                        "dump of texture {texture} failed: {err}",
                        texture = texture,
                        err = logwise::privacy::LogIt(&err)
                    );
                }
            }
        }
    }

    /// Uploads a whole image to the texture bound on the active unit.
    ///
    /// `data` of `None` allocates storage without contents.  The driver is
    /// given `format` as its internal format, since the embedded API requires
    /// the two to match.
    #[allow(clippy::too_many_arguments)]
    pub fn tex_image_2d(
        &mut self,
        target: GLenum,
        level: GLint,
        internal_format: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        format: GLenum,
        ty: GLenum,
        data: Option<&[u8]>,
    ) {
        if let Err(err) = self.upload(
            "tex_image_2d",
            target,
            level,
            internal_format,
            width,
            height,
            border,
            format,
            ty,
            data,
        ) {
            self.report("tex_image_2d", err);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn upload(
        &mut self,
        call: &'static str,
        target: GLenum,
        level: GLint,
        internal_format: GLint,
        mut width: GLsizei,
        mut height: GLsizei,
        border: GLint,
        mut format: GLenum,
        mut ty: GLenum,
        data: Option<&[u8]>,
    ) -> Result<(), Error> {
        self.check_outside_block(call)?;
        if width < 0 || height < 0 {
            return Err(Error::NegativeSize { width, height });
        }
        logwise::trace_sync!(
            "{call} {target} {w}x{h} internal format {internal_format}",
            call = call,
            target = logwise::privacy::LogIt(GlEnum(target)),
            w = width,
            h = height,
            internal_format = logwise::privacy::LogIt(GlEnum(internal_format as GLenum))
        );

        let (mut pixels, mut alignment) =
            self.prepare(data, width, height, &mut format, &mut ty)?;
        //the shrink hook may hand back a new buffer
        if let Some(pixels) = pixels.as_mut() {
            self.debug_hooks(pixels, &mut width, &mut height, format, ty);
            alignment = self.read_alignment(pixels, width, height, format, ty)?;
        }

        if gl::is_proxy_target(target) {
            logwise::trace_sync!("{call}: proxy target not forwarded", call = call);
            return Ok(());
        }
        let target = gl::map_tex_target(target);
        if level == 0 {
            let unit = self.registry.active_unit();
            self.registry.record_upload(unit, width, height);
        }

        let bytes = pixels.as_ref().map(PixelBuffer::as_bytes);
        let (padded_width, padded_height) = (npot(width), npot(height));
        if self.config.pad_npot && (padded_width != width || padded_height != height) {
            self.driver.tex_image_2d(
                target,
                level,
                format as GLint,
                padded_width,
                padded_height,
                border,
                format,
                ty,
                None,
            );
            if bytes.is_some() {
                self.with_alignment(alignment, |driver| {
                    driver.tex_sub_image_2d(target, level, 0, 0, width, height, format, ty, bytes)
                });
            }
        } else {
            self.with_alignment(alignment, |driver| {
                driver.tex_image_2d(
                    target,
                    level,
                    format as GLint,
                    width,
                    height,
                    border,
                    format,
                    ty,
                    bytes,
                )
            });
        }
        if let Some(pixels) = pixels {
            pixels.release();
        }
        Ok(())
    }

    /// Replaces a region of the texture bound on the active unit.
    #[allow(clippy::too_many_arguments)]
    pub fn tex_sub_image_2d(
        &mut self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
        data: Option<&[u8]>,
    ) {
        if let Err(err) = self.update(
            "tex_sub_image_2d",
            target,
            level,
            xoffset,
            yoffset,
            width,
            height,
            format,
            ty,
            data,
        ) {
            self.report("tex_sub_image_2d", err);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn update(
        &mut self,
        call: &'static str,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        mut format: GLenum,
        mut ty: GLenum,
        data: Option<&[u8]>,
    ) -> Result<(), Error> {
        self.check_outside_block(call)?;
        if width < 0 || height < 0 {
            return Err(Error::NegativeSize { width, height });
        }
        let (pixels, alignment) = self.prepare(data, width, height, &mut format, &mut ty)?;
        let bytes = pixels.as_ref().map(PixelBuffer::as_bytes);
        let target = gl::map_tex_target(target);
        self.with_alignment(alignment, |driver| {
            driver.tex_sub_image_2d(
                target, level, xoffset, yoffset, width, height, format, ty, bytes,
            )
        });
        if let Some(pixels) = pixels {
            pixels.release();
        }
        Ok(())
    }

    /// A one row 2D upload.
    #[allow(clippy::too_many_arguments)]
    pub fn tex_image_1d(
        &mut self,
        target: GLenum,
        level: GLint,
        internal_format: GLint,
        width: GLsizei,
        border: GLint,
        format: GLenum,
        ty: GLenum,
        data: Option<&[u8]>,
    ) {
        if let Err(err) = self.upload(
            "tex_image_1d",
            gl::map_tex_target(target),
            level,
            internal_format,
            width,
            1,
            border,
            format,
            ty,
            data,
        ) {
            self.report("tex_image_1d", err);
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn tex_sub_image_1d(
        &mut self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        width: GLsizei,
        format: GLenum,
        ty: GLenum,
        data: Option<&[u8]>,
    ) {
        if let Err(err) = self.update(
            "tex_sub_image_1d",
            target,
            level,
            xoffset,
            0,
            width,
            1,
            format,
            ty,
            data,
        ) {
            self.report("tex_sub_image_1d", err);
        }
    }

    /// Uploads the first slice of a 3D image as a 2D texture.  `depth` is ignored.
    #[allow(clippy::too_many_arguments)]
    pub fn tex_image_3d(
        &mut self,
        target: GLenum,
        level: GLint,
        internal_format: GLint,
        width: GLsizei,
        height: GLsizei,
        _depth: GLsizei,
        border: GLint,
        format: GLenum,
        ty: GLenum,
        data: Option<&[u8]>,
    ) {
        if let Err(err) = self.upload(
            "tex_image_3d",
            gl::map_tex_target(target),
            level,
            internal_format,
            width,
            height,
            border,
            format,
            ty,
            data,
        ) {
            self.report("tex_image_3d", err);
        }
    }

    /// `zoffset` and `depth` are ignored.
    #[allow(clippy::too_many_arguments)]
    pub fn tex_sub_image_3d(
        &mut self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        _zoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        _depth: GLsizei,
        format: GLenum,
        ty: GLenum,
        data: Option<&[u8]>,
    ) {
        if let Err(err) = self.update(
            "tex_sub_image_3d",
            target,
            level,
            xoffset,
            yoffset,
            width,
            height,
            format,
            ty,
            data,
        ) {
            self.report("tex_sub_image_3d", err);
        }
    }
}
