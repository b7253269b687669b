// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Driver backed by a GLES shared library loaded at runtime.

mod entry_points;

use crate::Error;
use crate::driver::Driver;
use crate::gl::{self, GLenum, GLfloat, GLint, GLsizei, GLuint, GlEnum};
use crate::pixel_formats::pixel_size;
use crate::unpack::aligned_image_len;
use entry_points::{EntryPoints, resolve};
use libloading::Library;
use std::ffi::{OsStr, c_void};
use std::fmt::{Debug, Formatter};

/// Library opened by [GlesDriver::open_default].
pub const DEFAULT_LIBRARY: &str = "libGLESv1_CM.so";

/// Pointer for an upload of `width`x`height` pixels, or `None` when the
/// driver would read past the end of `pixels` at `alignment`.
fn pixels_ptr(
    pixels: Option<&[u8]>,
    width: GLsizei,
    height: GLsizei,
    format: GLenum,
    ty: GLenum,
    alignment: GLint,
) -> Option<*const c_void> {
    let Some(pixels) = pixels else {
        return Some(std::ptr::null());
    };
    let required = aligned_image_len(width, height, pixel_size(format, ty)?, alignment)?;
    if pixels.len() < required {
        logwise::error_sync!(
            "refusing upload of {actual} bytes, {format}/{ty} {w}x{h} reads {required}",
            actual = pixels.len(),
            format = logwise::privacy::LogIt(GlEnum(format)),
            ty = logwise::privacy::LogIt(GlEnum(ty)),
            w = width,
            h = height,
            required = required
        );
        return None;
    }
    Some(pixels.as_ptr().cast())
}

pub struct GlesDriver {
    entry_points: EntryPoints,
    //as last set through pixel_storei
    unpack_alignment: GLint,
    //declared last so the resolved pointers never outlive it
    library: Library,
}

impl Debug for GlesDriver {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlesDriver")
            .field("library", &self.library)
            .finish_non_exhaustive()
    }
}

impl GlesDriver {
    /// Opens the driver library at `path`.  No symbols are resolved yet.
    pub fn open(path: impl AsRef<OsStr>) -> Result<Self, Error> {
        let path = path.as_ref();
        //safe as far as we can tell: loading a GLES driver runs no initializers we depend on
        let library = unsafe { Library::new(path) }?;
        logwise::info_sync!(
            "opened driver {path}",
            path = logwise::privacy::LogIt(path)
        );
        Ok(Self::from_library(library))
    }

    pub fn open_default() -> Result<Self, Error> {
        Self::open(DEFAULT_LIBRARY)
    }

    pub fn from_library(library: Library) -> Self {
        Self {
            entry_points: EntryPoints::default(),
            unpack_alignment: 4,
            library,
        }
    }
}

impl Driver for GlesDriver {
    fn tex_image_2d(
        &mut self,
        target: GLenum,
        level: GLint,
        internal_format: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        format: GLenum,
        ty: GLenum,
        pixels: Option<&[u8]>,
    ) {
        let Some(pixels) = pixels_ptr(pixels, width, height, format, ty, self.unpack_alignment)
        else {
            return;
        };
        let Some(f) = resolve(&self.library, &self.entry_points.tex_image_2d, "glTexImage2D")
        else {
            return;
        };
        //safe because pixels_ptr checked the slice covers everything the driver reads
        unsafe {
            f(
                target,
                level,
                internal_format,
                width,
                height,
                border,
                format,
                ty,
                pixels,
            )
        }
    }

    fn tex_sub_image_2d(
        &mut self,
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
        pixels: Option<&[u8]>,
    ) {
        let Some(pixels) = pixels_ptr(pixels, width, height, format, ty, self.unpack_alignment)
        else {
            return;
        };
        let Some(f) = resolve(
            &self.library,
            &self.entry_points.tex_sub_image_2d,
            "glTexSubImage2D",
        ) else {
            return;
        };
        //safe because pixels_ptr checked the slice covers everything the driver reads
        unsafe {
            f(
                target,
                level,
                xoffset,
                yoffset,
                width,
                height,
                format,
                ty,
                pixels,
            )
        }
    }

    fn bind_texture(&mut self, target: GLenum, texture: GLuint) {
        if let Some(f) = resolve(&self.library, &self.entry_points.bind_texture, "glBindTexture") {
            unsafe { f(target, texture) }
        }
    }

    fn active_texture(&mut self, texture: GLenum) {
        if let Some(f) = resolve(
            &self.library,
            &self.entry_points.active_texture,
            "glActiveTexture",
        ) {
            unsafe { f(texture) }
        }
    }

    fn client_active_texture(&mut self, texture: GLenum) {
        if let Some(f) = resolve(
            &self.library,
            &self.entry_points.client_active_texture,
            "glClientActiveTexture",
        ) {
            unsafe { f(texture) }
        }
    }

    fn tex_parameteri(&mut self, target: GLenum, pname: GLenum, param: GLint) {
        if let Some(f) = resolve(
            &self.library,
            &self.entry_points.tex_parameteri,
            "glTexParameteri",
        ) {
            unsafe { f(target, pname, param) }
        }
    }

    fn tex_envf(&mut self, target: GLenum, pname: GLenum, param: GLfloat) {
        if let Some(f) = resolve(&self.library, &self.entry_points.tex_envf, "glTexEnvf") {
            unsafe { f(target, pname, param) }
        }
    }

    fn delete_textures(&mut self, textures: &[GLuint]) {
        if let Some(f) = resolve(
            &self.library,
            &self.entry_points.delete_textures,
            "glDeleteTextures",
        ) {
            //safe because the count comes from the slice itself
            unsafe { f(textures.len() as GLsizei, textures.as_ptr()) }
        }
    }

    fn pixel_storei(&mut self, pname: GLenum, param: GLint) {
        if let Some(f) = resolve(&self.library, &self.entry_points.pixel_storei, "glPixelStorei") {
            unsafe { f(pname, param) }
            if pname == gl::UNPACK_ALIGNMENT && matches!(param, 1 | 2 | 4 | 8) {
                self.unpack_alignment = param;
            }
        }
    }
}
