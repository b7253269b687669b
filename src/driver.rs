// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
The underlying driver, as seen by this layer.

Every call arrives here already translated: targets are remapped, format/type
pairs are ones the driver accepts, and pixel data is tightly packed.
*/

use crate::gl::{GLenum, GLfloat, GLint, GLsizei, GLuint};

/// Entry points of an embedded-profile driver.
pub trait Driver {
    #[allow(clippy::too_many_arguments)]
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
    );
    #[allow(clippy::too_many_arguments)]
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
    );
    fn bind_texture(&mut self, target: GLenum, texture: GLuint);
    fn active_texture(&mut self, texture: GLenum);
    fn client_active_texture(&mut self, texture: GLenum);
    fn tex_parameteri(&mut self, target: GLenum, pname: GLenum, param: GLint);
    fn tex_envf(&mut self, target: GLenum, pname: GLenum, param: GLfloat);
    fn delete_textures(&mut self, textures: &[GLuint]);
    fn pixel_storei(&mut self, pname: GLenum, param: GLint);
}

/// One call as a [RecordingDriver] saw it.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverCall {
    TexImage2D {
        target: GLenum,
        level: GLint,
        internal_format: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        format: GLenum,
        ty: GLenum,
        pixels: Option<Vec<u8>>,
        /// Address of the slice the driver received.
        pixels_ptr: Option<usize>,
    },
    TexSubImage2D {
        target: GLenum,
        level: GLint,
        xoffset: GLint,
        yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
        pixels: Option<Vec<u8>>,
        pixels_ptr: Option<usize>,
    },
    BindTexture { target: GLenum, texture: GLuint },
    ActiveTexture(GLenum),
    ClientActiveTexture(GLenum),
    TexParameteri { target: GLenum, pname: GLenum, param: GLint },
    TexEnvf { target: GLenum, pname: GLenum, param: GLfloat },
    DeleteTextures(Vec<GLuint>),
    PixelStorei { pname: GLenum, param: GLint },
}

/// Driver that keeps every call it receives.
///
/// Used to inspect the translated call stream, e.g. in tests.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub calls: Vec<DriverCall>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&mut self) -> Vec<DriverCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Driver for RecordingDriver {
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
        self.calls.push(DriverCall::TexImage2D {
            target,
            level,
            internal_format,
            width,
            height,
            border,
            format,
            ty,
            pixels: pixels.map(<[u8]>::to_vec),
            pixels_ptr: pixels.map(|p| p.as_ptr() as usize),
        });
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
        self.calls.push(DriverCall::TexSubImage2D {
            target,
            level,
            xoffset,
            yoffset,
            width,
            height,
            format,
            ty,
            pixels: pixels.map(<[u8]>::to_vec),
            pixels_ptr: pixels.map(|p| p.as_ptr() as usize),
        });
    }

    fn bind_texture(&mut self, target: GLenum, texture: GLuint) {
        self.calls.push(DriverCall::BindTexture { target, texture });
    }

    fn active_texture(&mut self, texture: GLenum) {
        self.calls.push(DriverCall::ActiveTexture(texture));
    }

    fn client_active_texture(&mut self, texture: GLenum) {
        self.calls.push(DriverCall::ClientActiveTexture(texture));
    }

    fn tex_parameteri(&mut self, target: GLenum, pname: GLenum, param: GLint) {
        self.calls.push(DriverCall::TexParameteri {
            target,
            pname,
            param,
        });
    }

    fn tex_envf(&mut self, target: GLenum, pname: GLenum, param: GLfloat) {
        self.calls.push(DriverCall::TexEnvf {
            target,
            pname,
            param,
        });
    }

    fn delete_textures(&mut self, textures: &[GLuint]) {
        self.calls.push(DriverCall::DeleteTextures(textures.to_vec()));
    }

    fn pixel_storei(&mut self, pname: GLenum, param: GLint) {
        self.calls.push(DriverCall::PixelStorei { pname, param });
    }
}
