// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::driver::Driver;
use crate::gl::{GLenum, GLfloat, GLint, GLsizei, GLuint, GlEnum};

/// Driver that drops every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct NopDriver;

impl Driver for NopDriver {
    fn tex_image_2d(
        &mut self,
        target: GLenum,
        level: GLint,
        _internal_format: GLint,
        width: GLsizei,
        height: GLsizei,
        _border: GLint,
        _format: GLenum,
        _ty: GLenum,
        _pixels: Option<&[u8]>,
    ) {
        logwise::trace_sync!(
            "nop tex_image_2d {target} level {level} {w}x{h}",
            target = logwise::privacy::LogIt(GlEnum(target)),
            level = level,
            w = width,
            h = height
        );
    }

    fn tex_sub_image_2d(
        &mut self,
        target: GLenum,
        level: GLint,
        _xoffset: GLint,
        _yoffset: GLint,
        width: GLsizei,
        height: GLsizei,
        _format: GLenum,
        _ty: GLenum,
        _pixels: Option<&[u8]>,
    ) {
        logwise::trace_sync!(
            "nop tex_sub_image_2d {target} level {level} {w}x{h}",
            target = logwise::privacy::LogIt(GlEnum(target)),
            level = level,
            w = width,
            h = height
        );
    }

    fn bind_texture(&mut self, target: GLenum, texture: GLuint) {
        logwise::trace_sync!(
            "nop bind_texture {target} {texture}",
            target = logwise::privacy::LogIt(GlEnum(target)),
            texture = texture
        );
    }

    fn active_texture(&mut self, texture: GLenum) {
        logwise::trace_sync!("nop active_texture {texture}", texture = texture);
    }

    fn client_active_texture(&mut self, texture: GLenum) {
        logwise::trace_sync!("nop client_active_texture {texture}", texture = texture);
    }

    fn tex_parameteri(&mut self, _target: GLenum, pname: GLenum, param: GLint) {
        logwise::trace_sync!(
            "nop tex_parameteri {pname}={param}",
            pname = pname,
            param = param
        );
    }

    fn tex_envf(&mut self, _target: GLenum, pname: GLenum, _param: GLfloat) {
        logwise::trace_sync!("nop tex_envf {pname}", pname = pname);
    }

    fn delete_textures(&mut self, textures: &[GLuint]) {
        logwise::trace_sync!("nop delete_textures {n}", n = textures.len());
    }

    fn pixel_storei(&mut self, pname: GLenum, param: GLint) {
        logwise::trace_sync!(
            "nop pixel_storei {pname}={param}",
            pname = logwise::privacy::LogIt(GlEnum(pname)),
            param = param
        );
    }
}
