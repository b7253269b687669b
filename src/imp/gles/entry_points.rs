// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Driver entry points, resolved by name on first use.

use crate::gl::{GLenum, GLfloat, GLint, GLsizei, GLuint};
use libloading::Library;
use std::cell::OnceCell;
use std::ffi::c_void;

pub(super) type TexImage2D = unsafe extern "C" fn(
    GLenum,
    GLint,
    GLint,
    GLsizei,
    GLsizei,
    GLint,
    GLenum,
    GLenum,
    *const c_void,
);
pub(super) type TexSubImage2D = unsafe extern "C" fn(
    GLenum,
    GLint,
    GLint,
    GLint,
    GLsizei,
    GLsizei,
    GLenum,
    GLenum,
    *const c_void,
);
pub(super) type BindTexture = unsafe extern "C" fn(GLenum, GLuint);
pub(super) type ActiveTexture = unsafe extern "C" fn(GLenum);
pub(super) type TexParameteri = unsafe extern "C" fn(GLenum, GLenum, GLint);
pub(super) type TexEnvf = unsafe extern "C" fn(GLenum, GLenum, GLfloat);
pub(super) type DeleteTextures = unsafe extern "C" fn(GLsizei, *const GLuint);
pub(super) type PixelStorei = unsafe extern "C" fn(GLenum, GLint);

/// Each slot is filled once; a missing symbol is remembered as `None`.
#[derive(Default)]
pub(super) struct EntryPoints {
    pub tex_image_2d: OnceCell<Option<TexImage2D>>,
    pub tex_sub_image_2d: OnceCell<Option<TexSubImage2D>>,
    pub bind_texture: OnceCell<Option<BindTexture>>,
    pub active_texture: OnceCell<Option<ActiveTexture>>,
    pub client_active_texture: OnceCell<Option<ActiveTexture>>,
    pub tex_parameteri: OnceCell<Option<TexParameteri>>,
    pub tex_envf: OnceCell<Option<TexEnvf>>,
    pub delete_textures: OnceCell<Option<DeleteTextures>>,
    pub pixel_storei: OnceCell<Option<PixelStorei>>,
}

/// Looks `name` up in `library` the first time, then returns the cached result.
///
/// `F` must be the function-pointer type the library exports under `name`.
/// The pointer stays valid for as long as `library` is loaded.
pub(super) fn resolve<F: Copy>(
    library: &Library,
    slot: &OnceCell<Option<F>>,
    name: &'static str,
) -> Option<F> {
    *slot.get_or_init(|| {
        //safe as long as F matches the exported signature, which the type aliases above pin down
        match unsafe { library.get::<F>(name.as_bytes()) } {
            Ok(symbol) => {
                logwise::trace_sync!("resolved {name}", name = name);
                Some(*symbol)
            }
            Err(err) => {
                logwise::error_sync!(
                    "driver has no {name}: {err}",
                    name = name,
                    err = logwise::privacy::LogIt(&err)
                );
                None
            }
        }
    })
}
