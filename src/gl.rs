// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
GL scalar types and the enum values this layer understands.

Values are the ones shared by desktop GL and GL ES headers.  Only the
texturing subset is defined here.
*/

use std::fmt::{Debug, Formatter};

pub type GLenum = u32;
pub type GLint = i32;
pub type GLuint = u32;
pub type GLsizei = i32;
pub type GLfloat = f32;
pub type GLclampf = f32;
pub type GLboolean = u8;

pub const FALSE: GLboolean = 0;
pub const TRUE: GLboolean = 1;

// errors
pub const NO_ERROR: GLenum = 0;
pub const INVALID_ENUM: GLenum = 0x0500;
pub const INVALID_VALUE: GLenum = 0x0501;
pub const INVALID_OPERATION: GLenum = 0x0502;

// targets
pub const TEXTURE_1D: GLenum = 0x0DE0;
pub const TEXTURE_2D: GLenum = 0x0DE1;
pub const TEXTURE_3D: GLenum = 0x806F;
pub const TEXTURE_RECTANGLE_ARB: GLenum = 0x84F5;
pub const TEXTURE_CUBE_MAP: GLenum = 0x8513;
pub const PROXY_TEXTURE_1D: GLenum = 0x8063;
pub const PROXY_TEXTURE_2D: GLenum = 0x8064;
pub const PROXY_TEXTURE_3D: GLenum = 0x8070;
pub const PROXY_TEXTURE_RECTANGLE_ARB: GLenum = 0x84F7;
pub const PROXY_TEXTURE_CUBE_MAP: GLenum = 0x851B;

pub const TEXTURE0: GLenum = 0x84C0;

// formats
pub const COLOR_INDEX: GLenum = 0x1900;
pub const STENCIL_INDEX: GLenum = 0x1901;
pub const DEPTH_COMPONENT: GLenum = 0x1902;
pub const RED: GLenum = 0x1903;
pub const GREEN: GLenum = 0x1904;
pub const BLUE: GLenum = 0x1905;
pub const ALPHA: GLenum = 0x1906;
pub const RGB: GLenum = 0x1907;
pub const RGBA: GLenum = 0x1908;
pub const LUMINANCE: GLenum = 0x1909;
pub const LUMINANCE_ALPHA: GLenum = 0x190A;
pub const BITMAP: GLenum = 0x1A00;
pub const INTENSITY: GLenum = 0x8049;
pub const BGR: GLenum = 0x80E0;
pub const BGRA: GLenum = 0x80E1;
pub const RG: GLenum = 0x8227;

// types
pub const BYTE: GLenum = 0x1400;
pub const UNSIGNED_BYTE: GLenum = 0x1401;
pub const SHORT: GLenum = 0x1402;
pub const UNSIGNED_SHORT: GLenum = 0x1403;
pub const INT: GLenum = 0x1404;
pub const UNSIGNED_INT: GLenum = 0x1405;
pub const FLOAT: GLenum = 0x1406;
pub const HALF_FLOAT: GLenum = 0x140B;
pub const UNSIGNED_BYTE_3_3_2: GLenum = 0x8032;
pub const UNSIGNED_SHORT_4_4_4_4: GLenum = 0x8033;
pub const UNSIGNED_SHORT_5_5_5_1: GLenum = 0x8034;
pub const UNSIGNED_INT_8_8_8_8: GLenum = 0x8035;
pub const UNSIGNED_INT_10_10_10_2: GLenum = 0x8036;
pub const UNSIGNED_BYTE_2_3_3_REV: GLenum = 0x8362;
pub const UNSIGNED_SHORT_5_6_5: GLenum = 0x8363;
pub const UNSIGNED_SHORT_5_6_5_REV: GLenum = 0x8364;
pub const UNSIGNED_SHORT_4_4_4_4_REV: GLenum = 0x8365;
pub const UNSIGNED_SHORT_1_5_5_5_REV: GLenum = 0x8366;
pub const UNSIGNED_INT_8_8_8_8_REV: GLenum = 0x8367;
pub const UNSIGNED_INT_2_10_10_10_REV: GLenum = 0x8368;

// pixel store
pub const UNPACK_SWAP_BYTES: GLenum = 0x0CF0;
pub const UNPACK_LSB_FIRST: GLenum = 0x0CF1;
pub const UNPACK_ROW_LENGTH: GLenum = 0x0CF2;
pub const UNPACK_SKIP_ROWS: GLenum = 0x0CF3;
pub const UNPACK_SKIP_PIXELS: GLenum = 0x0CF4;
pub const UNPACK_ALIGNMENT: GLenum = 0x0CF5;
pub const PACK_ALIGNMENT: GLenum = 0x0D05;

// texture parameters
pub const TEXTURE_MAG_FILTER: GLenum = 0x2800;
pub const TEXTURE_MIN_FILTER: GLenum = 0x2801;
pub const TEXTURE_WRAP_S: GLenum = 0x2802;
pub const TEXTURE_WRAP_T: GLenum = 0x2803;
pub const TEXTURE_WRAP_R: GLenum = 0x8072;
pub const CLAMP: GLenum = 0x2900;
pub const REPEAT: GLenum = 0x2901;
pub const CLAMP_TO_EDGE: GLenum = 0x812F;
pub const LINEAR: GLenum = 0x2601;

// texture environment
pub const TEXTURE_ENV: GLenum = 0x2300;
pub const TEXTURE_ENV_MODE: GLenum = 0x2200;
pub const MODULATE: GLenum = 0x2100;

/// Maps a desktop texture target onto the closest target the embedded driver has.
///
/// 1D, 3D and rectangle textures are all stored as 2D textures; their proxy
/// counterparts become the 2D proxy.
pub const fn map_tex_target(target: GLenum) -> GLenum {
    match target {
        TEXTURE_1D | TEXTURE_3D | TEXTURE_RECTANGLE_ARB => TEXTURE_2D,
        PROXY_TEXTURE_1D | PROXY_TEXTURE_3D | PROXY_TEXTURE_RECTANGLE_ARB => PROXY_TEXTURE_2D,
        other => other,
    }
}

pub const fn is_proxy_target(target: GLenum) -> bool {
    matches!(
        target,
        PROXY_TEXTURE_1D
            | PROXY_TEXTURE_2D
            | PROXY_TEXTURE_3D
            | PROXY_TEXTURE_RECTANGLE_ARB
            | PROXY_TEXTURE_CUBE_MAP
    )
}

/// An enum value that prints as its symbolic name.
///
/// Used for diagnostics, e.g. `logwise::privacy::LogIt(GlEnum(format))`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct GlEnum(pub GLenum);

impl GlEnum {
    pub const fn name(self) -> Option<&'static str> {
        Some(match self.0 {
            TEXTURE_1D => "GL_TEXTURE_1D",
            TEXTURE_2D => "GL_TEXTURE_2D",
            TEXTURE_3D => "GL_TEXTURE_3D",
            TEXTURE_RECTANGLE_ARB => "GL_TEXTURE_RECTANGLE_ARB",
            TEXTURE_CUBE_MAP => "GL_TEXTURE_CUBE_MAP",
            PROXY_TEXTURE_1D => "GL_PROXY_TEXTURE_1D",
            PROXY_TEXTURE_2D => "GL_PROXY_TEXTURE_2D",
            PROXY_TEXTURE_3D => "GL_PROXY_TEXTURE_3D",
            PROXY_TEXTURE_RECTANGLE_ARB => "GL_PROXY_TEXTURE_RECTANGLE_ARB",
            PROXY_TEXTURE_CUBE_MAP => "GL_PROXY_TEXTURE_CUBE_MAP",
            COLOR_INDEX => "GL_COLOR_INDEX",
            STENCIL_INDEX => "GL_STENCIL_INDEX",
            DEPTH_COMPONENT => "GL_DEPTH_COMPONENT",
            RED => "GL_RED",
            GREEN => "GL_GREEN",
            BLUE => "GL_BLUE",
            ALPHA => "GL_ALPHA",
            RGB => "GL_RGB",
            RGBA => "GL_RGBA",
            LUMINANCE => "GL_LUMINANCE",
            LUMINANCE_ALPHA => "GL_LUMINANCE_ALPHA",
            BITMAP => "GL_BITMAP",
            INTENSITY => "GL_INTENSITY",
            BGR => "GL_BGR",
            BGRA => "GL_BGRA",
            RG => "GL_RG",
            BYTE => "GL_BYTE",
            UNSIGNED_BYTE => "GL_UNSIGNED_BYTE",
            SHORT => "GL_SHORT",
            UNSIGNED_SHORT => "GL_UNSIGNED_SHORT",
            INT => "GL_INT",
            UNSIGNED_INT => "GL_UNSIGNED_INT",
            FLOAT => "GL_FLOAT",
            HALF_FLOAT => "GL_HALF_FLOAT",
            UNSIGNED_BYTE_3_3_2 => "GL_UNSIGNED_BYTE_3_3_2",
            UNSIGNED_SHORT_4_4_4_4 => "GL_UNSIGNED_SHORT_4_4_4_4",
            UNSIGNED_SHORT_5_5_5_1 => "GL_UNSIGNED_SHORT_5_5_5_1",
            UNSIGNED_INT_8_8_8_8 => "GL_UNSIGNED_INT_8_8_8_8",
            UNSIGNED_INT_10_10_10_2 => "GL_UNSIGNED_INT_10_10_10_2",
            UNSIGNED_BYTE_2_3_3_REV => "GL_UNSIGNED_BYTE_2_3_3_REV",
            UNSIGNED_SHORT_5_6_5 => "GL_UNSIGNED_SHORT_5_6_5",
            UNSIGNED_SHORT_5_6_5_REV => "GL_UNSIGNED_SHORT_5_6_5_REV",
            UNSIGNED_SHORT_4_4_4_4_REV => "GL_UNSIGNED_SHORT_4_4_4_4_REV",
            UNSIGNED_SHORT_1_5_5_5_REV => "GL_UNSIGNED_SHORT_1_5_5_5_REV",
            UNSIGNED_INT_8_8_8_8_REV => "GL_UNSIGNED_INT_8_8_8_8_REV",
            UNSIGNED_INT_2_10_10_10_REV => "GL_UNSIGNED_INT_2_10_10_10_REV",
            UNPACK_SWAP_BYTES => "GL_UNPACK_SWAP_BYTES",
            UNPACK_LSB_FIRST => "GL_UNPACK_LSB_FIRST",
            UNPACK_ROW_LENGTH => "GL_UNPACK_ROW_LENGTH",
            UNPACK_SKIP_ROWS => "GL_UNPACK_SKIP_ROWS",
            UNPACK_SKIP_PIXELS => "GL_UNPACK_SKIP_PIXELS",
            UNPACK_ALIGNMENT => "GL_UNPACK_ALIGNMENT",
            PACK_ALIGNMENT => "GL_PACK_ALIGNMENT",
            _ => return None,
        })
    }
}

impl Debug for GlEnum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{:#06x}", self.0),
        }
    }
}
