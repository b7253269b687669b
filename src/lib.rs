// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! texture_shim runs legacy desktop texturing calls on an embedded (GLES 1.x class)
driver.

Applications written against the desktop fixed-function API upload textures with
formats, types and unpack settings the embedded driver never learned.  This crate
sits between the two: it accepts the desktop calls, keeps the texture state the
driver cannot answer for, and forwards an equivalent call stream.

# What gets translated

| Desktop feature | What the driver receives |
|---|---|
| 1D, 3D and rectangle targets | `GL_TEXTURE_2D` |
| `GL_UNPACK_ROW_LENGTH`, `GL_UNPACK_SKIP_*` | a tightly packed copy of the sub-rectangle |
| format/type pairs outside the native allow-list | pixels converted to `GL_RGBA`/`GL_UNSIGNED_BYTE` |
| `GL_UNSIGNED_INT_8_8_8_8_REV` | the same bytes as `GL_UNSIGNED_BYTE` |
| `GL_CLAMP` wrap mode | `GL_CLAMP_TO_EDGE` |
| proxy targets | nothing |

Pixel conversion itself is delegated to a [PixelConverter] supplied by the embedder;
see [convert].

# Usage

```
use texture_shim::{TextureContext, RecordingDriver, DriverCall, gl};

let mut ctx = TextureContext::new(RecordingDriver::new());
ctx.bind_texture(gl::TEXTURE_2D, 1);
let pixels = [0xFFu8; 2 * 2 * 4];
ctx.tex_image_2d(
    gl::TEXTURE_2D,
    0,
    gl::RGBA as i32,
    2,
    2,
    0,
    gl::RGBA,
    gl::UNSIGNED_BYTE,
    Some(&pixels),
);
assert_eq!(ctx.get_error(), gl::NO_ERROR);
assert_eq!(ctx.registry().get(1).unwrap().width, 2);
assert!(matches!(ctx.driver().calls.last(), Some(DriverCall::TexImage2D { .. })));
```

# Backends

The `backend_gles` feature (on by default) provides [GlesDriver], which loads the
driver library at runtime and resolves each entry point on first use.  Without it,
[DefaultDriver] is [NopDriver].  Any type implementing [Driver] can be used.

# Threading

A [TextureContext] is plain mutable state with no internal locking.  Use it from
the thread that owns the graphics context.
*/

pub mod gl;
mod error;
mod bittricks;
pub mod buffer;
pub mod convert;
pub mod pixel_formats;
pub mod unpack;
pub mod registry;
pub mod driver;
mod imp;
mod config;
pub mod command_list;
pub mod coords;
mod context;
mod upload;

pub use bittricks::npot;
pub use buffer::PixelBuffer;
pub use command_list::{CommandList, TextureCommand};
pub use config::{Config, SHRINK_VAR, TEXDUMP_DIR_VAR, TEXDUMP_VAR};
pub use context::TextureContext;
pub use convert::{ConversionError, PixelConverter, PixelDumper, Unconverting};
pub use driver::{Driver, DriverCall, RecordingDriver};
pub use error::{Error, ErrorFlag};
pub use imp::{DefaultDriver, NopDriver};
#[cfg(feature = "backend_gles")]
pub use imp::{DEFAULT_LIBRARY, GlesDriver};
pub use pixel_formats::PngDumper;
pub use registry::{MAX_TEXTURE_UNITS, TextureRecord, TextureRegistry};
pub use unpack::UnpackConfig;
