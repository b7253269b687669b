// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//at the moment we only support a dynamically loaded GLES library

mod nop;
pub use nop::NopDriver;

#[cfg(feature = "backend_gles")]
mod gles;
#[cfg(feature = "backend_gles")]
pub use gles::{DEFAULT_LIBRARY, GlesDriver};

/// Driver used when the embedder doesn't pick one.
#[cfg(feature = "backend_gles")]
pub type DefaultDriver = GlesDriver;
#[cfg(not(feature = "backend_gles"))]
pub type DefaultDriver = NopDriver;
