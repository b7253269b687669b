// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::Error;
use crate::convert::PixelDumper;
use crate::gl::{self, GLenum, GLsizei, GLuint, GlEnum};
use png::{BitDepth, ColorType};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// PNG layout for an 8-bit-per-channel format, if PNG has one.
fn png_color_type(format: GLenum, ty: GLenum) -> Option<ColorType> {
    if ty != gl::UNSIGNED_BYTE {
        return None;
    }
    match format {
        gl::ALPHA | gl::LUMINANCE => Some(ColorType::Grayscale),
        gl::LUMINANCE_ALPHA => Some(ColorType::GrayscaleAlpha),
        gl::RGB => Some(ColorType::Rgb),
        gl::RGBA => Some(ColorType::Rgba),
        _ => None,
    }
}

/// Dumps uploads as `tex.<texture>.png` files in a directory.
#[derive(Debug, Clone)]
pub struct PngDumper {
    dir: PathBuf,
}

impl PngDumper {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, texture: GLuint) -> PathBuf {
        self.dir.join(format!("tex.{texture}.png"))
    }
}

impl PixelDumper for PngDumper {
    fn dump(
        &self,
        pixels: &[u8],
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        ty: GLenum,
        texture: GLuint,
    ) -> Result<(), Error> {
        let Some(color_type) = png_color_type(format, ty) else {
            return Err(Error::DumpUnsupported {
                format: GlEnum(format),
                ty: GlEnum(ty),
            });
        };
        if width < 0 || height < 0 {
            return Err(Error::NegativeSize { width, height });
        }
        let required = width as usize * height as usize * color_type.samples();
        if pixels.len() < required {
            return Err(Error::SourceTooSmall {
                required,
                actual: pixels.len(),
            });
        }

        let path = self.path_for(texture);
        let file = BufWriter::new(File::create(&path)?);
        let mut encoder = png::Encoder::new(file, width as u32, height as u32);
        encoder.set_color(color_type);
        encoder.set_depth(BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&pixels[..required])?;
        writer.finish()?;
        logwise::info_sync!(
            "dumped texture {texture} to {path}",
            texture = texture,
            path = logwise::privacy::LogIt(&path)
        );
        Ok(())
    }
}
