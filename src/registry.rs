// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Texture object bookkeeping.

The registry owns one [TextureRecord] per texture name the application has
bound.  Texture units refer to records by name, so a deleted record is
unreachable from every unit before it is dropped.
*/

use crate::Error;
use crate::bittricks::npot;
use crate::gl::{self, GLenum, GLsizei, GLuint, GlEnum};
use std::collections::HashMap;

/// Number of texture units the layer tracks.
pub const MAX_TEXTURE_UNITS: usize = 8;

/// One texture object known to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureRecord {
    pub texture: GLuint,
    /// Target of the first bind.
    pub target: GLenum,
    /// Size of the last level 0 upload.
    pub width: GLsizei,
    pub height: GLsizei,
    /// Power-of-two bound of `width`/`height`.
    pub padded_width: GLsizei,
    pub padded_height: GLsizei,
    pub uploaded: bool,
}

impl TextureRecord {
    fn new(texture: GLuint, target: GLenum) -> Self {
        Self {
            texture,
            target,
            width: 0,
            height: 0,
            padded_width: 0,
            padded_height: 0,
            uploaded: false,
        }
    }
}

#[derive(Debug)]
pub struct TextureRegistry {
    textures: HashMap<GLuint, TextureRecord>,
    bound: [Option<GLuint>; MAX_TEXTURE_UNITS],
    rectangle: [bool; MAX_TEXTURE_UNITS],
    active: usize,
    client_active: usize,
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates a `GL_TEXTUREi` enum and returns `i`.
pub fn unit_index(unit: GLenum) -> Result<usize, Error> {
    match unit.checked_sub(gl::TEXTURE0) {
        Some(index) if (index as usize) < MAX_TEXTURE_UNITS => Ok(index as usize),
        _ => Err(Error::UnitOutOfRange {
            unit: GlEnum(unit),
            max: MAX_TEXTURE_UNITS - 1,
        }),
    }
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            bound: [None; MAX_TEXTURE_UNITS],
            rectangle: [false; MAX_TEXTURE_UNITS],
            active: 0,
            client_active: 0,
        }
    }

    /// Binds `texture` to the active unit, creating its record on first use.
    ///
    /// Name 0 clears the unit.  The unit's rectangle flag follows `target`
    /// either way.
    pub fn bind(&mut self, target: GLenum, texture: GLuint) {
        let active = self.active;
        if texture == 0 {
            self.bound[active] = None;
        } else {
            self.textures
                .entry(texture)
                .or_insert_with(|| TextureRecord::new(texture, target));
            self.bound[active] = Some(texture);
        }
        self.rectangle[active] = target == gl::TEXTURE_RECTANGLE_ARB;
    }

    /// Selects the unit later texture calls affect.  Out-of-range units leave
    /// the selection unchanged.
    pub fn set_active_unit(&mut self, unit: GLenum) -> Result<(), Error> {
        self.active = unit_index(unit)?;
        Ok(())
    }

    /// Selects the unit later coordinate-array calls affect.
    ///
    /// Returns whether the selection changed.
    pub fn set_client_active_unit(&mut self, unit: GLenum) -> Result<bool, Error> {
        let index = unit_index(unit)?;
        if index == self.client_active {
            return Ok(false);
        }
        self.client_active = index;
        Ok(true)
    }

    /// Forgets every named texture, unbinding it from all units first.
    /// Unknown names are ignored.
    pub fn delete(&mut self, textures: &[GLuint]) {
        for texture in textures {
            if !self.textures.contains_key(texture) {
                continue;
            }
            for slot in self.bound.iter_mut() {
                if *slot == Some(*texture) {
                    *slot = None;
                }
            }
            self.textures.remove(texture);
        }
    }

    /// Caches the size of a level 0 upload on the texture bound to `unit`.
    pub fn record_upload(&mut self, unit: usize, width: GLsizei, height: GLsizei) {
        let Some(record) = self
            .bound
            .get(unit)
            .copied()
            .flatten()
            .and_then(|texture| self.textures.get_mut(&texture))
        else {
            return;
        };
        record.width = width;
        record.height = height;
        record.padded_width = npot(width);
        record.padded_height = npot(height);
        record.uploaded = true;
    }

    pub fn get(&self, texture: GLuint) -> Option<&TextureRecord> {
        self.textures.get(&texture)
    }

    /// The record bound to `unit`, if any.
    pub fn bound(&self, unit: usize) -> Option<&TextureRecord> {
        self.bound
            .get(unit)
            .copied()
            .flatten()
            .and_then(|texture| self.textures.get(&texture))
    }

    pub fn bound_to_active(&self) -> Option<&TextureRecord> {
        self.bound(self.active)
    }

    /// Whether `unit` was last bound with the rectangle target.
    pub fn is_rectangle(&self, unit: usize) -> bool {
        self.rectangle.get(unit).copied().unwrap_or(false)
    }

    pub fn active_unit(&self) -> usize {
        self.active
    }

    pub fn client_active_unit(&self) -> usize {
        self.client_active
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
