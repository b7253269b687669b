// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Texture coordinate fixups for fixed-function coordinate arrays.

`coords` is a flat list of `(s, t)` pairs.
*/

use crate::gl::{GLfloat, GLsizei};

/// Rectangle textures address texels in pixels; the driver wants `[0, 1]`.
pub fn normalize_rect_coords(coords: &mut [GLfloat], width: GLsizei, height: GLsizei) {
    if width == 0 || height == 0 {
        return;
    }
    for pair in coords.chunks_exact_mut(2) {
        pair[0] /= width as GLfloat;
        pair[1] /= height as GLfloat;
    }
}

/// Rescales coordinates for an image uploaded into the corner of a padded texture.
pub fn scale_npot_coords(
    coords: &mut [GLfloat],
    width: GLsizei,
    height: GLsizei,
    padded_width: GLsizei,
    padded_height: GLsizei,
) {
    if width == 0 || height == 0 || padded_width == 0 || padded_height == 0 {
        return;
    }
    let w_ratio = width as GLfloat / padded_width as GLfloat;
    let h_ratio = height as GLfloat / padded_height as GLfloat;
    for pair in coords.chunks_exact_mut(2) {
        pair[0] *= w_ratio;
        pair[1] *= h_ratio;
    }
}
