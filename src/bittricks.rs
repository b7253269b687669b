// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
power-of-two padding.

todo: what does padding do to repeating textures?
*/

use crate::gl::GLsizei;

/// Smallest power of two that is at least `n`.  0 and negative sizes map to 0.
///
/// Sizes above 2^30 have no such power in range and saturate to `GLsizei::MAX`.
pub fn npot(n: GLsizei) -> GLsizei {
    if n <= 0 {
        return 0;
    }
    GLsizei::try_from((n as u32).next_power_of_two()).unwrap_or(GLsizei::MAX)
}
