// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Pixel data as it moves through the upload pipeline.

Each stage (row unpacking, conversion, debug shrinking) either passes the
caller's bytes through or produces a fresh intermediate.  [PixelBuffer] tracks
which one it is holding, so an intermediate is dropped exactly once when the
next stage replaces it and the caller's bytes are never touched.
*/

use std::borrow::Cow;

#[derive(Debug, Clone)]
pub struct PixelBuffer<'a> {
    bytes: Cow<'a, [u8]>,
}

impl<'a> PixelBuffer<'a> {
    /// Wraps the caller's bytes.
    pub fn original(bytes: &'a [u8]) -> Self {
        Self {
            bytes: Cow::Borrowed(bytes),
        }
    }

    /// Wraps an intermediate produced by some stage.
    pub fn owned(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Cow::Owned(bytes),
        }
    }

    pub fn is_original(&self) -> bool {
        matches!(self.bytes, Cow::Borrowed(_))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Replaces the contents with a newer intermediate.
    ///
    /// A previous intermediate is released here; the caller's bytes are not.
    pub fn replace(&mut self, bytes: Vec<u8>) {
        self.bytes = Cow::Owned(bytes);
    }

    /// Ends the buffer's life.  Intermediates are freed, originals are left alone.
    pub fn release(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn original_is_not_copied() {
        let data = [1u8, 2, 3, 4];
        let buffer = PixelBuffer::original(&data);
        assert!(buffer.is_original());
        assert_eq!(buffer.as_bytes().as_ptr(), data.as_ptr());
        buffer.release();
        assert_eq!(data, [1, 2, 3, 4]);
    }

    #[test]
    fn replace_switches_to_owned() {
        let data = [1u8, 2];
        let mut buffer = PixelBuffer::original(&data);
        buffer.replace(vec![9, 9, 9]);
        assert!(!buffer.is_original());
        assert_eq!(buffer.as_bytes(), &[9, 9, 9]);
        buffer.replace(vec![7]);
        assert_eq!(buffer.len(), 1);
    }
}
