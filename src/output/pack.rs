//! Bit packing in the OLED's addressing order
//!
//! Byte layout: for each 8-column block, one byte per row, top row first.
//! Bit `b` of a byte is the pixel in column `block * 8 + b`.

use crate::rasterizer::Bitmap;

/// Bytes per packed frame
pub fn packed_len(width: usize, height: usize) -> usize {
    width / 8 * height
}

/// Pack a bitmap, block-major then row
pub fn pack_bitmap(bitmap: &Bitmap) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(packed_len(bitmap.width, bitmap.height));
    for block in 0..bitmap.width / 8 {
        for y in 0..bitmap.height {
            let mut byte = 0u8;
            for bit in 0..8 {
                if bitmap.get(block * 8 + bit, y) {
                    byte |= 1 << bit;
                }
            }
            bytes.push(byte);
        }
    }
    bytes
}

/// Inverse of [`pack_bitmap`]. None if the byte count does not fit the size.
pub fn unpack_bitmap(bytes: &[u8], width: usize, height: usize) -> Option<Bitmap> {
    if width % 8 != 0 || bytes.len() != packed_len(width, height) {
        return None;
    }
    let mut bitmap = Bitmap::new(width, height);
    for (i, &byte) in bytes.iter().enumerate() {
        let block = i / height;
        let y = i % height;
        for bit in 0..8 {
            bitmap.set(block * 8 + bit, y, byte & (1 << bit) != 0);
        }
    }
    Some(bitmap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_order_within_byte() {
        let mut bitmap = Bitmap::new(8, 1);
        bitmap.set(0, 0, true);
        bitmap.set(7, 0, true);
        assert_eq!(pack_bitmap(&bitmap), vec![0b1000_0001]);
    }

    #[test]
    fn test_block_major_order() {
        let mut bitmap = Bitmap::new(16, 3);
        bitmap.set(1, 2, true); // block 0, row 2
        bitmap.set(9, 0, true); // block 1, row 0
        let bytes = pack_bitmap(&bitmap);
        assert_eq!(bytes, vec![0, 0, 0b10, 0b10, 0, 0]);
    }

    #[test]
    fn test_unpack_restores_bitmap() {
        let mut bitmap = Bitmap::new(32, 128);
        for y in 0..128 {
            for x in 0..32 {
                bitmap.set(x, y, (x * 7 + y * 3) % 5 < 2);
            }
        }
        let bytes = pack_bitmap(&bitmap);
        assert_eq!(bytes.len(), 512);
        assert_eq!(unpack_bitmap(&bytes, 32, 128), Some(bitmap));
    }

    #[test]
    fn test_unpack_rejects_wrong_length() {
        assert!(unpack_bitmap(&[0; 10], 32, 128).is_none());
        assert!(unpack_bitmap(&[0; 12], 12, 8).is_none());
    }
}
