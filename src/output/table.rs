//! Bitmap table emitter
//!
//! Writes packed frames as C array initializers ready to paste into firmware:
//!
//! ```text
//! static const char ANIM_FRAME0 [] PROGMEM = {
//! 0x00, 0x1C, ... (row_len entries per line)
//! ...
//! 0x00, 0x00
//! };
//! ```

use std::io::{self, Write};

/// Write one frame block
pub fn write_frame_table<W: Write>(
    out: &mut W,
    name: &str,
    index: usize,
    bytes: &[u8],
    row_len: usize,
) -> io::Result<()> {
    writeln!(out, "static const char {}{} [] PROGMEM = {{", name, index)?;
    let row_len = row_len.max(1);
    for (row, chunk) in bytes.chunks(row_len).enumerate() {
        for (i, byte) in chunk.iter().enumerate() {
            let last = row * row_len + i + 1 == bytes.len();
            if last {
                write!(out, "0x{:02X}", byte)?;
            } else {
                write!(out, "0x{:02X}, ", byte)?;
            }
        }
        writeln!(out)?;
    }
    writeln!(out, "}};")
}
