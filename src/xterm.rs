//! The fixed xterm 256-color palette and nearest-color quantization.
//!
//! Layout of the palette:
//! - 0..=15: the 16 named ANSI colors (xterm defaults)
//! - 16..=231: 6x6x6 color cube, channel levels 0, 95, 135, 175, 215, 255
//! - 232..=255: 24-step grayscale ramp, 8 + 10*n

use crate::color::Rgb;
use crate::error::Result;

/// xterm's default values for the 16 named ANSI colors.
const ANSI_16: [Rgb; 16] = [
    Rgb::new(0x00, 0x00, 0x00), // black
    Rgb::new(0x80, 0x00, 0x00), // red
    Rgb::new(0x00, 0x80, 0x00), // green
    Rgb::new(0x80, 0x80, 0x00), // yellow
    Rgb::new(0x00, 0x00, 0x80), // blue
    Rgb::new(0x80, 0x00, 0x80), // magenta
    Rgb::new(0x00, 0x80, 0x80), // cyan
    Rgb::new(0xc0, 0xc0, 0xc0), // white
    Rgb::new(0x80, 0x80, 0x80), // bright black
    Rgb::new(0xff, 0x00, 0x00), // bright red
    Rgb::new(0x00, 0xff, 0x00), // bright green
    Rgb::new(0xff, 0xff, 0x00), // bright yellow
    Rgb::new(0x00, 0x00, 0xff), // bright blue
    Rgb::new(0xff, 0x00, 0xff), // bright magenta
    Rgb::new(0x00, 0xff, 0xff), // bright cyan
    Rgb::new(0xff, 0xff, 0xff), // bright white
];

/// Channel levels of the 6x6x6 color cube.
const CUBE_LEVELS: [u8; 6] = [0x00, 0x5f, 0x87, 0xaf, 0xd7, 0xff];

const fn build_palette() -> [Rgb; 256] {
    let mut table = [Rgb::new(0, 0, 0); 256];
    let mut i = 0;
    while i < 16 {
        table[i] = ANSI_16[i];
        i += 1;
    }
    while i < 232 {
        let n = i - 16;
        table[i] = Rgb::new(
            CUBE_LEVELS[n / 36],
            CUBE_LEVELS[(n / 6) % 6],
            CUBE_LEVELS[n % 6],
        );
        i += 1;
    }
    while i < 256 {
        table[i] = Rgb::new(
            8 + 10 * (i - 232) as u8,
            8 + 10 * (i - 232) as u8,
            8 + 10 * (i - 232) as u8,
        );
        i += 1;
    }
    table
}

/// The full 256-entry palette, fixed at compile time.
pub const PALETTE: [Rgb; 256] = build_palette();

/// Index of the palette entry closest to `color` under Euclidean distance
/// in RGB space. Ties go to the lowest index, so exact duplicates (pure
/// black lives at 0 and 16, pure white at 15 and 231) resolve to the
/// named ANSI entry.
///
/// Pure function over a `const` table; safe to call from any thread.
pub fn nearest_index(color: Rgb) -> u8 {
    let mut best = 0usize;
    let mut best_dist = u32::MAX;
    for (i, entry) in PALETTE.iter().enumerate() {
        let dist = color.distance_sq(*entry);
        if dist < best_dist {
            best = i;
            best_dist = dist;
            if dist == 0 {
                break;
            }
        }
    }
    best as u8
}

/// Quantize a hex color string straight to a palette index.
pub fn hex_to_index(hex: &str) -> Result<u8> {
    Ok(nearest_index(Rgb::from_hex(hex)?))
}
