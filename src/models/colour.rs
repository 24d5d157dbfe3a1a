use crate::error::ValidationError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
}

/// Convert a hex string (no leading '#') to an RGB triple.
///
/// A 3 character string expands each digit `d` into the channel `dd`, so
/// `"abc"` becomes (0xaa, 0xbb, 0xcc). Anything else is read as literal
/// byte pairs at offsets 0-1, 2-3 and 4-5; trailing characters are ignored.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ValidationError> {
    let invalid = || ValidationError::InvalidHex(hex.to_string());

    if hex.len() == 3 {
        let mut channels = [0u8; 3];
        for (slot, c) in channels.iter_mut().zip(hex.chars()) {
            let digit = c.to_digit(16).ok_or_else(invalid)? as u8;
            *slot = digit * 0x11;
        }
        return Ok(Rgb {
            r: channels[0],
            g: channels[1],
            b: channels[2],
        });
    }

    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(invalid)
    };

    Ok(Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}
