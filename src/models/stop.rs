use super::colour::Rgb;
use serde::Serialize;

/// One gradient anchor. Stops are kept in insertion order, the order of
/// segments is meaningful and never sorted by position.
#[derive(Debug, Clone, Serialize)]
pub struct ColourStop {
    /// Position relative to the image width, in percent (0 to 100).
    pub position: i32,
    /// Colour shown at this stop. Must be set before the stop can
    /// participate in a render.
    pub colour: Option<Rgb>,
    /// Pixel column derived from `position`, only meaningful after the
    /// relative to absolute conversion has run. Zero until then.
    pub absolute: u32,
    /// Anchors the min/max range to this stop. Only stamped onto the first
    /// and last stop.
    pub value: Option<f64>,
}

impl ColourStop {
    pub fn at(position: i32) -> Self {
        ColourStop {
            position,
            colour: None,
            absolute: 0,
            value: None,
        }
    }
}
