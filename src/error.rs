use thiserror::Error;

/// Rejected input. The builder is left untouched by any call that fails
/// with one of these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("position {0} is outside the valid range (0 to 100 percent)")]
    PositionOutOfRange(i32),

    #[error("hex value must be given without a leading '#'")]
    HashPrefixed,

    #[error("hex value must be 3 or 6 characters long, got {0}")]
    BadHexLength(usize),

    #[error("'{0}' is not a valid hex colour")]
    InvalidHex(String),

    #[error("a position must be added before a colour can be attached to it")]
    MissingPosition,

    #[error("at least one stop must exist before setting min/max")]
    NoStops,
}

/// Failures while producing the pixel frame.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("too few colour stops for a gradient, at least 2 are required")]
    TooFewStops,

    #[error("stop at position {0}% has no colour assigned")]
    MissingColour(i32),

    #[error("no frame has been rendered yet")]
    NoFrame,
}
