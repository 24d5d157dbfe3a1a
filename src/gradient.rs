use crate::error::{RenderError, ValidationError};
use crate::models::{ColourStop, FrameBuffer, Rgb, hex_to_rgb};

/// Builds a horizontal colour gradient over a fixed-size canvas.
///
/// Colour stops are appended incrementally: `add_position` opens a new stop,
/// `add_colour` attaches a colour to the most recently opened one. After
/// `calculate_rel_to_abs` has mapped the relative stop positions onto pixel
/// columns, `fill_with_gradient` produces a fresh frame where every column is
/// a linear interpolation between its neighbouring stops, and `draw_value`
/// overlays a black marker line for a value placed on the min/max range.
///
/// The builder does not enforce call ordering. Filling before the relative
/// to absolute conversion simply uses the zero columns every stop starts
/// with, that is the caller's responsibility.
#[derive(Debug)]
pub struct GradientBuilder {
    width: u32,
    height: u32,
    stops: Vec<ColourStop>,
    min: Option<f64>,
    max: Option<f64>,
    value: Option<f64>,
    frame: Option<FrameBuffer>,
}

/// Read-only view of everything the builder holds, for test harnesses and
/// the `/info` endpoint.
pub struct InternalState<'a> {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub value: Option<f64>,
    pub width: u32,
    pub height: u32,
    pub stops: &'a [ColourStop],
    pub frame: Option<&'a FrameBuffer>,
}

impl GradientBuilder {
    pub fn new(width: u32, height: u32) -> Result<Self, ValidationError> {
        if width == 0 || height == 0 {
            return Err(ValidationError::ZeroDimension { width, height });
        }
        Ok(GradientBuilder {
            width,
            height,
            stops: Vec::new(),
            min: None,
            max: None,
            value: None,
            frame: None,
        })
    }

    /// Append a new stop at `position` percent of the image width.
    pub fn add_position(&mut self, position: i32) -> Result<&mut Self, ValidationError> {
        if !(0..=100).contains(&position) {
            return Err(ValidationError::PositionOutOfRange(position));
        }
        self.stops.push(ColourStop::at(position));
        Ok(self)
    }

    /// Attach a colour to the most recently appended stop. The hex value is
    /// given without a leading '#' and must be 3 or 6 characters long.
    pub fn add_colour(&mut self, hex: &str) -> Result<&mut Self, ValidationError> {
        if hex.contains('#') {
            return Err(ValidationError::HashPrefixed);
        }
        if hex.len() != 3 && hex.len() != 6 {
            return Err(ValidationError::BadHexLength(hex.len()));
        }
        let stop = self
            .stops
            .last_mut()
            .ok_or(ValidationError::MissingPosition)?;
        stop.colour = Some(hex_to_rgb(hex)?);
        Ok(self)
    }

    /// Map every stop's relative position onto a pixel column. Rounds half
    /// away from zero (`f64::round`). Idempotent, always recomputes from
    /// `position` and the fixed width.
    pub fn calculate_rel_to_abs(&mut self) {
        for stop in &mut self.stops {
            stop.absolute = if stop.position == 0 {
                0
            } else {
                (self.width as f64 / 100.0 * stop.position as f64).round() as u32
            };
        }
    }

    /// Set the scale minimum and anchor it to the first stop. `None` leaves
    /// any previously set minimum untouched.
    pub fn set_min_value(&mut self, min: Option<f64>) -> Result<(), ValidationError> {
        if let Some(min) = min {
            let first = self.stops.first_mut().ok_or(ValidationError::NoStops)?;
            first.value = Some(min);
            self.min = Some(min);
        }
        Ok(())
    }

    /// Set the scale maximum and anchor it to the last stop. `None` leaves
    /// any previously set maximum untouched.
    pub fn set_max_value(&mut self, max: Option<f64>) -> Result<(), ValidationError> {
        if let Some(max) = max {
            let last = self.stops.last_mut().ok_or(ValidationError::NoStops)?;
            last.value = Some(max);
            self.max = Some(max);
        }
        Ok(())
    }

    /// Set the value to be marked on the scale. `None` leaves any
    /// previously set value untouched, the last real write wins.
    pub fn set_value(&mut self, value: Option<f64>) {
        if let Some(value) = value {
            self.value = Some(value);
        }
    }

    /// Render the gradient into a fresh frame.
    ///
    /// For every adjacent stop pair the pixel columns from the first stop's
    /// column (inclusive) to the second's (exclusive) are walked, the first
    /// column carries the exact starting channels and each following column
    /// accumulates a per-channel linear step. Channels are truncated towards
    /// zero when drawn. Because every segment stops one column short of its
    /// end stop, the final stop's exact colour only ever appears as the
    /// start of a following segment.
    ///
    /// Segments whose stops land on the same column (or out of order) have
    /// no columns to walk and are skipped. The previous frame, if any, is
    /// only replaced when the render succeeds.
    pub fn fill_with_gradient(&mut self) -> Result<(), RenderError> {
        if self.stops.len() < 2 {
            return Err(RenderError::TooFewStops);
        }

        let mut frame = FrameBuffer::new(self.width, self.height);

        for pair in self.stops.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            let start = from.colour.ok_or(RenderError::MissingColour(from.position))?;
            let end = to.colour.ok_or(RenderError::MissingColour(to.position))?;

            let span = to.absolute as i64 - from.absolute as i64;
            if span <= 0 {
                continue;
            }

            let span = span as f64;
            let step_r = (end.r as f64 - start.r as f64) / span;
            let step_g = (end.g as f64 - start.g as f64) / span;
            let step_b = (end.b as f64 - start.b as f64) / span;

            let mut r = start.r as f64;
            let mut g = start.g as f64;
            let mut b = start.b as f64;

            for column in from.absolute..to.absolute {
                if column != from.absolute {
                    r += step_r;
                    g += step_g;
                    b += step_b;
                }
                frame.fill_column(
                    column,
                    Rgb {
                        r: r as u8,
                        g: g as u8,
                        b: b as u8,
                    },
                );
            }
        }

        self.frame = Some(frame);
        Ok(())
    }

    /// The column the marker would be drawn at, or `None` when min, max and
    /// value are not all set, the value falls outside the range, or the
    /// range is degenerate (`min == max`).
    pub fn marker_column(&self) -> Option<u32> {
        let (min, max, value) = (self.min?, self.max?, self.value?);
        if !(min..=max).contains(&value) || max == min {
            return None;
        }
        let rel = 100.0 * (value - min) / (max - min);
        // truncated, not rounded; a value at max lands one column past the
        // canvas and is clipped by the frame
        Some((self.width as f64 / 100.0 * rel) as u32)
    }

    /// Overlay a full-height black marker line at the value's column. Does
    /// nothing unless `min <= value <= max`.
    pub fn draw_value(&mut self) -> Result<(), RenderError> {
        let Some(column) = self.marker_column() else {
            return Ok(());
        };
        let frame = self.frame.as_mut().ok_or(RenderError::NoFrame)?;
        frame.fill_column(column, Rgb::BLACK);
        Ok(())
    }

    pub fn frame(&self) -> Option<&FrameBuffer> {
        self.frame.as_ref()
    }

    pub fn internal_state(&self) -> InternalState<'_> {
        InternalState {
            min: self.min,
            max: self.max,
            value: self.value,
            width: self.width,
            height: self.height,
            stops: &self.stops,
            frame: self.frame.as_ref(),
        }
    }
}
