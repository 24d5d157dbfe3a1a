pub mod colour;
pub mod frame;
pub mod stop;

pub use colour::{Rgb, hex_to_rgb};
pub use frame::FrameBuffer;
pub use stop::ColourStop;
