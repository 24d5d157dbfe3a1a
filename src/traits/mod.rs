pub mod rasterizer;

pub use rasterizer::{ImageResponse, Rasterizer};
