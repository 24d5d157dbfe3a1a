pub mod png;

pub use png::PngRasterizer;
