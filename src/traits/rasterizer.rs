use crate::models::FrameBuffer;

pub struct ImageResponse {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Turns a rendered frame into an encoded image ready for transport.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, frame: &FrameBuffer) -> Result<ImageResponse, String>;
}
