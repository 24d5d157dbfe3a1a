pub mod config;
pub mod endpoints;
pub mod error;
pub mod gradient;
pub mod models;
pub mod render;
pub mod traits;
pub mod utils;

pub use config::Config;
pub use endpoints::server::GradientServer;
pub use error::{RenderError, ValidationError};
pub use gradient::GradientBuilder;
