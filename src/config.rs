use clap::Parser;

pub const DEFAULT_STOPS: &str = "0:f80a19,50:f8e800,100:00862d";

/// Runtime configuration, populated from the command line.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gradbar",
    about = "Serve horizontal colour-gradient scale bars as PNG"
)]
pub struct Config {
    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// Image width in pixels when a request does not specify one
    #[arg(long, default_value_t = 250)]
    pub default_width: u32,

    /// Image height in pixels when a request does not specify one
    #[arg(long, default_value_t = 25)]
    pub default_height: u32,

    /// Gradient stops used when a request does not specify any,
    /// as a position:hex list
    #[arg(long, default_value = DEFAULT_STOPS)]
    pub default_stops: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8000,
            default_width: 250,
            default_height: 25,
            default_stops: DEFAULT_STOPS.to_string(),
        }
    }
}
