use crate::config::Config;
use crate::endpoints::handlers::{gradient_handler, info_handler};
use crate::render::PngRasterizer;
use crate::traits::Rasterizer;
use crate::utils::stops::parse_stop_list;
use crate::utils::summary::print_stop_summary;
use axum::{Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub rasterizer: Arc<dyn Rasterizer>,
}

pub struct GradientServer {
    config: Config,
    state: AppState,
}

impl GradientServer {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        // fail fast on an unusable default gradient rather than on the
        // first defaulted request
        let default_stops =
            parse_stop_list(&config.default_stops).map_err(anyhow::Error::msg)?;
        if default_stops.len() < 2 {
            anyhow::bail!(
                "default stop list '{}' needs at least 2 stops",
                config.default_stops
            );
        }

        let state = AppState {
            config: config.clone(),
            rasterizer: Arc::new(PngRasterizer),
        };
        Ok(Self { config, state })
    }

    pub async fn start(self) -> anyhow::Result<()> {
        let default_stops = parse_stop_list(&self.config.default_stops)
            .map_err(anyhow::Error::msg)?;
        print_stop_summary(&default_stops);

        let state = Arc::new(self.state);
        let app = Router::new()
            .route("/gradient", get(gradient_handler))
            .route("/info", get(info_handler))
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = tokio::net::TcpListener::bind(addr).await?;

        println!(
            r#"
    🚀 gradbar serving on {}

    🌈 Render the default scale bar
       → http://{}/gradient

    🎯 Mark a measured value on a custom scale
       → http://{}/gradient?stops=0:f80a19,50:f8e800,100:00862d&min=200&max=500&value=305

    📚 Inspect the assembled builder (JSON)
       → http://{}/info
            "#,
            addr, addr, addr, addr
        );

        axum::serve(listener, app).await?;

        Ok(())
    }
}
