use crate::config::Config;
use crate::endpoints::server::AppState;
use crate::gradient::GradientBuilder;
use crate::models::ColourStop;
use crate::traits::{ImageResponse, Rasterizer};
use crate::utils::stops::parse_stop_list;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters shared by `/gradient` and `/info`. Every field falls
/// back to the configured default when absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GradientParams {
    pub stops: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub value: Option<f64>,
}

#[derive(Serialize)]
struct InfoResponse {
    width: u32,
    height: u32,
    min: Option<f64>,
    max: Option<f64>,
    value: Option<f64>,
    marker_column: Option<u32>,
    stops: Vec<ColourStop>,
}

/// Assemble a ready-to-render builder from the request, falling back to the
/// configured defaults for anything the query leaves out.
pub(crate) fn build_gradient(
    params: &GradientParams,
    config: &Config,
) -> Result<GradientBuilder, String> {
    let width = params.width.unwrap_or(config.default_width);
    let height = params.height.unwrap_or(config.default_height);
    let stop_list = match &params.stops {
        Some(raw) => parse_stop_list(raw)?,
        None => parse_stop_list(&config.default_stops)?,
    };

    let mut builder = GradientBuilder::new(width, height).map_err(|e| e.to_string())?;
    for (position, hex) in &stop_list {
        builder
            .add_position(*position)
            .map_err(|e| e.to_string())?
            .add_colour(hex)
            .map_err(|e| e.to_string())?;
    }
    builder.calculate_rel_to_abs();
    builder.set_min_value(params.min).map_err(|e| e.to_string())?;
    builder.set_max_value(params.max).map_err(|e| e.to_string())?;
    builder.set_value(params.value);

    Ok(builder)
}

pub(crate) fn render_png(
    params: &GradientParams,
    config: &Config,
    rasterizer: &dyn Rasterizer,
) -> Result<ImageResponse, String> {
    let mut builder = build_gradient(params, config)?;
    builder.fill_with_gradient().map_err(|e| e.to_string())?;
    builder.draw_value().map_err(|e| e.to_string())?;

    let frame = builder
        .frame()
        .ok_or_else(|| "no frame was rendered".to_string())?;
    rasterizer.rasterize(frame)
}

pub async fn gradient_handler(
    Query(params): Query<GradientParams>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match render_png(&params, &state.config, state.rasterizer.as_ref()) {
        Ok(image) => axum::http::Response::builder()
            .header("Content-Type", image.content_type)
            .body(axum::body::Body::from(image.bytes))
            .unwrap()
            .into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, e).into_response(),
    }
}

pub async fn info_handler(
    Query(params): Query<GradientParams>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    match build_gradient(&params, &state.config) {
        Ok(builder) => {
            let marker_column = builder.marker_column();
            let internals = builder.internal_state();
            (
                StatusCode::OK,
                Json(InfoResponse {
                    width: internals.width,
                    height: internals.height,
                    min: internals.min,
                    max: internals.max,
                    value: internals.value,
                    marker_column,
                    stops: internals.stops.to_vec(),
                }),
            )
                .into_response()
        }
        Err(e) => (StatusCode::BAD_REQUEST, e).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PngRasterizer;

    #[test]
    fn defaults_fill_in_everything_the_query_omits() {
        let params = GradientParams::default();
        let builder = build_gradient(&params, &Config::default()).unwrap();

        let state = builder.internal_state();
        assert_eq!(state.width, 250);
        assert_eq!(state.height, 25);
        assert_eq!(state.stops.len(), 3);
        // positions already converted: 0%, 50% and 100% of 250 columns
        assert_eq!(state.stops[0].absolute, 0);
        assert_eq!(state.stops[1].absolute, 125);
        assert_eq!(state.stops[2].absolute, 250);
    }

    #[test]
    fn query_parameters_override_the_defaults() {
        let params = GradientParams {
            stops: Some("0:000,100:fff".to_string()),
            width: Some(1000),
            height: Some(70),
            min: Some(200.0),
            max: Some(500.0),
            value: Some(305.0),
        };
        let builder = build_gradient(&params, &Config::default()).unwrap();

        let state = builder.internal_state();
        assert_eq!(state.width, 1000);
        assert_eq!(state.stops.len(), 2);
        assert_eq!(state.min, Some(200.0));
        assert_eq!(state.stops[0].value, Some(200.0));
        assert_eq!(state.stops[1].value, Some(500.0));
        assert_eq!(builder.marker_column(), Some(350));
    }

    #[test]
    fn malformed_queries_are_rejected_with_the_validation_message() {
        let bad_stops = GradientParams {
            stops: Some("0:#fff,100:000".to_string()),
            ..Default::default()
        };
        let err = build_gradient(&bad_stops, &Config::default()).unwrap_err();
        assert!(err.contains("without a leading '#'"));

        let bad_position = GradientParams {
            stops: Some("0:fff,101:000".to_string()),
            ..Default::default()
        };
        let err = build_gradient(&bad_position, &Config::default()).unwrap_err();
        assert!(err.contains("outside the valid range"));
    }

    #[test]
    fn min_max_on_an_empty_stop_list_is_rejected() {
        let params = GradientParams {
            stops: Some("".to_string()),
            min: Some(0.0),
            ..Default::default()
        };
        let err = build_gradient(&params, &Config::default()).unwrap_err();
        assert!(err.contains("at least one stop"));
    }

    #[test]
    fn info_response_serializes_the_builder_internals() {
        let params = GradientParams {
            min: Some(200.0),
            max: Some(500.0),
            value: Some(305.0),
            ..Default::default()
        };
        let builder = build_gradient(&params, &Config::default()).unwrap();

        let marker_column = builder.marker_column();
        let internals = builder.internal_state();
        let json = serde_json::to_value(InfoResponse {
            width: internals.width,
            height: internals.height,
            min: internals.min,
            max: internals.max,
            value: internals.value,
            marker_column,
            stops: internals.stops.to_vec(),
        })
        .unwrap();

        assert_eq!(json["width"], 250);
        assert_eq!(json["height"], 25);
        // 35% of 250 columns, truncated
        assert_eq!(json["marker_column"], 87);
        assert_eq!(json["stops"][0]["position"], 0);
        assert_eq!(json["stops"][0]["absolute"], 0);
        assert_eq!(json["stops"][0]["colour"]["r"], 248);
        assert_eq!(json["stops"][0]["value"], 200.0);
        assert_eq!(json["stops"][2]["value"], 500.0);
    }

    #[test]
    fn full_request_renders_a_png() {
        let params = GradientParams {
            min: Some(0.0),
            max: Some(100.0),
            value: Some(50.0),
            ..Default::default()
        };
        let image = render_png(&params, &Config::default(), &PngRasterizer).unwrap();

        assert_eq!(image.content_type, "image/png");
        let decoded = image::load_from_memory(&image.bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (250, 25));
        // the marker sits at half the width
        assert_eq!(decoded.get_pixel(125, 0).0, [0, 0, 0]);
    }
}
