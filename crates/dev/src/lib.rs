//! A small web dashboard for exploring tangent and secant lines.
//!
//! The server is stateless: every request starts from the scene's initial
//! parameters and applies the query through the same clamping setters the
//! desktop app uses.
//!
//! Routes:
//! - `GET /` serves the dashboard page
//! - `GET /config` returns the function labels and the scene config
//! - `GET /scene?x=&h=&secant=` returns the snapshot and its summary as JSON
//! - `GET /scene.svg?x=&h=&secant=` returns the snapshot rendered as SVG
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use tangent_core::{Preset, Scene};
//! use tangent_dev::{Canvas, serve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), warp::Error> {
//!     let scene = Arc::new(Scene::from_preset(Preset::Square));
//!     let addr = ([127, 0, 0, 1], 8050).into();
//!     serve(scene, Canvas::for_preset(Preset::Square), addr).await?;
//!     Ok(())
//! }
//! ```

mod page;
mod svg;

use std::{net::SocketAddr, sync::Arc};

use serde::{Deserialize, Serialize};
use tangent_core::{Config, FunctionPair, ParameterState, RenderSnapshot, Scene, Summary};
use tracing::info;
use warp::{Filter, Reply, filters::BoxedFilter, reply::Response};

pub use svg::Canvas;

/// Query parameters accepted by the scene routes.
///
/// Missing values keep the scene's initial parameters. Out-of-range values
/// are clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct SceneQuery {
    pub x: Option<f64>,
    pub h: Option<f64>,
    pub secant: Option<bool>,
}

impl SceneQuery {
    /// Applies the requested parameters to `state`.
    #[must_use]
    pub fn apply(&self, mut state: ParameterState) -> ParameterState {
        if let Some(x) = self.x {
            state.set_x(x);
        }
        if let Some(h) = self.h {
            state.set_h(h);
        }
        if let Some(visible) = self.secant {
            state.set_secant_visible(visible);
        }
        state
    }
}

#[derive(Serialize)]
struct ConfigReply<'a> {
    function: &'a str,
    derivative: &'a str,
    config: &'a Config,
}

#[derive(Serialize)]
struct SceneReply<'a> {
    function: &'a str,
    snapshot: RenderSnapshot,
    summary: Summary,
}

/// Builds the dashboard's routes for `scene`.
pub fn routes<F>(scene: Arc<Scene<F>>, canvas: Canvas) -> BoxedFilter<(Response,)>
where
    F: FunctionPair + Send + Sync + 'static,
{
    let with_scene = {
        let scene = Arc::clone(&scene);
        warp::any().map(move || Arc::clone(&scene))
    };

    let page = page::render(&scene);
    let index = warp::path::end()
        .and(warp::get())
        .map(move || warp::reply::html(page.clone()).into_response());

    let config = warp::path("config")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_scene.clone())
        .map(|scene: Arc<Scene<F>>| {
            let function = scene.function();
            warp::reply::json(&ConfigReply {
                function: function.label(),
                derivative: function.derivative_label(),
                config: scene.config(),
            })
            .into_response()
        });

    let snapshot = warp::path("scene")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<SceneQuery>())
        .and(with_scene.clone())
        .map(|query: SceneQuery, scene: Arc<Scene<F>>| {
            let snapshot = scene.build(&query.apply(scene.initial_state()));
            let summary = Summary::new(&snapshot, scene.function());
            warp::reply::json(&SceneReply {
                function: scene.function().label(),
                snapshot,
                summary,
            })
            .into_response()
        });

    let image = warp::path("scene.svg")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<SceneQuery>())
        .and(with_scene)
        .map(move |query: SceneQuery, scene: Arc<Scene<F>>| {
            let snapshot = scene.build(&query.apply(scene.initial_state()));
            let body = canvas.render(&snapshot, scene.function());
            warp::reply::with_header(body, "content-type", "image/svg+xml").into_response()
        });

    index
        .or(config)
        .unify()
        .or(snapshot)
        .unify()
        .or(image)
        .unify()
        .boxed()
}

/// Serves the dashboard on `addr` until the process exits.
///
/// # Errors
///
/// Returns an error if the server cannot bind to `addr`.
pub async fn serve<F>(
    scene: Arc<Scene<F>>,
    canvas: Canvas,
    addr: SocketAddr,
) -> Result<(), warp::Error>
where
    F: FunctionPair + Send + Sync + 'static,
{
    let function = scene.function().label().to_owned();
    let filter = routes(scene, canvas).with(warp::trace::request());
    let (addr, server) = warp::serve(filter).try_bind_ephemeral(addr)?;
    info!(%addr, function = %function, "serving dashboard");
    server.await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use serde_json::Value;
    use tangent_core::Preset;
    use warp::http::StatusCode;

    fn cube_routes() -> BoxedFilter<(Response,)> {
        routes(
            Arc::new(Scene::from_preset(Preset::Cube)),
            Canvas::for_preset(Preset::Cube),
        )
    }

    async fn get_json(path: &str) -> Value {
        let response = warp::test::request()
            .method("GET")
            .path(path)
            .reply(&cube_routes())
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        serde_json::from_slice(response.body()).expect("valid json")
    }

    #[tokio::test]
    async fn config_reports_labels_and_ranges() {
        let body = get_json("/config").await;

        assert_eq!(body["function"], "f(x) = x³");
        assert_eq!(body["derivative"], "f'(x) = 3x²");
        assert_relative_eq!(body["config"]["x_range"]["min"].as_f64().unwrap(), 0.3);
        assert_relative_eq!(body["config"]["x_range"]["max"].as_f64().unwrap(), 2.7);
        assert_relative_eq!(body["config"]["h_range"]["min"].as_f64().unwrap(), 0.01);
    }

    #[tokio::test]
    async fn scene_defaults_to_initial_parameters() {
        let body = get_json("/scene").await;
        let snapshot = &body["snapshot"];

        assert_relative_eq!(snapshot["main_point"]["x"].as_f64().unwrap(), 1.5);
        assert_relative_eq!(snapshot["h"].as_f64().unwrap(), 1.0);
        assert_relative_eq!(snapshot["metric"]["tangent_slope"].as_f64().unwrap(), 6.75);
        assert_relative_eq!(snapshot["metric"]["secant_slope"].as_f64().unwrap(), 12.25);
        assert_eq!(snapshot["curve"].as_array().unwrap().len(), 500);
        assert_eq!(body["summary"]["lines"].as_array().unwrap().len(), 5);
        assert_eq!(body["summary"]["level"], "far");
    }

    #[tokio::test]
    async fn scene_clamps_out_of_range_requests() {
        let body = get_json("/scene?x=99&h=-3").await;
        let snapshot = &body["snapshot"];

        assert_relative_eq!(snapshot["main_point"]["x"].as_f64().unwrap(), 2.7);
        assert_relative_eq!(snapshot["h"].as_f64().unwrap(), 0.01);
    }

    #[tokio::test]
    async fn hidden_secant_serializes_as_null() {
        let body = get_json("/scene?secant=false").await;
        let snapshot = &body["snapshot"];

        assert!(snapshot["secant"].is_null());
        assert!(snapshot["secondary_point"].is_null());
        assert!(!snapshot["tangent"].is_null());
        assert_eq!(body["summary"]["lines"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn malformed_query_is_rejected() {
        let response = warp::test::request()
            .method("GET")
            .path("/scene?x=left")
            .reply(&cube_routes())
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn svg_route_sets_content_type() {
        let response = warp::test::request()
            .method("GET")
            .path("/scene.svg?x=2&h=0.5")
            .reply(&cube_routes())
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "image/svg+xml");
        let body = std::str::from_utf8(response.body()).unwrap();
        assert!(body.starts_with("<svg "));
        assert!(body.contains("Tangent (slope = 12.00)"));
    }

    #[tokio::test]
    async fn index_serves_dashboard() {
        let response = warp::test::request()
            .method("GET")
            .path("/")
            .reply(&cube_routes())
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(
            response.headers()["content-type"]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );
        let body = std::str::from_utf8(response.body()).unwrap();
        assert!(body.contains("Derivative Visualization: f(x) = x³"));
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let response = warp::test::request()
            .method("GET")
            .path("/missing")
            .reply(&cube_routes())
            .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn serve_reports_a_port_in_use() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = taken.local_addr().unwrap();

        let result = serve(
            Arc::new(Scene::from_preset(Preset::Square)),
            Canvas::for_preset(Preset::Square),
            addr,
        )
        .await;

        assert!(result.is_err());
    }

    #[test]
    fn query_applies_only_given_parameters() {
        let scene = Scene::from_preset(Preset::Square);
        let query = SceneQuery {
            h: Some(0.25),
            ..SceneQuery::default()
        };

        let state = query.apply(scene.initial_state());

        assert_relative_eq!(state.x(), 1.5);
        assert_relative_eq!(state.h(), 0.25);
        assert!(state.show_secant());
    }
}
