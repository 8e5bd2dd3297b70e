use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use futures_util::stream;
use heart_shared::ansi::compose_chunk;
use heart_shared::{render_frame, PointSet, RenderConfig};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::state::{ConnectionCounter, ConnectionGuard, RenderState};

/// Shared app state passed to each stream handler
#[derive(Clone)]
pub struct AppState {
    pub points: Arc<PointSet>,
    pub render: RenderConfig,
    pub tick_interval: Duration,
    pub angle_step: f64,
    /// Flips to `true` once the server starts shutting down
    pub shutdown: watch::Receiver<bool>,
    pub connections: Arc<ConnectionCounter>,
}

impl AppState {
    pub fn new(
        points: Arc<PointSet>,
        config: &ServerConfig,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            points,
            render: config.render,
            tick_interval: config.tick_interval,
            angle_step: config.angle_step,
            shutdown,
            connections: Arc::new(ConnectionCounter::new()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("failed to prepare streaming response: {0}")]
    Response(#[from] axum::http::Error),
}

impl IntoResponse for StreamError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Streaming not supported!").into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(stream_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// HTTP handler: answers with an endless chunked body of animation frames.
pub async fn stream_handler(State(state): State<AppState>) -> Result<Response, StreamError> {
    // Capacity 1: a frame is handed to the connection as soon as it is rendered.
    let (tx, rx) = mpsc::channel::<Bytes>(1);

    let body = Body::from_stream(stream::unfold(rx, |mut rx| async move {
        rx.recv()
            .await
            .map(|chunk| (Ok::<_, Infallible>(chunk), rx))
    }));

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .header(header::TRANSFER_ENCODING, "chunked")
        .header(header::CONNECTION, "keep-alive")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(body)?;

    let guard = state.connections.open();
    tokio::spawn(drive_stream(state, tx, guard));

    Ok(response)
}

/// Per-connection loop: one frame per tick until the client goes away or
/// the server shuts down.
async fn drive_stream(state: AppState, tx: mpsc::Sender<Bytes>, _guard: ConnectionGuard) {
    let mut shutdown = state.shutdown.clone();
    if *shutdown.borrow_and_update() {
        return;
    }

    // First frame after one full tick, like every later one.
    let mut ticker = tokio::time::interval_at(
        tokio::time::Instant::now() + state.tick_interval,
        state.tick_interval,
    );
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut render_state = RenderState::new();

    loop {
        tokio::select! {
            biased;

            // A dropped sender counts as shutdown too.
            _ = shutdown.changed() => break,

            // Body receiver dropped: the client disconnected.
            _ = tx.closed() => break,

            _ = ticker.tick() => {
                let frame = render_frame(
                    state.points.as_slice(),
                    render_state.angle(),
                    &state.render,
                );
                let chunk = compose_chunk(render_state.color_index(), &frame);
                // A slow reader can leave us parked here; shutdown must still win.
                tokio::select! {
                    biased;
                    _ = shutdown.changed() => break,
                    sent = tx.send(Bytes::from(chunk)) => {
                        if sent.is_err() {
                            break;
                        }
                    }
                }
                render_state.advance(state.angle_step);
            }
        }
    }
}
