use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use warp::Filter;
use crate::config::constants::{
    ANALYSIS_IN_PROGRESS_ERROR, EMPTY_INPUT_WARNING, MAX_SESSION_ID_LENGTH, MAX_SOURCE_BYTES,
    SESSION_SWEEP_INTERVAL_SECS, sleep_duration_secs,
};
use crate::errors::{ExplainerError, ExplainerResult};
use crate::prompts::sample_strategy::SAMPLE_STRATEGY;
use crate::services::strategy_explainer::StrategyExplainer;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::server_config::ServerConfig;
use crate::ui::session_manager::{SessionGate, SessionManager};

#[derive(Debug, Deserialize)]
struct AnalyzeBody {
    #[serde(default)]
    source: String,
}

pub struct ExplainerServer {
    explainer: Arc<StrategyExplainer>,
    session_manager: Arc<SessionManager>,
    server_config: ServerConfig,
    shutdown_tx: Option<oneshot::Sender<()>>,
    sweeper: Option<JoinHandle<()>>,
}

impl ExplainerServer {
    pub fn new(explainer: StrategyExplainer, server_config: ServerConfig) -> Self {
        Self {
            explainer: Arc::new(explainer),
            session_manager: Arc::new(SessionManager::new()),
            server_config,
            shutdown_tx: None,
            sweeper: None,
        }
    }

    pub async fn start(&mut self) -> ExplainerResult<SocketAddr> {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let routes = create_routes(Arc::clone(&self.explainer), Arc::clone(&self.session_manager));

        let addr: SocketAddr = ([127, 0, 0, 1], self.server_config.port).into();
        let (bound_addr, server) = warp::serve(routes)
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| ExplainerError::system_error("bind server", &e.to_string()))?;

        tokio::spawn(server);
        self.shutdown_tx = Some(shutdown_tx);
        self.sweeper = Some(self.spawn_session_sweeper());

        log::info!("🌐 Strategy explainer started on http://{}", bound_addr);
        Ok(bound_addr)
    }

    fn spawn_session_sweeper(&self) -> JoinHandle<()> {
        let session_manager = Arc::clone(&self.session_manager);
        let ttl_minutes = self.server_config.session_ttl_minutes;

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(sleep_duration_secs(SESSION_SWEEP_INTERVAL_SECS));
            loop {
                interval.tick().await;
                session_manager.cleanup_expired_sessions(ttl_minutes);
            }
        })
    }

    pub async fn shutdown(&mut self) -> ExplainerResult<()> {
        log::info!("🛑 Shutting down strategy explainer...");

        if let Some(sweeper) = self.sweeper.take() {
            sweeper.abort();
        }

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                ExplainerError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        log::info!("✅ Strategy explainer shutdown complete");
        Ok(())
    }
}

pub fn create_routes(
    explainer: Arc<StrategyExplainer>,
    session_manager: Arc<SessionManager>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let session_manager_filter = warp::any().map(move || Arc::clone(&session_manager));
    let explainer_filter = warp::any().map(move || Arc::clone(&explainer));

    let index = warp::path::end()
        .and(warp::get())
        .and_then(serve_index_page);

    let sample = warp::path!("api" / "sample")
        .and(warp::get())
        .map(|| warp::reply::json(&json!({ "source": SAMPLE_STRATEGY })));

    let create_session = warp::path!("api" / "session")
        .and(warp::post())
        .and(session_manager_filter.clone())
        .and_then(create_session_handler);

    let get_session = warp::path!("api" / "session" / String)
        .and(warp::get())
        .and(session_manager_filter.clone())
        .and_then(get_session_handler);

    let analyze = warp::path!("api" / "session" / String / "analyze")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_SOURCE_BYTES))
        .and(warp::body::json())
        .and(session_manager_filter)
        .and(explainer_filter)
        .and_then(analyze_handler);

    index
        .or(sample)
        .or(create_session)
        .or(get_session)
        .or(analyze)
        .with(warp::cors()
            .allow_origin("http://127.0.0.1")
            .allow_origin("http://localhost")
            .allow_headers(vec!["content-type"])
            .allow_methods(vec!["GET", "POST"]))
}

async fn serve_index_page() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::html(include_str!("static/index.html")))
}

/// Accepts an id only if it is already in canonical form; nothing is stripped.
fn validate_session_id(session_id: &str) -> Option<&str> {
    let well_formed = !session_id.is_empty()
        && session_id.len() <= MAX_SESSION_ID_LENGTH
        && session_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    well_formed.then_some(session_id)
}

async fn create_session_handler(session_manager: Arc<SessionManager>) -> Result<impl warp::Reply, Infallible> {
    let session_id = session_manager.create_session();
    log::debug!("🆕 Session {} created ({} active)", session_id, session_manager.session_count());
    Ok(warp::reply::json(&json!({ "session_id": session_id })))
}

async fn get_session_handler(session_id: String, session_manager: Arc<SessionManager>) -> Result<impl warp::Reply, Infallible> {
    let Some(session_id) = validate_session_id(&session_id) else {
        return Ok(warp::reply::json(&json!({
            "error": "Invalid session ID"
        })));
    };

    match session_manager.get_session(session_id) {
        Some(session) => Ok(warp::reply::json(&session)),
        None => Ok(warp::reply::json(&json!({
            "error": "Session not found"
        }))),
    }
}

async fn analyze_handler(
    session_id: String,
    body: AnalyzeBody,
    session_manager: Arc<SessionManager>,
    explainer: Arc<StrategyExplainer>,
) -> Result<impl warp::Reply, Infallible> {
    let Some(session_id) = validate_session_id(&session_id) else {
        return Ok(warp::reply::json(&json!({
            "error": "Invalid session ID"
        })));
    };

    if session_manager.get_session(session_id).is_none() {
        return Ok(warp::reply::json(&json!({
            "error": "Session not found"
        })));
    }

    let Some(request) = AnalysisRequest::new(body.source) else {
        log::warn!("⚠️ Empty strategy submitted, skipping analysis");
        return Ok(warp::reply::json(&json!({
            "warning": EMPTY_INPUT_WARNING
        })));
    };

    let guard = match session_manager.try_begin_analysis(session_id) {
        SessionGate::Started(guard) => guard,
        SessionGate::Busy => {
            return Ok(warp::reply::json(&json!({
                "error": ANALYSIS_IN_PROGRESS_ERROR
            })));
        }
        SessionGate::NotFound => {
            return Ok(warp::reply::json(&json!({
                "error": "Session not found"
            })));
        }
    };

    let view = explainer.explain(&request).await;
    let reply = warp::reply::json(&view);
    guard.complete(view);

    Ok(reply)
}
