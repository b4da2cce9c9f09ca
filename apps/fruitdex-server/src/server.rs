use std::time::Duration;

use axum::Router;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};

use crate::config::ServerConfig;
use crate::request_id;

/// Attach the global middleware stack.
///
/// Effective order (outermost to innermost):
/// SetRequestId -> PropagateRequestId -> Trace -> Timeout -> CORS -> BodyLimit.
/// `Router::layer` wraps everything added before it, so layers are attached
/// innermost-first.
pub fn finalize_router(router: Router, config: &ServerConfig) -> Router {
    let x_request_id = request_id::header();

    // Body limit - 16MB default limit
    let mut router = router.layer(RequestBodyLimitLayer::new(16 * 1024 * 1024));

    // CORS (if enabled)
    if config.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    // Per-request timeout at the transport boundary; 0 disables
    if config.timeout_sec > 0 {
        router = router.layer(TimeoutLayer::new(Duration::from_secs(config.timeout_sec)));
    }

    // Trace with request_id/status/latency
    router = router.layer(request_id::create_trace_layer());

    // Propagate x-request-id onto responses
    router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));

    // Generate x-request-id when the client didn't send one
    router.layer(SetRequestIdLayer::new(x_request_id, request_id::MakeReqId))
}

/// Bind and serve until a shutdown signal arrives.
pub async fn serve(router: Router, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("HTTP server bound on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = wait_for_shutdown().await {
                tracing::error!("Failed to listen for shutdown signals: {}", e);
            }
            tracing::info!("HTTP server shutting down gracefully");
        })
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

async fn wait_for_shutdown() -> anyhow::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?; // Ctrl+C
        tokio::select! {
            _ = sigterm.recv() => {},
            _ = sigint.recv()  => {},
            _ = tokio::signal::ctrl_c() => {}, // fallback
        }
        Ok(())
    }

    #[cfg(windows)]
    {
        use tokio::signal::windows::{ctrl_break, ctrl_c, ctrl_close, ctrl_shutdown};

        let mut c = ctrl_c()?;
        let mut br = ctrl_break()?;
        let mut cl = ctrl_close()?;
        let mut sh = ctrl_shutdown()?;

        tokio::select! {
            _ = c.recv()  => {},
            _ = br.recv() => {},
            _ = cl.recv() => {},
            _ = sh.recv() => {},
        }
        Ok(())
    }
}
