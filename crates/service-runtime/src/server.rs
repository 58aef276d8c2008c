use crate::config::ServerConfig;
use crate::error::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub async fn health() -> &'static str {
    "OK"
}

/// Bind `config` and serve `app` until Ctrl-C / SIGTERM.
pub async fn serve(app: Router, config: &ServerConfig) -> Result<()> {
    let listener = TcpListener::bind(config.bind_address()).await?;
    serve_on(listener, app).await
}

/// Serve on an already bound listener. Tests use this with port 0.
pub async fn serve_on(listener: TcpListener, app: Router) -> Result<()> {
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app.layer(TraceLayer::new_for_http()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
