use crate::adapters::http::{build_router, AppState};
use crate::adapters::storage::InMemoryCourseRepository;
use crate::config::ServiceConfig;
use crate::domain::ports::CourseRepository;
use crate::utils::error::{EnrollError, Result};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

pub struct CourseServer {
    state: AppState,
    listener: TcpListener,
    shutdown_grace: Duration,
}

impl CourseServer {
    /// 依設定建立 store、載入種子課程並綁定位址
    pub async fn from_config(config: &ServiceConfig) -> Result<Self> {
        let repository: Arc<dyn CourseRepository> = Arc::new(InMemoryCourseRepository::new());
        let state = AppState::new(repository);

        for seed in &config.catalog.courses {
            state.add_course.add_course(seed.to_request()).await?;
        }
        if !config.catalog.courses.is_empty() {
            tracing::info!("📚 Seeded {} course(s) from config", config.catalog.courses.len());
        }

        let server = Self::bind(state, config.bind_address()?).await?;
        Ok(server.with_shutdown_grace(config.shutdown_grace()))
    }

    pub async fn bind(state: AppState, addr: SocketAddr) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self {
            state,
            listener,
            shutdown_grace: Duration::from_secs(5),
        })
    }

    pub fn with_shutdown_grace(mut self, grace: Duration) -> Self {
        self.shutdown_grace = grace;
        self
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn run(self) -> Result<()> {
        self.run_until(wait_for_shutdown_signal()).await
    }

    /// Serves until `shutdown` resolves, then gives in-flight requests up to
    /// the grace period to finish.
    pub async fn run_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        let grace = self.shutdown_grace;
        let app = build_router(self.state);
        tracing::info!("🚀 Course service listening on {}", addr);

        let (drained_tx, drained_rx) = tokio::sync::oneshot::channel::<()>();
        let serve = axum::serve(self.listener, app).with_graceful_shutdown(async move {
            shutdown.await;
            tracing::info!("Shutdown requested, draining for up to {:?}", grace);
            let _ = drained_tx.send(());
        });

        let serve = async move { serve.await.map_err(EnrollError::IoError) };
        let deadline = async move {
            if drained_rx.await.is_ok() {
                tokio::time::sleep(grace).await;
            } else {
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = serve => result?,
            _ = deadline => tracing::warn!("Grace period elapsed with requests still open"),
        }

        tracing::info!("👋 Course service stopped");
        Ok(())
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}
