use crate::handlers;
use crate::middleware::with_request_logging;
use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};
use thiserror::Error;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use warp::filters::BoxedFilter;
use warp::hyper::body::Bytes;
use warp::reply::{Reply, Response};
use warp::Filter;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    host: String,
    port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Loopback with an ephemeral port.
    pub fn for_tests() -> Self {
        Self::new(DEFAULT_HOST, 0)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Resolve `host` and `port` to a socket address.
    ///
    /// `host` may be an IP, a `ip:port` pair (which wins over `port`), or a
    /// name resolvable by the system.
    pub fn bind_addr(&self) -> Result<SocketAddr, ServerError> {
        if let Ok(addr) = self.host.parse::<SocketAddr>() {
            return Ok(addr);
        }
        if let Ok(ip) = self.host.parse::<IpAddr>() {
            return Ok(SocketAddr::new(ip, self.port));
        }

        let candidate = format!("{}:{}", self.host, self.port);
        let mut addrs = candidate.to_socket_addrs().map_err(|err| {
            ServerError::ConfigError(format!("failed to resolve address `{candidate}`: {err}"))
        })?;
        addrs.next().ok_or_else(|| {
            ServerError::ConfigError(format!("failed to resolve address `{candidate}`"))
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppContext {
    config: ServerConfig,
}

impl AppContext {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn new_for_tests() -> Self {
        Self::new(ServerConfig::for_tests())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

#[derive(Debug, Clone)]
pub struct WebServer {
    context: AppContext,
}

impl WebServer {
    pub fn new(config: ServerConfig) -> Self {
        Self::from_context(AppContext::new(config))
    }

    pub fn from_context(context: AppContext) -> Self {
        Self { context }
    }

    pub async fn start(self) -> Result<ServerHandle, ServerError> {
        let WebServer { context } = self;
        let bind_addr = context.config().bind_addr()?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
        };

        let (addr, server_future) = warp::serve(Self::filter())
            .try_bind_with_graceful_shutdown(bind_addr, shutdown_signal)
            .map_err(Self::map_warp_error)?;

        tracing::info!(%addr, "web server listening on http://{}", addr);

        let task = tokio::spawn(server_future);
        Ok(ServerHandle::new(addr, shutdown_tx, task))
    }

    fn map_warp_error(err: warp::Error) -> ServerError {
        use std::error::Error as StdError;

        // the io error sits below hyper's listener error
        let mut source = err.source();
        while let Some(cause) = source {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>() {
                return ServerError::BindError(std::io::Error::new(
                    io_err.kind(),
                    io_err.to_string(),
                ));
            }
            source = cause.source();
        }

        ServerError::ConfigError(err.to_string())
    }

    /// The complete service: routes, JSON rejection handling and request
    /// logging. Never rejects.
    pub fn filter(
    ) -> impl Filter<Extract = (Response,), Error = Infallible> + Clone + Send + Sync + 'static {
        with_request_logging(Self::routes().recover(handlers::handle_rejection))
    }

    fn routes() -> BoxedFilter<(Response,)> {
        Self::health_route().or(Self::api_route()).unify().boxed()
    }

    fn health_route() -> BoxedFilter<(Response,)> {
        warp::path("health")
            .and(warp::get())
            .and(warp::path::end())
            .map(|| handlers::health().into_response())
            .boxed()
    }

    // The body is taken raw so malformed JSON gets our own error body
    // instead of warp's rejection.
    fn api_route() -> BoxedFilter<(Response,)> {
        warp::path("api")
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::bytes())
            .map(|body: Bytes| handlers::evaluate(&body))
            .boxed()
    }
}

#[derive(Debug)]
pub struct ServerHandle {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl ServerHandle {
    fn new(
        addr: SocketAddr,
        shutdown: oneshot::Sender<()>,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            addr,
            shutdown: Some(shutdown),
            task: Some(task),
        }
    }

    pub fn address(&self) -> SocketAddr {
        self.addr
    }

    pub async fn shutdown(mut self) -> Result<(), ServerError> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }

        if let Some(task) = self.task.take() {
            task.await
                .map_err(|err| ServerError::ConfigError(format!("server task join error: {err}")))?;
        }

        Ok(())
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }

        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_loopback_8080() {
        let config = ServerConfig::default();
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 8080);
        assert_eq!(
            config.bind_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn host_with_port_overrides_port() {
        let config = ServerConfig::new("0.0.0.0:9000", 1234);
        assert_eq!(config.bind_addr().unwrap().port(), 9000);
    }

    #[test]
    fn ipv6_host_is_accepted() {
        let config = ServerConfig::new("::1", 3000);
        assert_eq!(
            config.bind_addr().unwrap(),
            "[::1]:3000".parse::<SocketAddr>().unwrap()
        );
    }
}
