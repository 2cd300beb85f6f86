use std::convert::Infallible;
use std::time::Instant;
use warp::http::{Method, StatusCode};
use warp::path::FullPath;
use warp::reply::{Reply, Response};
use warp::Filter;

struct RequestStart {
    path: String,
    method: Method,
    at: Instant,
}

/// Wrap a recovered filter so every request is logged on the way in and out.
///
/// The wrapped filter must not reject; apply `recover` before this.
pub fn with_request_logging<F, T>(
    filter: F,
) -> impl Filter<Extract = (Response,), Error = Infallible> + Clone + Send + Sync + 'static
where
    F: Filter<Extract = (T,), Error = Infallible> + Clone + Send + Sync + 'static,
    T: Reply + 'static,
{
    warp::path::full()
        .and(warp::method())
        .map(|path: FullPath, method: Method| {
            tracing::info!(path = %path.as_str(), method = %method, "incoming request");
            RequestStart {
                path: path.as_str().to_string(),
                method,
                at: Instant::now(),
            }
        })
        .and(filter)
        .map(|start: RequestStart, reply: T| {
            let response = reply.into_response();
            let duration_ms = start.at.elapsed().as_millis();
            let elapsed = duration_ms as u64;
            tracing::info!(duration_ms = elapsed, "request completed");
            log_response(
                response.status(),
                &start.path,
                start.method.as_str(),
                duration_ms,
            );
            response
        })
}

/// Log the final status: 4xx at warn, 5xx at error, everything else at info.
pub fn log_response(status: StatusCode, path: &str, method: &str, duration_ms: u128) {
    let duration_ms = duration_ms as u64;
    if status.is_client_error() {
        tracing::warn!(
            status = status.as_u16(),
            path = %path,
            method = %method,
            duration_ms,
            "client error"
        );
    } else if status.is_server_error() {
        tracing::error!(
            status = status.as_u16(),
            path = %path,
            method = %method,
            duration_ms,
            "server error"
        );
    } else {
        tracing::info!(
            status = status.as_u16(),
            path = %path,
            method = %method,
            duration_ms,
            "response sent"
        );
    }
}
