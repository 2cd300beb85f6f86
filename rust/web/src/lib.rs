pub mod errors;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod server;

pub use errors::{ErrorResponse, ErrorSeverity, IntoErrorResponse};
pub use handlers::{ApiError, EvaluateResponse};
pub use logging::{init_logging, LogEntry, TestLogSubscriber};
pub use middleware::{log_response, with_request_logging};
pub use server::{
    AppContext, ServerConfig, ServerError, ServerHandle, WebServer, DEFAULT_HOST, DEFAULT_PORT,
};
