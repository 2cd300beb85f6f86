pub mod evaluate;
pub mod health;
pub mod routing;

pub use evaluate::{evaluate, evaluate_body, ApiError, EvaluateResponse};
pub use health::health;
pub use routing::{handle_rejection, RoutingError};
