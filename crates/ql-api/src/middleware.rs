//! quill/crates/ql-api/src/middleware.rs Middleware
//!
//! Request logging and CORS.

use actix_cors::Cors;
use actix_web::middleware::Logger;

/// One line per request:
/// remote-ip "request-line" status-code response-size "referrer" "user-agent" time
pub fn standard_middleware() -> Logger {
    Logger::default()
}

/// The blog front-end may be served from another origin.
pub fn cors_policy(max_age: usize) -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT"])
        .allow_any_header()
        .max_age(max_age)
}
