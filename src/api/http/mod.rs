// src/api/http/mod.rs

mod handlers;
mod motors;
mod router;
mod scoring;

pub use handlers::health_handler;
pub use motors::list_motors_handler;
pub use router::{api_routes, http_router};
pub use scoring::{saw_custom_handler, saw_default_handler, wp_custom_handler, wp_default_handler};
