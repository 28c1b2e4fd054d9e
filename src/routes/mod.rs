//! Router construction.

mod api;
mod common;

pub use api::{api_routes, RouteEntry, API_ROUTES};
pub use common::common_routes;
