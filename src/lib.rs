//! Read-only Star Wars REST API backed by PostgreSQL.

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod routes;
pub mod state;

pub use config::Config;
pub use entity::{Character, Entity, Favourite, Planet, Starship, User};
pub use error::ApiError;
pub use repository::Repository;
pub use routes::{api_routes, common_routes, RouteEntry, API_ROUTES};
pub use state::AppState;
