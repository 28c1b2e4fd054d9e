//! The API route table and its router.
//!
//! `API_ROUTES` is what the sitemap serves; the registrations below must
//! stay in step with it.

use crate::entity::{Character, Entity, Favourite, Planet, Starship, User};
use crate::handlers::entity::{get_by_id, list};
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use serde::Serialize;

/// One registered route: method and display path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub method: &'static str,
    pub path: &'static str,
}

/// Every API route, in registration order.
pub const API_ROUTES: &[RouteEntry] = &[
    RouteEntry { method: "GET", path: "/" },
    RouteEntry { method: "GET", path: "/users" },
    RouteEntry { method: "GET", path: "/users/{id}" },
    RouteEntry { method: "GET", path: "/favourites" },
    RouteEntry { method: "GET", path: "/favourites/{id}" },
    RouteEntry { method: "GET", path: "/characters" },
    RouteEntry { method: "GET", path: "/characters/{id}" },
    RouteEntry { method: "GET", path: "/planets" },
    RouteEntry { method: "GET", path: "/planets/{id}" },
    RouteEntry { method: "GET", path: "/starships" },
    RouteEntry { method: "GET", path: "/starships/{id}" },
];

#[derive(Serialize)]
struct Sitemap {
    routes: &'static [RouteEntry],
}

/// GET /: the registered routes, for discovery.
async fn sitemap() -> Json<Sitemap> {
    Json(Sitemap { routes: API_ROUTES })
}

/// The list and get-by-id pair for one entity, mounted under its path
/// segment.
fn entity_pair<E: Entity>() -> Router<AppState> {
    Router::new()
        .route(&format!("/{}", E::PATH), get(list::<E>))
        .route(&format!("/{}/:id", E::PATH), get(get_by_id::<E>))
}

/// API routes: the sitemap plus list and get-by-id for each entity.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(sitemap))
        .merge(entity_pair::<User>())
        .merge(entity_pair::<Favourite>())
        .merge(entity_pair::<Character>())
        .merge(entity_pair::<Planet>())
        .merge(entity_pair::<Starship>())
        .with_state(state)
}
