//! Star Wars domain records and their table metadata.
//!
//! Each entity is a plain struct: `Serialize` produces the flat response
//! mapping, `FromRow` decodes one row. The `Entity` trait carries the
//! per-table constants that keep the repository and handlers generic.

use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::FromRow;

/// Metadata tying a record type to its table and route.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin + 'static {
    /// Table name.
    const TABLE: &'static str;
    /// Explicit select list, in response-field order.
    const COLUMNS: &'static str;
    /// URL path segment the entity is mounted under.
    const PATH: &'static str;
    /// Singular display name used in not-found messages.
    const DISPLAY: &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl Entity for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static str = "id, username, email";
    const PATH: &'static str = "users";
    const DISPLAY: &'static str = "User";
}

/// A user's favourite. `user_id` is a plain reference; the foreign key lives
/// in the database and is never validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Favourite {
    pub id: i32,
    pub user_id: Option<i32>,
}

impl Entity for Favourite {
    const TABLE: &'static str = "favourites";
    const COLUMNS: &'static str = "id, user_id";
    const PATH: &'static str = "favourites";
    const DISPLAY: &'static str = "Favourite";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub starship_class: String,
    pub manufacturer: String,
    pub cost_in_credits: i64,
    pub length: i64,
    pub crew: i64,
    pub passengers: i64,
    pub max_atmosphering_speed: i64,
    pub cargo_capacity: i64,
}

impl Entity for Character {
    const TABLE: &'static str = "characters";
    const COLUMNS: &'static str = "id, name, model, starship_class, manufacturer, \
        cost_in_credits, length, crew, passengers, max_atmosphering_speed, cargo_capacity";
    const PATH: &'static str = "characters";
    const DISPLAY: &'static str = "Character";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub diameter: i64,
    pub rotation_period: i64,
    pub orbital_period: i64,
    pub gravity: String,
    pub population: i64,
    pub climate: String,
    pub terrain: String,
}

impl Entity for Planet {
    const TABLE: &'static str = "planets";
    const COLUMNS: &'static str = "id, name, diameter, rotation_period, orbital_period, \
        gravity, population, climate, terrain";
    const PATH: &'static str = "planets";
    const DISPLAY: &'static str = "Planet";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Starship {
    pub id: i32,
    pub name: String,
    pub model: String,
    pub starship_class: String,
    pub manufacturer: String,
    pub cost_in_credits: i64,
    pub length: i64,
    pub crew: i64,
    pub passengers: i64,
    pub max_atmosphering_speed: i64,
    pub cargo_capacity: i64,
}

impl Entity for Starship {
    const TABLE: &'static str = "starships";
    const COLUMNS: &'static str = "id, name, model, starship_class, manufacturer, \
        cost_in_credits, length, crew, passengers, max_atmosphering_speed, cargo_capacity";
    const PATH: &'static str = "starships";
    const DISPLAY: &'static str = "Starship";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn falcon() -> Starship {
        Starship {
            id: 10,
            name: "Millennium Falcon".into(),
            model: "YT-1300 light freighter".into(),
            starship_class: "Light freighter".into(),
            manufacturer: "Corellian Engineering Corporation".into(),
            cost_in_credits: 100_000,
            length: 34,
            crew: 4,
            passengers: 6,
            max_atmosphering_speed: 1050,
            cargo_capacity: 100_000,
        }
    }

    #[test]
    fn user_serializes_to_flat_mapping() {
        let luke = User {
            id: 1,
            username: "luke".into(),
            email: "luke@rebels.org".into(),
        };
        assert_eq!(
            serde_json::to_value(&luke).unwrap(),
            json!({"id": 1, "username": "luke", "email": "luke@rebels.org"})
        );
        // Field order in the encoded body follows the declaration order.
        assert_eq!(
            serde_json::to_string(&luke).unwrap(),
            r#"{"id":1,"username":"luke","email":"luke@rebels.org"}"#
        );
    }

    #[test]
    fn favourite_without_user_serializes_null_reference() {
        let orphan = Favourite { id: 7, user_id: None };
        assert_eq!(
            serde_json::to_value(&orphan).unwrap(),
            json!({"id": 7, "user_id": null})
        );
    }

    #[test]
    fn serialization_is_pure_and_idempotent() {
        let ship = falcon();
        let first = serde_json::to_value(&ship).unwrap();
        let second = serde_json::to_value(&ship).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn starship_mapping_contains_exactly_the_declared_fields() {
        let value = serde_json::to_value(falcon()).unwrap();
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        let mut expected: Vec<String> = [
            "id",
            "name",
            "model",
            "starship_class",
            "manufacturer",
            "cost_in_credits",
            "length",
            "crew",
            "passengers",
            "max_atmosphering_speed",
            "cargo_capacity",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        expected.sort();
        assert_eq!(keys, expected);
    }

    #[test]
    fn planet_serializes_integers_and_strings_as_declared() {
        let tatooine = Planet {
            id: 3,
            name: "Tatooine".into(),
            diameter: 10_465,
            rotation_period: 23,
            orbital_period: 304,
            gravity: "1 standard".into(),
            population: 200_000,
            climate: "arid".into(),
            terrain: "desert".into(),
        };
        assert_eq!(
            serde_json::to_value(&tatooine).unwrap(),
            json!({
                "id": 3,
                "name": "Tatooine",
                "diameter": 10465,
                "rotation_period": 23,
                "orbital_period": 304,
                "gravity": "1 standard",
                "population": 200000,
                "climate": "arid",
                "terrain": "desert"
            })
        );
    }
}
