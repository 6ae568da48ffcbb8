pub mod controller;
pub mod routes;
pub mod schema;

pub use routes::{keys_routes, ss58_routes};
