pub mod authentication;
pub mod configuration;
pub mod database;
pub mod domain;
pub mod models;
pub mod routes;
pub mod schema;
pub mod session_state;
pub mod startup;
pub mod telemetry;
