pub mod api_client;
pub mod config;
pub mod db;
pub mod error;
pub mod media_host;
pub mod models;
pub mod player;
pub mod routes;
pub mod signing;
pub mod snowflake;
pub mod state;
