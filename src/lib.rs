pub mod client;
pub mod db;
pub mod dto;
pub mod error;
pub mod health;
pub mod routes;
pub mod state;
pub mod task;
