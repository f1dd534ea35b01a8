pub mod api;
pub mod config;
pub mod credential;
pub mod db;
pub mod directory;
pub mod models;
pub mod state;
