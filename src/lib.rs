pub mod app;
pub mod routes;
pub mod services;
pub mod types;
pub mod utils;
