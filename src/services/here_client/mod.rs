pub mod geocoder;
pub mod here_service;
pub mod map_view;
pub mod router;
pub mod types;
