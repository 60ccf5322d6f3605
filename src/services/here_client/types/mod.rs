pub mod geo_point;
pub mod here_geocode_response;
pub mod here_route_response;
pub mod here_service_error;
pub mod route_leg;
pub mod vehicle_profile;
