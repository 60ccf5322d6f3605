#![allow(non_snake_case)]
use serde::{Deserialize, Serialize};

// Missing arrays decode as empty and surface as not found.

#[derive(Deserialize, Serialize)]
pub struct HereGeocodeResponseNavigationPosition {
    pub Latitude: f64,
    pub Longitude: f64,
}

#[derive(Default, Deserialize, Serialize)]
pub struct HereGeocodeResponseLocation {
    #[serde(default)]
    pub NavigationPosition: Vec<HereGeocodeResponseNavigationPosition>,
}

#[derive(Deserialize, Serialize)]
pub struct HereGeocodeResponseResult {
    #[serde(default)]
    pub Location: HereGeocodeResponseLocation,
}

#[derive(Deserialize, Serialize)]
pub struct HereGeocodeResponseView {
    #[serde(default)]
    pub Result: Vec<HereGeocodeResponseResult>,
}

#[derive(Default, Deserialize, Serialize)]
pub struct HereGeocodeResponseBody {
    #[serde(default)]
    pub View: Vec<HereGeocodeResponseView>,
}

#[derive(Deserialize, Serialize)]
pub struct HereGeocodeResponse {
    #[serde(default)]
    pub Response: HereGeocodeResponseBody,
}
