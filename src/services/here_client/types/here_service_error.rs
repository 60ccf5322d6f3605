use thiserror::Error;

#[derive(Error, Debug)]
pub enum HereServiceError {
    #[error("Address `{address}` has {commas} commas, expected at least 4")]
    MalformedAddress { address: String, commas: usize },

    #[error("At least one waypoint is required")]
    NoWaypoints,

    #[error("Request to HERE API failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to decode HERE API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Maneuver id `{0}` does not end in a numeric index")]
    MalformedManeuverId(String),

    #[error("Failed to open browser: {0}")]
    Browser(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
