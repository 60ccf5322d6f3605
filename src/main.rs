use std::{env, error::Error};

use hwg_gateway::{app, services::here_client::here_service::HereServiceConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();
    info!("Starting app...");

    // geocode: {HERE_GEOCODER_URL}?app_id=..&app_code=..&country=..&city=..&street=..&houseNumber=..&postalCode=..
    // route: {HERE_ROUTING_URL}?app_id=..&app_code=..&waypoint0=geo!LAT,LON&..&mode=fastest;car;traffic:enabled&vehicletype=diesel,6.5
    let app = app::gen_app(HereServiceConfig::from_env()?);

    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    info!("Listening on port {}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
