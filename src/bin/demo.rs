//! Geocodes two addresses, routes between them and opens the result in the
//! default browser.

use std::error::Error;

use hwg_gateway::services::here_client::{
    here_service::{HereService, HereServiceConfig},
    router::retrieve_eta,
    types::{
        geo_point::GeoPoint,
        vehicle_profile::{EngineGas, VehicleProfile, VehicleType},
    },
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let service = HereService::new(HereServiceConfig::from_env()?);
    let vehicle = VehicleProfile {
        vehicle_type: VehicleType::Car,
        engine_gas: EngineGas::Diesel,
        engine_consumption: 6.5,
    };

    let origin = service
        .get_gps_from_address("92, avenue des Champs-Elysées, 75008, Paris, France")
        .await?;
    let destination = service
        .get_gps_from_address("25, Quai des Belges, 13001, Marseille, France")
        .await?;
    info!("Origin {}, destination {}", origin, destination);

    let (response, stops) = service
        .get_route(&[origin, destination], &vehicle, &[])
        .await?;
    info!(
        "Route has {} stops, ETA {:.2} hours",
        stops.len(),
        retrieve_eta(&response)?
    );

    let positions = stops.iter().map(|s| s.position).collect::<Vec<GeoPoint>>();
    service.show_route_on_map(&positions)?;

    Ok(())
}
