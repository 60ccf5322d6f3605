use tracing::info;

use super::{
    here_service::{HereService, HereServiceConfig},
    router::format_waypoints,
    types::{geo_point::GeoPoint, here_service_error::HereServiceError},
};

/// Map image centered on a single point.
pub fn format_map_point_url(config: &HereServiceConfig, point: &GeoPoint) -> String {
    format!("{}&c={}", config.authenticated_url(&config.map_url), point)
}

/// Map image of the route through `points`.
pub fn format_map_route_url(
    config: &HereServiceConfig,
    points: &[GeoPoint],
) -> Result<String, HereServiceError> {
    Ok(format!(
        "{}&{}",
        config.authenticated_url(&config.map_routing_url),
        format_waypoints(points)?
    ))
}

impl HereService {
    /// Opens the map image for `point` in the default browser.
    pub fn show_point_on_map(&self, point: &GeoPoint) -> Result<(), HereServiceError> {
        info!("Opening map at {}", point);
        webbrowser::open(&format_map_point_url(self.config(), point))?;
        Ok(())
    }

    pub fn show_route_on_map(&self, points: &[GeoPoint]) -> Result<(), HereServiceError> {
        let url = format_map_route_url(self.config(), points)?;
        info!("Opening route map with {} waypoints", points.len());
        webbrowser::open(&url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_url_centers_on_coordinate() {
        let config = HereServiceConfig::new("id", "code");

        assert_eq!(
            format_map_point_url(&config, &GeoPoint::new(48.8717, 2.3007)),
            "https://image.maps.api.here.com/mia/1.6/mapview?app_id=id&app_code=code&c=48.8717,2.3007"
        );
    }

    #[test]
    fn route_url_lists_every_waypoint() {
        let config = HereServiceConfig::new("id", "code");
        let points = [
            GeoPoint::new(1.0, 2.0),
            GeoPoint::new(3.0, 4.0),
            GeoPoint::new(5.5, 6.25),
        ];

        assert_eq!(
            format_map_route_url(&config, &points).unwrap(),
            "https://image.maps.api.here.com/mia/1.6/routing?app_id=id&app_code=code\
             &waypoint0=geo!1.0,2.0&waypoint1=geo!3.0,4.0&waypoint2=geo!5.5,6.25"
        );
    }

    #[test]
    fn route_url_needs_a_waypoint() {
        let config = HereServiceConfig::new("id", "code");

        assert!(matches!(
            format_map_route_url(&config, &[]),
            Err(HereServiceError::NoWaypoints)
        ));
    }
}
