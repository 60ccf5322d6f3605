use tracing::info;

use super::{
    here_service::{HereService, HereServiceConfig},
    types::{
        geo_point::GeoPoint, here_geocode_response::HereGeocodeResponse,
        here_service_error::HereServiceError,
    },
};

/// Builds the geocoding request for a French style postal address:
/// `house number, street, postal code, city, country`.
///
/// Anything after the fourth comma belongs to the country segment. Segments are
/// embedded verbatim, no percent-encoding or trimming is applied.
pub fn format_geocoder_request(
    config: &HereServiceConfig,
    address: &str,
) -> Result<String, HereServiceError> {
    let segments: Vec<&str> = address.splitn(5, ',').collect();

    let [house_number, street, postal_code, city, country] = segments[..] else {
        return Err(HereServiceError::MalformedAddress {
            address: address.to_string(),
            commas: address.matches(',').count(),
        });
    };

    Ok(format!(
        "{}&country={}&city={}&street={}&houseNumber={}&postalCode={}",
        config.authenticated_url(&config.geocoder_url),
        country,
        city,
        street,
        house_number,
        postal_code
    ))
}

/// Picks the first navigation position of the first result.
pub fn format_response_to_gps(response: &HereGeocodeResponse) -> Result<GeoPoint, HereServiceError> {
    let position = response
        .Response
        .View
        .first()
        .and_then(|view| view.Result.first())
        .and_then(|result| result.Location.NavigationPosition.first())
        .ok_or_else(|| HereServiceError::NotFound("no geocoding result".to_string()))?;

    Ok(GeoPoint::new(position.Latitude, position.Longitude))
}

impl HereService {
    pub async fn get_gps_from_address(&self, address: &str) -> Result<GeoPoint, HereServiceError> {
        let url = format_geocoder_request(self.config(), address)?;
        info!("Geocoding address: {}", address);

        let response = self.run_request::<HereGeocodeResponse>(&url).await?;

        format_response_to_gps(&response).map_err(|_| {
            HereServiceError::NotFound(format!("no geocoding result for `{}`", address))
        })
    }
}
