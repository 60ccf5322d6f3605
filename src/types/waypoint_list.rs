use crate::services::here_client::types::geo_point::GeoPoint;

/// Parses `LAT,LON;LAT,LON;...` as sent by gateway clients.
pub fn parse_waypoint_list(input: &str) -> Result<Vec<GeoPoint>, String> {
    input
        .split(';')
        .map(|pair| {
            let (lat, lon) = pair
                .split_once(',')
                .ok_or_else(|| format!("Waypoint `{}` is not LAT,LON", pair))?;

            let lat = lat
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("Invalid latitude `{}`", lat))?;
            let lon = lon
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("Invalid longitude `{}`", lon))?;

            Ok(GeoPoint::new(lat, lon))
        })
        .collect()
}

/// `ID;ID;...`, empty entries dropped.
pub fn parse_link_list(input: Option<&str>) -> Vec<String> {
    input
        .unwrap_or_default()
        .split(';')
        .filter(|link| !link.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_semicolon_separated_pairs() {
        assert_eq!(
            parse_waypoint_list("48.87,2.3; 43.29 , 5.37").unwrap(),
            vec![GeoPoint::new(48.87, 2.3), GeoPoint::new(43.29, 5.37)]
        );
    }

    #[test]
    fn rejects_incomplete_pairs() {
        assert!(parse_waypoint_list("48.87").is_err());
        assert!(parse_waypoint_list("48.87,north").is_err());
        assert!(parse_waypoint_list("1.0,2.0;").is_err());
    }

    #[test]
    fn link_list_skips_empty_entries() {
        assert_eq!(parse_link_list(Some("L1;;L2;")), vec!["L1", "L2"]);
        assert!(parse_link_list(None).is_empty());
    }
}
