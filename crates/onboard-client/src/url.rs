//! URL construction helpers for the Onboard API.
//!
//! Pure functions for building API URLs, so every call joins paths and
//! encodes list parameters the same way.

use url::Url;

use crate::error::ClientResult;

/// Endpoint paths, relative to the API base URL.
pub mod paths {
    pub const WHOAMI: &str = "/whoami";
    pub const ACCOUNT_ACTIONS: &str = "/account-actions";
    pub const USERS: &str = "/users";
    pub const ORGANIZATIONS: &str = "/organizations";
    pub const BUILDINGS: &str = "/buildings";
    pub const TAGS: &str = "/tags";
    pub const EQUIPMENT_TYPES: &str = "/equiptype";
    pub const POINTS: &str = "/points";
    pub const POINTS_SELECT: &str = "/points/select";
    pub const POINT_TYPES: &str = "/pointtypes";
    pub const MEASUREMENTS: &str = "/measurements";
    pub const UNITS: &str = "/unit";
    pub const QUERY: &str = "/query";
    pub const POINTS_UPDATE: &str = "/points_update";
    pub const INGEST_STATS: &str = "/ingest-stats";
    pub const ALERTS: &str = "/alerts";
    pub const POINT_DATA_COPY: &str = "/point-data-copy";
}

/// Join an endpoint path (optionally with a query string) onto the base URL.
///
/// Any path prefix on the base URL is kept, so a base of
/// `https://host/api` and an endpoint of `/points` yields
/// `https://host/api/points`.
pub fn build_endpoint_url(base: &Url, endpoint: &str) -> ClientResult<Url> {
    if base.cannot_be_a_base() {
        return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
    }

    let (path, query) = match endpoint.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (endpoint, None),
    };

    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/{}", path.trim_start_matches('/')));
    url.set_query(query);
    url.set_fragment(None);
    Ok(url)
}

/// Endpoint listing a building's equipment with point ids attached.
pub fn building_equipment_endpoint(building_id: i64) -> String {
    format!("{}/{building_id}/equipment?points=true", paths::BUILDINGS)
}

/// Endpoint fetching points by id: `/points?point_ids=[1,2,3]`.
pub fn points_by_ids_endpoint(point_ids: &[i64]) -> String {
    let ids = point_ids
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("{}?point_ids=[{ids}]", paths::POINTS)
}

/// Endpoint fetching points by datasource hash.
///
/// The hashes are sent as a quoted list, `['h1','h2']`, percent-encoded.
pub fn points_by_datasource_endpoint(hashes: &[String]) -> String {
    let list = hashes
        .iter()
        .map(|h| format!("'{h}'"))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{}?datasource_hashes={}",
        paths::POINTS,
        urlencoding::encode(&format!("[{list}]"))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.onboarddata.io").unwrap()
    }

    #[test]
    fn test_build_endpoint_url_root_base() {
        let url = build_endpoint_url(&base(), paths::WHOAMI).unwrap();
        assert_eq!(url.as_str(), "https://api.onboarddata.io/whoami");
    }

    #[test]
    fn test_build_endpoint_url_keeps_base_path() {
        let base = Url::parse("http://localhost:8080/api/").unwrap();
        let url = build_endpoint_url(&base, paths::POINTS_SELECT).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/points/select");
    }

    #[test]
    fn test_build_endpoint_url_with_query() {
        let url = build_endpoint_url(&base(), &building_equipment_endpoint(42)).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.onboarddata.io/buildings/42/equipment?points=true"
        );
    }

    #[test]
    fn test_build_endpoint_url_drops_base_query() {
        let base = Url::parse("https://api.onboarddata.io/?debug=1#frag").unwrap();
        let url = build_endpoint_url(&base, paths::TAGS).unwrap();
        assert_eq!(url.as_str(), "https://api.onboarddata.io/tags");
    }

    #[test]
    fn test_build_endpoint_url_rejects_non_base_url() {
        let base = Url::parse("mailto:ops@example.com").unwrap();
        assert!(build_endpoint_url(&base, paths::TAGS).is_err());
    }

    #[test]
    fn test_points_by_ids_endpoint() {
        assert_eq!(points_by_ids_endpoint(&[1, 22, 333]), "/points?point_ids=[1,22,333]");

        let url = build_endpoint_url(&base(), &points_by_ids_endpoint(&[5, 6])).unwrap();
        assert_eq!(url.query(), Some("point_ids=[5,6]"));
    }

    #[test]
    fn test_points_by_datasource_endpoint() {
        let hashes = vec!["abc".to_string(), "def".to_string()];
        assert_eq!(
            points_by_datasource_endpoint(&hashes),
            "/points?datasource_hashes=%5B%27abc%27%2C%27def%27%5D"
        );
    }

    #[test]
    fn test_points_by_datasource_endpoint_survives_url_join() {
        let hashes = vec!["a b".to_string()];
        let url = build_endpoint_url(&base(), &points_by_datasource_endpoint(&hashes)).unwrap();
        assert_eq!(url.query(), Some("datasource_hashes=%5B%27a%20b%27%5D"));
    }
}
