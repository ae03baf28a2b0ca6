//! Google Directions API client.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use serde::Deserialize;

use super::{LegResponse, LegStatus, RoutingError, RoutingProvider};
use crate::models::{Coordinates, LegMetrics};

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com";
const DIRECTIONS_PATH: &str = "/maps/api/directions/json";

/// Connection settings for [`GoogleDirections`].
#[derive(Debug, Clone)]
pub struct RoutingConfig {
    /// API key sent as the `key` query parameter
    pub api_key: Option<String>,
    /// Scheme and host, without the directions path
    pub base_url: String,
    /// Language for the human-readable distance and duration texts
    pub language: String,
    /// Timeout for the whole HTTP exchange
    pub request_timeout: Duration,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            language: "en".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Driving directions from the Google Directions web service.
#[derive(Debug, Clone)]
pub struct GoogleDirections {
    config: RoutingConfig,
    client: reqwest::Client,
}

impl GoogleDirections {
    pub fn new(config: RoutingConfig) -> Result<Self, RoutingError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { config, client })
    }

    fn api_key(&self) -> Result<&str, RoutingError> {
        self.config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(RoutingError::MissingCredential)
    }

    fn directions_url(&self) -> String {
        format!(
            "{}{DIRECTIONS_PATH}",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl RoutingProvider for GoogleDirections {
    fn check_configuration(&self) -> Result<(), RoutingError> {
        self.api_key().map(|_| ())
    }

    async fn compute_leg(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<LegResponse, RoutingError> {
        let key = self.api_key()?;
        let origin = origin.to_query_value();
        let destination = destination.to_query_value();
        debug!("Requesting directions {origin} -> {destination}");

        let response = self
            .client
            .get(self.directions_url())
            .query(&[
                ("origin", origin.as_str()),
                ("destination", destination.as_str()),
                ("key", key),
                ("language", self.config.language.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RoutingError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_directions(&body)
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    #[serde(default)]
    legs: Vec<Leg>,
}

#[derive(Debug, Deserialize)]
struct Leg {
    distance: TextValue,
    duration: TextValue,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    text: String,
    value: u64,
}

/// Decodes a Directions response body. Only the first leg of the first route
/// is used.
fn parse_directions(body: &str) -> Result<LegResponse, RoutingError> {
    let parsed: DirectionsResponse =
        serde_json::from_str(body).map_err(|e| RoutingError::MalformedResponse {
            message: e.to_string(),
        })?;

    match parsed.status.as_str() {
        "OK" => Ok(parsed
            .routes
            .into_iter()
            .next()
            .and_then(|route| route.legs.into_iter().next())
            .map_or_else(
                || LegResponse {
                    status: LegStatus::Ok,
                    metrics: None,
                },
                |leg| {
                    LegResponse::ok(LegMetrics {
                        distance_meters: leg.distance.value,
                        duration_seconds: leg.duration.value,
                        distance_text: leg.distance.text,
                        duration_text: leg.duration.text,
                    })
                },
            )),
        "ZERO_RESULTS" | "NOT_FOUND" => Ok(LegResponse::not_found()),
        other => {
            warn!(
                "Directions API returned {other}: {}",
                parsed.error_message.as_deref().unwrap_or("no details")
            );
            Ok(LegResponse::error())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{Read, Write},
        net::TcpListener,
        thread,
    };

    use super::*;

    const LISBON: Coordinates = Coordinates {
        latitude: 38.7223,
        longitude: -9.1393,
    };
    const PORTO: Coordinates = Coordinates {
        latitude: 41.1579,
        longitude: -8.6291,
    };

    const OK_BODY: &str = r#"{
        "status": "OK",
        "routes": [{
            "legs": [{
                "distance": {"text": "313 km", "value": 313412},
                "duration": {"text": "3 hours 5 mins", "value": 11100}
            }]
        }]
    }"#;

    /// Serves one canned HTTP response and hands back the request line.
    fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buffer = [0u8; 4096];
            let read = stream.read(&mut buffer).unwrap();
            let request = String::from_utf8_lossy(&buffer[..read]).to_string();

            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
            request.lines().next().unwrap_or_default().to_string()
        });

        (base_url, handle)
    }

    fn client(base_url: String) -> GoogleDirections {
        GoogleDirections::new(RoutingConfig {
            api_key: Some("test-key".into()),
            base_url,
            language: "pt-BR".into(),
            request_timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn test_parse_ok_response() {
        let response = parse_directions(OK_BODY).unwrap();
        assert_eq!(response.status, LegStatus::Ok);
        let metrics = response.metrics.unwrap();
        assert_eq!(metrics.distance_meters, 313_412);
        assert_eq!(metrics.duration_seconds, 11_100);
        assert_eq!(metrics.distance_text, "313 km");
    }

    #[test]
    fn test_parse_non_ok_statuses() {
        let zero = parse_directions(r#"{"status": "ZERO_RESULTS", "routes": []}"#).unwrap();
        assert_eq!(zero, LegResponse::not_found());

        let denied = parse_directions(
            r#"{"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid."}"#,
        )
        .unwrap();
        assert_eq!(denied, LegResponse::error());

        let empty = parse_directions(r#"{"status": "OK", "routes": []}"#).unwrap();
        assert_eq!(empty.status, LegStatus::Ok);
        assert!(empty.metrics.is_none());
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = parse_directions("<html>oops</html>").unwrap_err();
        assert!(matches!(err, RoutingError::MalformedResponse { .. }));
    }

    #[test]
    fn test_check_configuration_requires_key() {
        let missing = GoogleDirections::new(RoutingConfig::default()).unwrap();
        assert!(matches!(
            missing.check_configuration(),
            Err(RoutingError::MissingCredential)
        ));

        let blank = GoogleDirections::new(RoutingConfig {
            api_key: Some("   ".into()),
            ..Default::default()
        })
        .unwrap();
        assert!(blank.check_configuration().is_err());
    }

    #[tokio::test]
    async fn test_compute_leg_sends_expected_query() {
        let (base_url, server) = serve_once("HTTP/1.1 200 OK", OK_BODY);

        let response = client(base_url).compute_leg(LISBON, PORTO).await.unwrap();
        let request_line = server.join().unwrap();

        assert_eq!(response.status, LegStatus::Ok);
        assert!(request_line.starts_with("GET /maps/api/directions/json?"));
        assert!(request_line.contains("origin=38.7223%2C-9.1393"));
        assert!(request_line.contains("destination=41.1579%2C-8.6291"));
        assert!(request_line.contains("key=test-key"));
        assert!(request_line.contains("language=pt-BR"));
    }

    #[tokio::test]
    async fn test_compute_leg_http_error() {
        let (base_url, server) = serve_once("HTTP/1.1 503 Service Unavailable", "{}");

        let err = client(base_url).compute_leg(LISBON, PORTO).await.unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, RoutingError::HttpStatus { status: 503 }));
    }

    #[tokio::test]
    async fn test_compute_leg_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = client(base_url).compute_leg(LISBON, PORTO).await.unwrap_err();
        assert!(matches!(err, RoutingError::Transport(_)));
    }
}
