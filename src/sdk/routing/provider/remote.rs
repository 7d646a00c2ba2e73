use super::types::{parse_places, parse_route, DirectionsRequest};
use crate::sdk::config::OrsConfig;
use crate::sdk::routing::coord::Coordinate;
use crate::sdk::routing::error::NetworkError;
use crate::sdk::routing::geocode::{AutocompleteQuery, Place};
use crate::sdk::routing::route::RouteResult;
use crate::sdk::routing::service::RoutingProvider;
use crate::sdk::util::rate_limit::{self, Limiter};
use reqwest::blocking::{Client, Request};
use std::time::Duration;

const GEOCODE_PATH: &str = "/geocode/search";
const AUTOCOMPLETE_PATH: &str = "/geocode/autocomplete";

pub struct RemoteOrsProvider {
    client: Client,
    api_key: String,
    base_url: String,
    profile: String,
    language: String,
    limiter: Limiter,
}

impl RemoteOrsProvider {
    pub fn new(config: &OrsConfig, limiter: Limiter) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            profile: config.profile.clone(),
            language: config.language.clone(),
            limiter,
        })
    }

    fn directions_path(&self) -> String {
        format!("/v2/directions/{}/geojson", self.profile)
    }

    fn geocode_request(&self, text: &str) -> Result<Request, NetworkError> {
        let request = self
            .client
            .get(format!("{}{}", self.base_url, GEOCODE_PATH))
            .query(&[("api_key", self.api_key.as_str()), ("text", text)])
            .build()?;
        Ok(request)
    }

    fn autocomplete_request(&self, query: &AutocompleteQuery) -> Result<Request, NetworkError> {
        let size = query.size.to_string();
        let request = self
            .client
            .get(format!("{}{}", self.base_url, AUTOCOMPLETE_PATH))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("text", query.text.as_str()),
                ("boundary.country", query.country.as_str()),
                ("size", size.as_str()),
            ])
            .build()?;
        Ok(request)
    }

    /// Directions authenticate with a header; the key never enters the URL.
    fn directions_request(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<Request, NetworkError> {
        let request = self
            .client
            .post(format!("{}{}", self.base_url, self.directions_path()))
            .query(&[("language", self.language.as_str())])
            .header("Authorization", &self.api_key)
            .json(&DirectionsRequest::new(start, end))
            .build()?;
        Ok(request)
    }

    /// Sends the request and returns the body of a 2xx response.
    ///
    /// `path` is only used for logging; the API key travels in the query
    /// string and must stay out of the logs.
    fn send(&self, request: Request, path: &str) -> Result<String, NetworkError> {
        rate_limit::wait(&self.limiter);

        let response = self.client.execute(request).map_err(|e| {
            log::error!("Failed to send request to {}. Error: {}", path, e);
            e
        })?;

        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            log::error!("{} returned non-success status: {}. Body: {}", path, status, text);
            return Err(NetworkError::from_status(status.as_u16(), &text));
        }
        Ok(text)
    }

    fn log_parse_failure(path: &str, text: &str, e: &NetworkError) {
        log::error!("Failed to parse {} response. Error: {}. Body: {}", path, e, text);
    }
}

impl RoutingProvider for RemoteOrsProvider {
    fn geocode(&self, text: &str) -> Result<Vec<Place>, NetworkError> {
        log::debug!("[PROVIDER] Calling remote geocode for: \"{}\"", text);

        let request = self.geocode_request(text)?;
        let body = self.send(request, GEOCODE_PATH)?;
        parse_places(&body).map_err(|e| {
            Self::log_parse_failure(GEOCODE_PATH, &body, &e);
            e
        })
    }

    fn autocomplete(&self, query: &AutocompleteQuery) -> Result<Vec<Place>, NetworkError> {
        log::debug!(
            "[PROVIDER] Calling remote autocomplete for: \"{}\" ({}, size {})",
            query.text,
            query.country,
            query.size
        );

        let request = self.autocomplete_request(query)?;
        let body = self.send(request, AUTOCOMPLETE_PATH)?;
        parse_places(&body).map_err(|e| {
            Self::log_parse_failure(AUTOCOMPLETE_PATH, &body, &e);
            e
        })
    }

    fn get_directions(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<RouteResult, NetworkError> {
        log::debug!(
            "[PROVIDER] Calling remote get_directions for {} -> {}",
            start,
            end
        );

        let path = self.directions_path();
        let request = self.directions_request(start, end)?;
        let text = self.send(request, &path)?;
        parse_route(&text).map_err(|e| {
            Self::log_parse_failure(&path, &text, &e);
            e
        })
    }
}
