use crate::domain::errors::{FetchError, FetchResult};
use crate::domain::heatmap::{ForwardPeriod, HeatmapApi, HeatmapPayload, IndexName};
use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::http::dto::{IndicesResponse, error_detail};
use futures::future::{Either, select};
use gloo_net::http::Request;
use gloo_timers::future::sleep;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Single attempt deadline; the controller owns any re-issue.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

pub const INDICES_FETCH_FALLBACK: &str = "failed to fetch indices; ensure backend is reachable";

pub fn heatmap_fetch_fallback(index: &IndexName) -> String {
    format!("failed to fetch heatmap for '{}'", index.value())
}

/// Index names come from CSV column headers and contain spaces and slashes;
/// they travel as one path segment. Set mirrors the WHATWG path-segment
/// escapes plus '/' and '%'.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

fn default_base_url() -> String {
    if cfg!(debug_assertions) {
        // Local FastAPI dev server.
        "http://localhost:8000".to_string()
    } else {
        // Same-origin deployment proxies the API under /api.
        "/api".to_string()
    }
}

/// REST client for the heatmap backend. One request per call, no retries,
/// all failures collapsed into the user-displayable message.
#[derive(Clone)]
pub struct HeatmapRestClient {
    base_url: String,
}

impl Default for HeatmapRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HeatmapRestClient {
    pub fn new() -> Self {
        Self { base_url: default_base_url() }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn indices_url(&self) -> String {
        format!("{}/indices", self.base_url)
    }

    pub fn heatmap_url(&self, index: &IndexName, period: Option<ForwardPeriod>) -> String {
        let mut url = format!(
            "{}/heatmap/{}",
            self.base_url,
            utf8_percent_encode(index.value(), PATH_SEGMENT)
        );
        if let Some(period) = period {
            url.push_str("?forward_period=");
            url.push_str(period.as_str());
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        get_logger().info(
            LogComponent::Infrastructure("HeatmapAPI"),
            &format!("📡 GET {url}"),
        );

        let request = async {
            let response = Request::get(url)
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(|e| FetchError::Transport(format!("request failed: {e:?}")))?;

            if !response.ok() {
                let status = response.status();
                let detail = response.text().await.ok().and_then(|body| error_detail(&body));
                return Err(FetchError::Application { status, detail });
            }

            response
                .json::<T>()
                .await
                .map_err(|e| FetchError::Transport(format!("invalid JSON body: {e:?}")))
        };
        let deadline = sleep(Duration::from_secs(REQUEST_TIMEOUT_SECS));

        match select(Box::pin(request), Box::pin(deadline)).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(FetchError::Transport(format!(
                "request timed out after {REQUEST_TIMEOUT_SECS}s"
            ))),
        }
    }
}

impl HeatmapApi for HeatmapRestClient {
    async fn fetch_indices(&self) -> Result<Vec<IndexName>, String> {
        let body: IndicesResponse = self
            .get_json(&self.indices_url())
            .await
            .map_err(|e| {
                get_logger().error(
                    LogComponent::Infrastructure("HeatmapAPI"),
                    &format!("Indices fetch failed: {e}"),
                );
                e.into_message(INDICES_FETCH_FALLBACK)
            })?;
        Ok(body.indices.into_iter().map(IndexName::from).collect())
    }

    async fn fetch_heatmap(
        &self,
        index: &IndexName,
        period: Option<ForwardPeriod>,
    ) -> Result<HeatmapPayload, String> {
        self.get_json(&self.heatmap_url(index, period)).await.map_err(|e| {
            get_logger().error(
                LogComponent::Infrastructure("HeatmapAPI"),
                &format!("Heatmap fetch failed for {}: {e}", index.value()),
            );
            e.into_message(&heatmap_fetch_fallback(index))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HeatmapRestClient {
        HeatmapRestClient::with_base_url("http://localhost:8000")
    }

    #[test]
    fn indices_url_shape() {
        assert_eq!(client().indices_url(), "http://localhost:8000/indices");
    }

    #[test]
    fn heatmap_url_without_period_has_no_query() {
        let url = client().heatmap_url(&IndexName::from("NDX"), None);
        assert_eq!(url, "http://localhost:8000/heatmap/NDX");
    }

    #[test]
    fn heatmap_url_with_period_appends_query() {
        let url = client().heatmap_url(&IndexName::from("NDX"), Some(ForwardPeriod::SixMonths));
        assert_eq!(url, "http://localhost:8000/heatmap/NDX?forward_period=6M");
    }

    #[test]
    fn heatmap_url_encodes_index_name() {
        let url = client().heatmap_url(&IndexName::from("NIFTY 50 A/B"), None);
        assert_eq!(url, "http://localhost:8000/heatmap/NIFTY%2050%20A%2FB");
    }
}
