//! Partner API client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use url::Url;
use uuid::Uuid;

use crate::domain::{AppError, Cart, CatalogItemId, CreatedCart, PartnerApiConfig, SkuDescriptor};
use crate::ports::{CartService, SkuCatalog};

pub const ACCESS_TOKEN_ENV: &str = "PARTNER_CENTER_ACCESS_TOKEN";

const X_LOCALE: &str = "X-Locale";
const MS_REQUEST_ID: &str = "MS-RequestId";
const MS_CORRELATION_ID: &str = "MS-CorrelationId";
const DEFAULT_STATUS_MESSAGE: &str = "Partner API request failed";

/// HTTP transport for the partner catalog and cart APIs.
///
/// Every call performs exactly one request; nothing is retried.
#[derive(Clone)]
pub struct HttpPartnerClient {
    access_token: Option<String>,
    api_url: Url,
    locale: String,
    correlation_id: Uuid,
    client: Client,
}

impl std::fmt::Debug for HttpPartnerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPartnerClient")
            .field("api_url", &self.api_url)
            .field("locale", &self.locale)
            .field("correlation_id", &self.correlation_id)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Failure details before they are attributed to a lookup or a submission.
struct RemoteFailure {
    message: String,
    status: Option<u16>,
}

impl HttpPartnerClient {
    /// Create a new HTTP client with an optional bearer token and configuration.
    pub fn new(access_token: Option<String>, config: &PartnerApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            access_token,
            api_url: config.api_url.clone(),
            locale: config.locale.clone(),
            correlation_id: Uuid::new_v4(),
            client,
        })
    }

    /// Create from the optional token environment variable with custom configuration.
    pub fn from_env_with_config(config: &PartnerApiConfig) -> Result<Self, AppError> {
        let access_token = std::env::var(ACCESS_TOKEN_ENV)
            .ok()
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        Self::new(access_token, config)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                AppError::InvalidConfig(format!("api_url cannot be a base: {}", self.api_url))
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    fn prepare(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder
            .header(ACCEPT, "application/json")
            .header(X_LOCALE, &self.locale)
            .header(MS_REQUEST_ID, Uuid::new_v4().to_string())
            .header(MS_CORRELATION_ID, self.correlation_id.to_string());

        match &self.access_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, RemoteFailure> {
        let response = self.prepare(builder).send().map_err(|e| RemoteFailure {
            message: format!("HTTP request failed: {}", e),
            status: None,
        })?;

        let status = response.status();
        let body_text = response.text().map_err(|e| RemoteFailure {
            message: format!("Failed to read response body: {}", e),
            status: Some(status.as_u16()),
        })?;

        if status.is_success() {
            return serde_json::from_str(&body_text).map_err(|e| RemoteFailure {
                message: format!("Failed to parse response: {}", e),
                status: Some(status.as_u16()),
            });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else {
                default_status_message(status)
            }
        });

        Err(RemoteFailure { message, status: Some(status.as_u16()) })
    }
}

fn default_status_message(status: StatusCode) -> String {
    match status {
        StatusCode::NOT_FOUND => "Not found".to_string(),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => "Not authorized".to_string(),
        StatusCode::TOO_MANY_REQUESTS => "Rate limited".to_string(),
        s if s.is_server_error() => "Server error".to_string(),
        _ => DEFAULT_STATUS_MESSAGE.to_string(),
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(description) = parsed.get("description").and_then(|value| value.as_str()) {
        return Some(description.to_string());
    }

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl SkuCatalog for HttpPartnerClient {
    fn get_sku(
        &self,
        country_code: &str,
        item: &CatalogItemId,
    ) -> Result<SkuDescriptor, AppError> {
        let url = self.endpoint(&["products", item.product_id(), "skus", item.sku_id()])?;
        let builder = self.client.get(url).query(&[("country", country_code)]);

        self.send_json(builder).map_err(|failure| AppError::LookupFailed {
            message: failure.message,
            status: failure.status,
        })
    }
}

impl CartService for HttpPartnerClient {
    fn create_cart(&self, customer_id: &str, cart: &Cart) -> Result<CreatedCart, AppError> {
        let url = self.endpoint(&["customers", customer_id, "carts"])?;
        let builder =
            self.client.post(url).header(CONTENT_TYPE, "application/json").json(cart);

        self.send_json(builder).map_err(|failure| AppError::SubmissionFailed {
            message: failure.message,
            status: failure.status,
        })
    }
}
