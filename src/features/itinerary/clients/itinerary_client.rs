use async_trait::async_trait;

use crate::core::config::ClientConfig;
use crate::core::error::{Result, SubmitError};
use crate::features::itinerary::dtos::{ItineraryRequestDto, ItineraryResponseDto};
use crate::shared::constants::ITINERARY_PATH;
use crate::shared::types::FieldErrors;

/// Remote itinerary creation
#[async_trait]
pub trait ItineraryApi: Send + Sync {
    /// Submit a frozen request and return the created itinerary
    ///
    /// Field-level rejections come back as `SubmitError::Validation`, every
    /// other failure as `SubmitError::Transport`.
    async fn create_itinerary(&self, request: &ItineraryRequestDto)
        -> Result<ItineraryResponseDto>;
}

/// HTTP client for the itinerary service
///
/// One attempt per call: no retries and no timeout at this layer.
pub struct ItineraryClient {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl ItineraryClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> std::result::Result<Self, String> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl ItineraryApi for ItineraryClient {
    async fn create_itinerary(
        &self,
        request: &ItineraryRequestDto,
    ) -> Result<ItineraryResponseDto> {
        request.check().map_err(|errors| {
            tracing::warn!(
                "Refusing to send invalid itinerary request: {:?}",
                errors.fields().collect::<Vec<_>>()
            );
            SubmitError::Validation(errors)
        })?;

        let url = self.config.endpoint(ITINERARY_PATH);

        tracing::debug!(
            "Creating itinerary {} -> {} ({} to {}) via {}",
            request.from,
            request.to,
            request.start_date,
            request.end_date,
            url
        );

        let response = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach itinerary service: {}", e);
                SubmitError::Transport(format!("Failed to reach itinerary service: {}", e))
            })?;

        let status = response.status();

        if status.is_success() {
            let itinerary = response.json::<ItineraryResponseDto>().await.map_err(|e| {
                tracing::error!("Failed to parse itinerary response: {}", e);
                SubmitError::Transport(format!("Failed to parse itinerary response: {}", e))
            })?;

            tracing::info!(
                "Itinerary created: {} ({} -> {})",
                itinerary.id,
                itinerary.from,
                itinerary.to
            );
            return Ok(itinerary);
        }

        // Handle error responses
        let body = response.text().await.unwrap_or_default();

        if status.is_client_error() {
            if let Some(errors) = parse_field_errors(&body) {
                tracing::warn!(
                    "Itinerary service rejected fields: HTTP {} - {:?}",
                    status,
                    errors.fields().collect::<Vec<_>>()
                );
                return Err(SubmitError::Validation(errors));
            }
        }

        tracing::error!("Itinerary service error: HTTP {} - {}", status, body);
        Err(SubmitError::Transport(format!(
            "Itinerary service error: HTTP {}",
            status
        )))
    }
}

/// A structured field-error body is a non-empty JSON object of strings
fn parse_field_errors(body: &str) -> Option<FieldErrors> {
    serde_json::from_str::<FieldErrors>(body)
        .ok()
        .filter(|errors| !errors.is_empty())
}
