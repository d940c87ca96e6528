//! ApiClient operations for campaigns and insights.

use serde::Deserialize;

use super::{ApiClient, ApiError};
use crate::domain::{AllCampaignsInsights, Campaign, CampaignInsights, CampaignList};

impl ApiClient {
    /// Fetch the full campaign list.
    pub fn list_campaigns(&self) -> Result<CampaignList, ApiError> {
        self.get_json("/campaigns", "failed to fetch campaigns")
    }

    /// Fetch a single campaign by id.
    ///
    /// Error bodies from this endpoint may carry a `message` field; when
    /// present and parsable it is preferred over the generic status
    /// message.
    pub fn get_campaign(&self, id: &str) -> Result<Campaign, ApiError> {
        #[derive(Deserialize)]
        struct Response {
            campaign: Campaign,
        }

        #[derive(Deserialize)]
        struct ErrorBody {
            message: String,
        }

        let url = format!("{}/campaigns/{}", self.base_url, encode_path_segment(id));
        match self.client.get(&url).call() {
            Ok(response) => {
                let response: Response = response
                    .into_json()
                    .map_err(|e| ApiError::Body(e.to_string()))?;
                Ok(response.campaign)
            }
            Err(ureq::Error::Status(status, response)) => {
                let message = response
                    .into_string()
                    .ok()
                    .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
                    .map(|body| body.message)
                    .unwrap_or_else(|| format!("HTTP {}: failed to fetch campaign", status));
                Err(ApiError::Status { status, message })
            }
            Err(ureq::Error::Transport(transport)) => Err(ApiError::Network(transport.to_string())),
        }
    }

    /// Fetch aggregate insights across all campaigns.
    ///
    /// The body is flat, not wrapped in an envelope. A body without
    /// `total_impressions` fails to decode and surfaces as
    /// [`ApiError::Body`].
    pub fn get_all_insights(&self) -> Result<AllCampaignsInsights, ApiError> {
        self.get_json("/campaigns/insights", "insights API unavailable")
    }

    /// Fetch performance insights for a single campaign.
    pub fn get_campaign_insights(&self, id: &str) -> Result<CampaignInsights, ApiError> {
        #[derive(Deserialize)]
        struct Response {
            insights: CampaignInsights,
        }

        let path = format!("/campaigns/{}/insights", encode_path_segment(id));
        let response: Response = self.get_json(&path, "campaign insights unavailable")?;
        Ok(response.insights)
    }
}

/// Percent-encode a URL path segment; RFC 3986 unreserved bytes pass
/// through untouched.
fn encode_path_segment(segment: &str) -> String {
    use std::fmt::Write;

    let mut encoded = String::with_capacity(segment.len());
    for &byte in segment.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            _ => {
                let _ = write!(encoded, "%{:02X}", byte);
            }
        }
    }
    encoded
}
