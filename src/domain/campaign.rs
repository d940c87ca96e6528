use serde::{Deserialize, Serialize};

/// Lifecycle status of a campaign.
///
/// The backend owns the status set. Values this client does not know are
/// folded into [`CampaignStatus::Unknown`] so a new server-side status
/// renders as a neutral category instead of failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
    #[serde(other)]
    Unknown,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Unknown => "unknown",
        }
    }
}

/// One advertising campaign, as served by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    /// Owning brand. Display value only; there is no brand object here.
    pub brand_id: String,
    pub status: CampaignStatus,
    /// Total budget in the account currency.
    pub budget: f64,
    pub daily_budget: f64,
    /// Platforms the campaign runs on; may be empty.
    #[serde(default)]
    pub platforms: Vec<String>,
    /// Server-formatted creation timestamp, parsed only for display.
    pub created_at: String,
}

/// Response envelope for `GET /campaigns`.
#[derive(Debug, Clone, Deserialize)]
pub struct CampaignList {
    pub campaigns: Vec<Campaign>,
    pub total: usize,
}
