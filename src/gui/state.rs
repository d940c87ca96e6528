//! Dashboard view state and its transition rules
//!
//! All view state lives in [`DashboardState`]. Every UI interaction and
//! network outcome is an [`Event`], and [`DashboardState::apply`] is the
//! only place state changes. Transitions return [`Command`]s for the app
//! layer to carry out, which keeps this module free of I/O and directly
//! testable.

use std::time::Duration;

use crate::domain::{AllCampaignsInsights, Campaign, CampaignInsights, CampaignStatus};
use crate::insights::estimate_from_campaigns;

/// Automatic retries allowed after the first failed campaign load.
pub const MAX_LOAD_RETRIES: u32 = 2;

/// Delay before each automatic retry.
pub const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Terminal message shown once all load attempts are spent.
pub const LOAD_ERROR_MESSAGE: &str = "Unable to load campaigns. Please try again.";

/// Status filter applied to the campaign list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Paused,
    Completed,
}

impl StatusFilter {
    /// Every filter, in display order.
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Active,
        StatusFilter::Paused,
        StatusFilter::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Paused => "Paused",
            StatusFilter::Completed => "Completed",
        }
    }

    /// Whether a campaign passes this filter. `All` matches every
    /// campaign, including ones with statuses this client does not know.
    pub fn matches(&self, campaign: &Campaign) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => campaign.status == CampaignStatus::Active,
            StatusFilter::Paused => campaign.status == CampaignStatus::Paused,
            StatusFilter::Completed => campaign.status == CampaignStatus::Completed,
        }
    }
}

/// Something that happened, from the UI or from the fetch worker.
#[derive(Debug, Clone)]
pub enum Event {
    /// A campaign-list attempt is going out.
    LoadStarted,
    /// The campaign list arrived.
    LoadSucceeded(Vec<Campaign>),
    /// A campaign-list attempt failed.
    LoadFailed,
    /// Server aggregate insights arrived and decoded cleanly.
    InsightsReceived(AllCampaignsInsights),
    /// The user asked for a campaign's detail view.
    DetailRequested(String),
    /// Both detail fetches finished, each with its own outcome.
    DetailResolved {
        id: String,
        campaign: Option<Campaign>,
        insights: Option<CampaignInsights>,
    },
    /// The user picked a status filter.
    FilterChanged(StatusFilter),
    /// The detail modal was dismissed.
    ModalClosed,
    /// The user pressed Retry on the error screen.
    RetryRequested,
}

/// Side effect requested by a transition, executed by the app layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a campaign-list attempt now.
    FetchCampaigns,
    /// Start another campaign-list attempt after [`RETRY_DELAY`].
    ScheduleRetry,
    /// Ask the server for aggregate insights.
    FetchAllInsights,
    /// Load detail data for one campaign.
    FetchDetail(String),
}

/// All view state of the dashboard.
#[derive(Debug, Default)]
pub struct DashboardState {
    /// A campaign-list attempt is in flight.
    pub loading: bool,
    /// Terminal load error, shown full-screen until a manual retry.
    pub error: Option<String>,
    /// Automatic retries consumed so far.
    pub retry_count: u32,
    /// Current status filter.
    pub filter: StatusFilter,
    /// Last successfully fetched campaign list.
    pub campaigns: Vec<Campaign>,
    /// Aggregate insights; the local estimate until the server answers.
    pub insights: Option<AllCampaignsInsights>,
    /// Campaign shown in the detail modal.
    pub selected_campaign: Option<Campaign>,
    /// Detail fetches are in flight.
    pub modal_loading: bool,
    /// Per-campaign insights for the modal, when the server had data.
    pub campaign_insights: Option<CampaignInsights>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event and return the side effects it asks for.
    pub fn apply(&mut self, event: Event) -> Vec<Command> {
        match event {
            Event::LoadStarted => {
                self.loading = true;
                self.error = None;
                Vec::new()
            }
            Event::LoadSucceeded(campaigns) => {
                self.campaigns = campaigns;
                self.retry_count = 0;
                self.error = None;
                self.loading = false;
                if self.campaigns.is_empty() {
                    Vec::new()
                } else {
                    // Estimate first; a shape-valid server response
                    // overwrites it when the fetch comes back.
                    self.insights = Some(estimate_from_campaigns(&self.campaigns));
                    vec![Command::FetchAllInsights]
                }
            }
            Event::LoadFailed => {
                // The spinner clears on every attempt, retry pending or
                // not; the brief flicker between attempts is expected.
                self.loading = false;
                if self.retry_count < MAX_LOAD_RETRIES {
                    self.retry_count += 1;
                    vec![Command::ScheduleRetry]
                } else {
                    self.error = Some(LOAD_ERROR_MESSAGE.to_string());
                    Vec::new()
                }
            }
            Event::InsightsReceived(insights) => {
                self.insights = Some(insights);
                Vec::new()
            }
            Event::DetailRequested(id) => {
                self.modal_loading = true;
                vec![Command::FetchDetail(id)]
            }
            Event::DetailResolved {
                id,
                campaign,
                insights,
            } => {
                match campaign {
                    Some(campaign) => self.selected_campaign = Some(campaign),
                    // Fall back to the copy already held in the list;
                    // when the id is not there either, the selection
                    // stays whatever it was.
                    None => {
                        if let Some(held) = self.campaigns.iter().find(|c| c.id == id) {
                            self.selected_campaign = Some(held.clone());
                        }
                    }
                }
                self.campaign_insights = insights.filter(|i| i.has_data());
                self.modal_loading = false;
                Vec::new()
            }
            Event::FilterChanged(filter) => {
                self.filter = filter;
                Vec::new()
            }
            Event::ModalClosed => {
                self.selected_campaign = None;
                self.campaign_insights = None;
                Vec::new()
            }
            Event::RetryRequested => {
                self.retry_count = 0;
                vec![Command::FetchCampaigns]
            }
        }
    }

    /// Campaigns passing the current filter, original order preserved.
    pub fn filtered_campaigns(&self) -> impl Iterator<Item = &Campaign> + '_ {
        self.campaigns.iter().filter(|c| self.filter.matches(c))
    }

    /// Number of campaigns a filter would show, for the filter buttons.
    pub fn filter_count(&self, filter: StatusFilter) -> usize {
        self.campaigns.iter().filter(|c| filter.matches(c)).count()
    }
}
