//! Background fetch worker for the dashboard
//!
//! The GUI never blocks on the network: one worker thread owns the
//! [`ApiClient`], takes requests over a channel and reports outcomes
//! back over another. The frame loop drains the event side with
//! `try_recv`.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread;

use tracing::warn;

use crate::api::{ApiClient, ApiError};
use crate::domain::{AllCampaignsInsights, Campaign, CampaignInsights};

/// Work for the fetch thread.
#[derive(Debug, Clone)]
pub enum FetchRequest {
    /// Load the campaign list.
    Campaigns,
    /// Load server aggregate insights.
    AllInsights,
    /// Load one campaign and its insights for the detail view.
    Detail(String),
}

/// Outcome reported back to the GUI.
#[derive(Debug)]
pub enum FetchEvent {
    /// A campaign-list attempt finished.
    CampaignsLoaded(Result<Vec<Campaign>, ApiError>),
    /// Server aggregate insights arrived and decoded cleanly. Failures
    /// never produce an event; the dashboard keeps its estimate.
    InsightsLoaded(AllCampaignsInsights),
    /// Both detail fetches finished; a failed half arrives as `None`.
    DetailLoaded {
        id: String,
        campaign: Option<Campaign>,
        insights: Option<CampaignInsights>,
    },
}

/// GUI-side handle to the fetch worker.
pub struct Fetcher {
    tx: Sender<FetchRequest>,
    rx: Receiver<FetchEvent>,
}

impl Fetcher {
    /// Queue a request for the worker.
    pub fn request(&self, request: FetchRequest) {
        // A send failure means the worker is gone, i.e. we are shutting
        // down; nothing useful to do with it.
        let _ = self.tx.send(request);
    }

    /// Next pending event, if any. Never blocks.
    pub fn try_next(&self) -> Option<FetchEvent> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

/// Spawn the fetch worker and return the GUI-side handle.
pub fn start_fetcher(client: ApiClient) -> Fetcher {
    let (request_tx, request_rx) = channel::<FetchRequest>();
    let (event_tx, event_rx) = channel::<FetchEvent>();

    thread::spawn(move || {
        while let Ok(request) = request_rx.recv() {
            if let Some(event) = handle_request(&client, request) {
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        }
    });

    Fetcher {
        tx: request_tx,
        rx: event_rx,
    }
}

/// Execute one request. Returns `None` when the outcome is absorbed
/// here rather than surfaced to the UI.
fn handle_request(client: &ApiClient, request: FetchRequest) -> Option<FetchEvent> {
    match request {
        FetchRequest::Campaigns => {
            let result = client.list_campaigns().map(|list| list.campaigns);
            if let Err(e) = &result {
                warn!("campaign list fetch failed: {}", e);
            }
            Some(FetchEvent::CampaignsLoaded(result))
        }
        FetchRequest::AllInsights => match client.get_all_insights() {
            Ok(insights) => Some(FetchEvent::InsightsLoaded(insights)),
            Err(e) => {
                warn!("aggregate insights fetch failed, keeping estimate: {}", e);
                None
            }
        },
        FetchRequest::Detail(id) => {
            // Two independent fetches, run back to back; the modal stays
            // in its loading state until both are done.
            let campaign = match client.get_campaign(&id) {
                Ok(campaign) => Some(campaign),
                Err(e) => {
                    warn!("campaign {} fetch failed: {}", id, e);
                    None
                }
            };
            let insights = match client.get_campaign_insights(&id) {
                Ok(insights) => Some(insights),
                Err(e) => {
                    warn!("campaign {} insights fetch failed: {}", id, e);
                    None
                }
            };
            Some(FetchEvent::DetailLoaded {
                id,
                campaign,
                insights,
            })
        }
    }
}
