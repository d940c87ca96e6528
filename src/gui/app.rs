//! Main dashboard application: state plus the plumbing that feeds it
//!
//! [`DashboardApp`] owns the view state, the fetch-worker handle and the
//! retry deadline. Events flow in from the renderer and the worker,
//! commands flow out to the worker or the timer. Rendering itself is
//! split across the sibling modules.

use std::time::Instant;

use tracing::{debug, info};

use super::fetcher::{FetchEvent, FetchRequest, Fetcher};
use super::state::{Command, DashboardState, Event, RETRY_DELAY};

/// Main application state.
pub struct DashboardApp {
    /// View state; mutated only through [`DashboardState::apply`].
    pub(super) state: DashboardState,
    /// Handle to the background fetch worker.
    fetcher: Fetcher,
    /// Deadline of the pending automatic retry, if one is scheduled.
    retry_at: Option<Instant>,
}

impl DashboardApp {
    /// Create the app and kick off the initial campaign load.
    pub fn new(fetcher: Fetcher) -> Self {
        let mut app = Self {
            state: DashboardState::new(),
            fetcher,
            retry_at: None,
        };
        app.start_load();
        app
    }

    /// Apply an event and execute whatever it commands.
    pub(super) fn dispatch(&mut self, event: Event) {
        let commands = self.state.apply(event);
        for command in commands {
            self.run_command(command);
        }
    }

    fn run_command(&mut self, command: Command) {
        match command {
            Command::FetchCampaigns => self.start_load(),
            Command::ScheduleRetry => {
                debug!("retrying campaign load in {:?}", RETRY_DELAY);
                self.retry_at = Some(Instant::now() + RETRY_DELAY);
            }
            Command::FetchAllInsights => self.fetcher.request(FetchRequest::AllInsights),
            Command::FetchDetail(id) => self.fetcher.request(FetchRequest::Detail(id)),
        }
    }

    /// Begin a campaign-list attempt.
    fn start_load(&mut self) {
        self.dispatch(Event::LoadStarted);
        self.fetcher.request(FetchRequest::Campaigns);
    }

    /// Per-frame bookkeeping: fire a due retry and drain fetch events.
    pub(super) fn poll(&mut self) {
        if let Some(deadline) = self.retry_at {
            if Instant::now() >= deadline {
                self.retry_at = None;
                self.start_load();
            }
        }

        while let Some(event) = self.fetcher.try_next() {
            match event {
                FetchEvent::CampaignsLoaded(Ok(campaigns)) => {
                    info!("loaded {} campaigns", campaigns.len());
                    self.dispatch(Event::LoadSucceeded(campaigns));
                }
                FetchEvent::CampaignsLoaded(Err(_)) => self.dispatch(Event::LoadFailed),
                FetchEvent::InsightsLoaded(insights) => {
                    self.dispatch(Event::InsightsReceived(insights));
                }
                FetchEvent::DetailLoaded {
                    id,
                    campaign,
                    insights,
                } => {
                    self.dispatch(Event::DetailResolved {
                        id,
                        campaign,
                        insights,
                    });
                }
            }
        }
    }
}
