//! Job controller runtime.
//!
//! Applies messages to the pure core state, executes the resulting effects and
//! owns the poll interval and fallback timer of the active hunt. Everything
//! runs on the caller's tokio runtime; network calls are spawned and post
//! their outcome back as messages.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use hunt_logging::{hunt_debug, hunt_error, hunt_info, hunt_warn};
use leadhunt_core::{update, AppState, AppViewModel, Effect, FetchOrigin, Lead, Msg};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::client::LeadService;
use crate::export::write_csv_export;
use crate::timer::TimerHandle;

#[derive(Debug, Clone)]
pub struct ControllerSettings {
    /// Lead fetch cadence while a hunt is running.
    pub poll_interval: Duration,
    /// Time after an accepted launch at which the hunt is forced back to idle.
    pub fallback_after: Duration,
    pub export_dir: PathBuf,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(3),
            fallback_after: Duration::from_secs(30),
            export_dir: PathBuf::from("."),
        }
    }
}

pub struct JobController {
    state: AppState,
    service: Arc<dyn LeadService>,
    settings: ControllerSettings,
    msg_tx: UnboundedSender<Msg>,
    msg_rx: UnboundedReceiver<Msg>,
    poll_timer: Option<TimerHandle>,
    fallback_timer: Option<TimerHandle>,
}

impl JobController {
    pub fn new(service: Arc<dyn LeadService>, settings: ControllerSettings) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            service,
            settings,
            msg_tx,
            msg_rx,
            poll_timer: None,
            fallback_timer: None,
        }
    }

    /// Loads the leads the service already holds.
    pub fn mount(&mut self) {
        self.dispatch(Msg::Mounted);
    }

    /// Sender for posting messages from outside, e.g. operator input.
    pub fn sender(&self) -> UnboundedSender<Msg> {
        self.msg_tx.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn is_polling(&self) -> bool {
        self.poll_timer.is_some()
    }

    pub fn has_fallback_armed(&self) -> bool {
        self.fallback_timer
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }

    /// Apply one message and execute its effects. Must be called inside a tokio runtime.
    pub fn dispatch(&mut self, msg: Msg) {
        if let Msg::LeadsFetchFailed { origin, reason } = &msg {
            hunt_warn!("Lead fetch ({:?}) failed: {}", origin, reason);
        }
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        for effect in effects {
            self.run_effect(effect);
        }
    }

    /// Wait for the next posted message and apply it. Cancel-safe.
    pub async fn step(&mut self) {
        // The controller keeps a sender alive, so the channel never closes here.
        if let Some(msg) = self.msg_rx.recv().await {
            self.dispatch(msg);
        }
    }

    /// Keep applying posted messages until `duration` has elapsed.
    pub async fn drive_for(&mut self, duration: Duration) {
        let deadline = tokio::time::Instant::now() + duration;
        loop {
            let next = tokio::select! {
                _ = tokio::time::sleep_until(deadline) => None,
                msg = self.msg_rx.recv() => msg,
            };
            match next {
                Some(msg) => self.dispatch(msg),
                None => break,
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::StartJob { hunt, criteria } => {
                hunt_info!(
                    "Starting hunt {} role={:?} industry={:?}",
                    hunt,
                    criteria.role,
                    criteria.industry
                );
                let service = self.service.clone();
                let tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    let msg = match service.start_job(&criteria).await {
                        Ok(()) => {
                            hunt_info!("Hunt {} accepted by service", hunt);
                            Msg::LaunchAccepted { hunt }
                        }
                        Err(err) => {
                            hunt_error!("Hunt {} failed to start: {}", hunt, err);
                            Msg::LaunchFailed {
                                hunt,
                                reason: err.user_reason(),
                            }
                        }
                    };
                    // The controller may be gone; the outcome is then discarded.
                    let _ = tx.send(msg);
                });
            }
            Effect::FetchLeads { origin } => self.spawn_fetch(origin),
            Effect::StartPolling { hunt } => {
                hunt_debug!(
                    "Polling leads every {:?} for hunt {}",
                    self.settings.poll_interval,
                    hunt
                );
                self.poll_timer = Some(TimerHandle::every(
                    self.settings.poll_interval,
                    self.msg_tx.clone(),
                    move || Msg::PollTick { hunt },
                ));
            }
            Effect::ArmFallback { hunt } => {
                hunt_debug!(
                    "Hunt {} will be stopped after {:?}",
                    hunt,
                    self.settings.fallback_after
                );
                self.fallback_timer = Some(TimerHandle::after(
                    self.settings.fallback_after,
                    self.msg_tx.clone(),
                    Msg::FallbackElapsed { hunt },
                ));
            }
            Effect::StopTimers => {
                hunt_info!("Hunt ended; stopping poll and fallback timers");
                self.stop_timers();
            }
            Effect::ExportCsv { leads } => self.export(&leads),
        }
    }

    fn spawn_fetch(&self, origin: FetchOrigin) {
        let service = self.service.clone();
        let tx = self.msg_tx.clone();
        tokio::spawn(async move {
            let msg = match service.fetch_leads().await {
                Ok(leads) => {
                    hunt_debug!("Fetched {} leads ({:?})", leads.len(), origin);
                    Msg::LeadsFetched(leads)
                }
                Err(err) => Msg::LeadsFetchFailed {
                    origin,
                    reason: err.to_string(),
                },
            };
            let _ = tx.send(msg);
        });
    }

    fn export(&self, leads: &[Lead]) {
        let today = chrono::Utc::now().date_naive();
        let msg = match write_csv_export(&self.settings.export_dir, leads, today) {
            Ok(summary) => Msg::ExportWritten {
                path: summary.path,
                rows: summary.rows,
            },
            Err(err) => {
                hunt_error!("CSV export failed: {}", err);
                Msg::ExportFailed {
                    reason: err.to_string(),
                }
            }
        };
        let _ = self.msg_tx.send(msg);
    }

    fn stop_timers(&mut self) {
        self.poll_timer.take();
        self.fallback_timer.take();
    }
}

impl Drop for JobController {
    fn drop(&mut self) {
        if self.poll_timer.is_some() || self.fallback_timer.is_some() {
            hunt_info!("Controller torn down; cancelling hunt timers");
        }
        self.stop_timers();
    }
}
