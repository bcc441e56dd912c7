use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, Sleep, sleep_until};

use super::machine::{GateEffect, GateEvent, GateMode, SessionStateMachine};
use super::session::GateSession;
use crate::settings::SettingsProvider;

/// Receives the gate intents emitted by the state machine
pub trait Presenter: Send {
    fn present_gate(&mut self, mode: GateMode) -> Result<()>;
    fn dismiss_gate(&mut self) -> Result<()>;
}

/// Intent forwarded to the presentation side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateIntent {
    Present(GateMode),
    Dismiss,
}

/// Presenter that forwards intents over a channel
pub struct ChannelPresenter {
    tx: mpsc::UnboundedSender<GateIntent>,
}

impl ChannelPresenter {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<GateIntent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Presenter for ChannelPresenter {
    fn present_gate(&mut self, mode: GateMode) -> Result<()> {
        self.tx
            .send(GateIntent::Present(mode))
            .map_err(|_| anyhow::anyhow!("Presentation layer is not running"))
    }

    fn dismiss_gate(&mut self) -> Result<()> {
        self.tx
            .send(GateIntent::Dismiss)
            .map_err(|_| anyhow::anyhow!("Presentation layer is not running"))
    }
}

/// Sending side of the gate event queue
#[derive(Clone)]
pub struct GateHandle {
    events: mpsc::Sender<GateEvent>,
    status: watch::Receiver<GateSession>,
}

impl GateHandle {
    /// Queue an event for the gate actor
    pub async fn send(&self, event: GateEvent) -> Result<()> {
        self.events
            .send(event)
            .await
            .map_err(|_| anyhow::anyhow!("Gate actor has stopped"))
    }

    /// Session state after the last processed event
    pub fn status(&self) -> GateSession {
        self.status.borrow().clone()
    }

    /// Wait until the actor has processed another event
    #[cfg(test)]
    pub async fn changed(&mut self) -> Result<GateSession> {
        self.status
            .changed()
            .await
            .context("Gate actor has stopped")?;
        Ok(self.status.borrow_and_update().clone())
    }
}

struct ArmedTimer {
    generation: u64,
    sleep: Pin<Box<Sleep>>,
}

/// Single owner of the session state machine
///
/// Device signals, gate outcomes and expiry timer firings are handled one at
/// a time in arrival order.
pub struct GateActor<P: Presenter> {
    machine: SessionStateMachine,
    settings: Arc<dyn SettingsProvider>,
    presenter: P,
    events: mpsc::Receiver<GateEvent>,
    status: watch::Sender<GateSession>,
    timer: Option<ArmedTimer>,
}

impl<P: Presenter> GateActor<P> {
    pub fn new(
        machine: SessionStateMachine,
        settings: Arc<dyn SettingsProvider>,
        presenter: P,
        queue_capacity: usize,
    ) -> (Self, GateHandle) {
        let (events_tx, events_rx) = mpsc::channel(queue_capacity);
        let (status_tx, status_rx) = watch::channel(machine.session().clone());

        let actor = Self {
            machine,
            settings,
            presenter,
            events: events_rx,
            status: status_tx,
            timer: None,
        };
        let handle = GateHandle {
            events: events_tx,
            status: status_rx,
        };

        (actor, handle)
    }

    /// Process events until every handle is dropped
    ///
    /// Returns an error if an expiry timer cannot be scheduled.
    pub async fn run(mut self) -> Result<()> {
        tracing::info!("Gate actor started");

        loop {
            let event = tokio::select! {
                received = self.events.recv() => match received {
                    Some(event) => event,
                    None => {
                        tracing::info!("Event queue closed, stopping gate actor");
                        return Ok(());
                    }
                },
                generation = expired(&mut self.timer) => {
                    self.timer = None;
                    GateEvent::ExpiryTimerFired { generation }
                }
            };

            self.dispatch(event)?;
        }
    }

    fn dispatch(&mut self, event: GateEvent) -> Result<()> {
        tracing::debug!("Gate event: {:?}", event);

        let now = Utc::now();
        let effects = self
            .machine
            .handle(event, now, self.settings.as_ref())
            .context("Failed to schedule session expiry")?;

        // Status goes out first so observers woken by an intent see the new phase
        self.status.send_replace(self.machine.session().clone());

        for effect in effects {
            self.apply(effect, now)?;
        }
        Ok(())
    }

    fn apply(&mut self, effect: GateEffect, now: DateTime<Utc>) -> Result<()> {
        match effect {
            GateEffect::Present(mode) => {
                if let Err(e) = self.presenter.present_gate(mode) {
                    tracing::error!("Failed to present gate: {:#}", e);
                }
            }
            GateEffect::Dismiss => {
                if let Err(e) = self.presenter.dismiss_gate() {
                    tracing::error!("Failed to dismiss gate: {:#}", e);
                }
            }
            GateEffect::CancelTimer => {
                if let Some(timer) = self.timer.take() {
                    tracing::debug!("Cancelled expiry timer (generation {})", timer.generation);
                }
            }
            GateEffect::ArmTimer {
                deadline,
                generation,
            } => {
                let wait = (deadline - now).to_std().unwrap_or_default();
                let at = Instant::now()
                    .checked_add(wait)
                    .context("Session expiry is too far in the future")?;

                tracing::debug!(
                    "Expiry timer armed for {} (generation {})",
                    deadline.format("%H:%M:%S"),
                    generation
                );
                self.timer = Some(ArmedTimer {
                    generation,
                    sleep: Box::pin(sleep_until(at)),
                });
            }
        }

        Ok(())
    }
}

/// Completes when the armed timer fires; never completes when none is armed
async fn expired(timer: &mut Option<ArmedTimer>) -> u64 {
    match timer {
        Some(armed) => {
            armed.sleep.as_mut().await;
            armed.generation
        }
        None => std::future::pending().await,
    }
}
