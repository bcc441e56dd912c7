use anyhow::{Context, Result};
use chrono::{Local, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::utils::format_duration;
use crate::challenge::ChallengeGenerator;
use crate::device::{self, DeviceCommand};
use crate::gate::{
    ChannelPresenter, GateActor, GateContent, GateController, GateEvent, GateHandle, GateIntent,
    GatePhase, GateSession, PinOutcome, SessionStateMachine,
};
use crate::settings::{self, SettingsProvider, SettingsStore};

/// Capacity of the gate event queue
const EVENT_QUEUE_CAPACITY: usize = 64;

/// Run the gate on stdin/stdout until `quit` or end of input
pub fn run_gate(settings_path: PathBuf, secure_keyguard: bool, poll_interval: u64) -> Result<()> {
    let store = Arc::new(SettingsStore::open(settings_path)?);
    tracing::info!("Using settings from {}", store.path().display());

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let result = runtime.block_on(run_console(store, secure_keyguard, poll_interval));

    // A pending stdin read must not keep the process alive
    runtime.shutdown_background();
    result
}

async fn run_console(store: Arc<SettingsStore>, secure_keyguard: bool, poll_interval: u64) -> Result<()> {
    let (mut console, mut actor_task) = GateConsole::start(store, secure_keyguard)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut settings_poll = tokio::time::interval(Duration::from_secs(poll_interval.max(1)));
    settings_poll.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    println!("Gate running. Type 'help' for commands.");

    loop {
        tokio::select! {
            finished = &mut actor_task => {
                return match finished {
                    Ok(result) => result.context("Gate stopped"),
                    Err(e) => Err(anyhow::anyhow!("Gate actor panicked: {}", e)),
                };
            }
            Some(_) = console.next_intent() => {}
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read input")? else {
                    tracing::info!("End of input");
                    break;
                };

                match device::parse_command(&line, console.keyguard_secure) {
                    Ok(Some(command)) => {
                        if !console.execute(command).await? {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(e) => println!("{:#}", e),
                }
            }
            _ = settings_poll.tick() => {
                console.reload_settings().await?;
            }
        }
    }

    drop(console);
    match actor_task.await {
        Ok(result) => result,
        Err(e) => Err(anyhow::anyhow!("Gate actor panicked: {}", e)),
    }
}

/// Text front end for the gate
///
/// Owns the presentation-side controller and forwards device signals and
/// gate outcomes to the gate actor.
pub struct GateConsole {
    store: Arc<SettingsStore>,
    handle: GateHandle,
    controller: GateController,
    intents: mpsc::UnboundedReceiver<GateIntent>,
    keyguard_secure: bool,
}

impl GateConsole {
    /// Spawn the gate actor and build the console around it
    ///
    /// Fails when the built-in question bank does not validate.
    pub fn start(
        store: Arc<SettingsStore>,
        keyguard_secure: bool,
    ) -> Result<(Self, JoinHandle<Result<()>>)> {
        let generator = ChallengeGenerator::builtin()?;
        let settings: Arc<dyn SettingsProvider> = store.clone();

        let (presenter, intents) = ChannelPresenter::new();
        let machine = SessionStateMachine::new(GateSession::new());
        let (actor, handle) = GateActor::new(machine, settings.clone(), presenter, EVENT_QUEUE_CAPACITY);
        let task = tokio::spawn(actor.run());

        let console = Self {
            store,
            handle,
            controller: GateController::new(generator, settings),
            intents,
            keyguard_secure,
        };

        Ok((console, task))
    }

    /// Display an intent from the gate actor
    pub fn show(&mut self, intent: GateIntent) {
        self.controller.apply(intent);
        self.render();
    }

    /// Handle one command. Returns `false` when the console should exit.
    pub async fn execute(&mut self, command: DeviceCommand) -> Result<bool> {
        match command {
            DeviceCommand::Signal(event) => self.handle.send(event).await?,
            DeviceCommand::Answer(index) => match self.controller.answer(index) {
                Ok(event) => {
                    if event == GateEvent::WrongAnswerSelected {
                        println!("Not quite. Try this one:");
                        self.render();
                    }
                    self.handle.send(event).await?;
                }
                Err(e) => println!("{:#}", e),
            },
            DeviceCommand::Unlock => match self.controller.confirm_unlock() {
                Ok(event) => self.handle.send(event).await?,
                Err(e) => println!("{:#}", e),
            },
            DeviceCommand::Pin(pin) => match self.controller.enter_pin(&pin) {
                Ok(PinOutcome::Accepted) => self.handle.send(GateEvent::PinVerified).await?,
                Ok(PinOutcome::Rejected) => println!("Incorrect PIN"),
                Err(e) => println!("{:#}", e),
            },
            DeviceCommand::Emergency => match self.controller.emergency() {
                Ok(()) => self.render(),
                Err(e) => println!("{:#}", e),
            },
            DeviceCommand::Quiz => match self.controller.back_to_quiz() {
                Ok(()) => self.render(),
                Err(e) => println!("{:#}", e),
            },
            DeviceCommand::Duration { minutes, pin } => {
                if let Err(e) = settings::authorize_change(&self.store.snapshot(), pin.as_deref()) {
                    println!("{:#}", e);
                    return Ok(true);
                }

                match self
                    .store
                    .update(|settings| settings.session_duration_minutes = minutes)
                {
                    Ok(change) => {
                        println!("✓ Session duration set to {} minutes", minutes);
                        if change.duration_changed {
                            self.handle.send(GateEvent::SessionDurationChanged).await?;
                        }
                    }
                    Err(e) => println!("{:#}", e),
                }
            }
            DeviceCommand::Status => self.print_status(),
            DeviceCommand::Help => println!("{}", device::HELP),
            DeviceCommand::Quit => return Ok(false),
        }

        Ok(true)
    }

    /// Pick up edits made to the settings file by another process
    pub async fn reload_settings(&self) -> Result<()> {
        match self.store.reload_if_changed() {
            Ok(Some(change)) if change.duration_changed => {
                self.handle.send(GateEvent::SessionDurationChanged).await?;
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Ignoring settings change: {:#}", e),
        }
        Ok(())
    }

    pub fn status(&self) -> GateSession {
        self.handle.status()
    }

    /// Wait for the next intent from the gate actor and display it
    pub async fn next_intent(&mut self) -> Option<GateIntent> {
        let intent = self.intents.recv().await?;
        self.show(intent);
        Some(intent)
    }

    fn render(&self) {
        match self.controller.content() {
            Some(GateContent::Challenge(challenge)) => {
                println!("\n{}", challenge.question);
                for (i, option) in challenge.options.iter().enumerate() {
                    println!("  {}) {}", i + 1, option);
                }
                println!("Answer with 'answer <n>', or 'emergency' for the parent PIN.");
            }
            Some(GateContent::SimpleUnlock) => {
                println!("\nDevice locked. Type 'unlock' to continue.");
            }
            Some(GateContent::PinPad) => {
                println!("\nEnter the parent PIN with 'pin <digits>', or 'quiz' for a challenge.");
            }
            None => println!("\nUnlocked."),
        }
    }

    fn print_status(&self) {
        let session = self.status();
        let now = Utc::now();

        match session.phase() {
            GatePhase::Unlocked => {
                let remaining = session.remaining(now).map(format_duration).unwrap_or_default();
                println!("Unlocked, {} left", remaining);
                if let Some(expires_at) = session.expires_at() {
                    println!(
                        "  Expires at: {}",
                        expires_at.with_timezone(&Local).format("%H:%M:%S")
                    );
                }
                if let Some(id) = session.session_id() {
                    println!("  Session: {}", id);
                }
            }
            GatePhase::Locked => {
                println!(
                    "Locked ({})",
                    if self.controller.is_showing() { "gate shown" } else { "gate hidden" }
                );
            }
        }
        println!(
            "  Next unlock forced: {}",
            if session.gate_required(now) { "yes" } else { "no" }
        );
        if session.pending_screen_off() {
            println!("  Screen turned off since the last unlock");
        }
    }
}
