// Unlock gate: session state, the actor that drives it, and the
// presentation-side controller

pub mod actor;
pub mod auth;
pub mod machine;
pub mod presentation;
pub mod session;

pub use actor::{ChannelPresenter, GateActor, GateHandle, GateIntent};
pub use auth::PinAuth;
pub use machine::{GateEvent, SessionStateMachine};
pub use presentation::{GateContent, GateController, PinOutcome};
pub use session::{GatePhase, GateSession};
