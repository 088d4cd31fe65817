pub mod action;
pub mod card;
pub mod error;
pub mod io;
pub mod paths;
pub mod runner;
pub mod visit;

pub use action::{schedule, Action, ActionKind, Effect, ScheduledAction, BASE_DELAY};
pub use card::{BusinessCard, CardConfig};
pub use error::{CardlinkError, Result};
pub use runner::{Phase, RunnerState};
pub use visit::{CardId, VisitTarget};
