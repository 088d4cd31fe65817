//! `cardlink-runner` — async driver for visit action sequences.
//!
//! The core state machine ([`cardlink_core::RunnerState`]) is synchronous and
//! pure; this crate supplies everything around it that touches the outside
//! world:
//!
//! ```text
//! raw path segment
//!     │  VisitTarget::parse
//!     ▼
//! StoreClient     ← GET /api/public/business-card/{id} (card targets)
//!     │
//!     ▼
//! drive::run      ← tokio timers, one step at a time
//!     │
//!     ▼
//! Browser trait   ← `open` crate in production, recording mock in tests
//! ```
//!
//! Every failure mode degrades rather than errors: a malformed target, an
//! unreachable store, or a blocked browser all leave the host page usable.

pub mod browser;
pub mod drive;
pub mod error;
pub mod store;

pub use browser::{Browser, NullBrowser, SystemBrowser};
pub use drive::{resolve_actions, run, run_visit, RunSummary};
pub use error::RunnerError;
pub use store::StoreClient;

/// Convenience `Result` alias for this crate.
pub type Result<T> = std::result::Result<T, RunnerError>;
