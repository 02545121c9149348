//! `ck-core` — foundational types for the checkout queueing simulator.
//!
//! This crate is a dependency of every other `ck-*` crate.  It intentionally
//! has no `ck-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                    |
//! |-------------|---------------------------------------------|
//! | [`ids`]     | `StationId`, `LineId`                       |
//! | [`time`]    | `Tick`, `SimClock`, `SimConfig`             |
//! | [`rng`]     | `SimRng` (seeded, injectable randomness)    |
//! | [`error`]   | `CoreError`, `CoreResult`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                               |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  |

pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{LineId, StationId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
