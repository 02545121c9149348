//! `ck-sim` — the discrete-time checkout simulation engine.
//!
//! # Two-step tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Arrival  — every arrival_interval ticks, synthesize a Customer,
//!                route it to a line per the active RoutingPolicy, and
//!                record the line's new length against the running maximum.
//!   ② Service  — for each station in ascending index order:
//!                  release it if its checkout finished (now >= free_at),
//!                  then, if free and its line is non-empty, dequeue the
//!                  head customer and dispatch it at the current tick,
//!                  accumulating the customer's wait into the totals.
//! ```
//!
//! The three policies (single shared line, shortest line, random line)
//! share this loop and differ only in how arrivals are routed — see
//! [`RoutingPolicy`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ck_core::SimConfig;
//! use ck_sim::{EngineBuilder, NoopObserver, SingleLine};
//!
//! let config = SimConfig {
//!     station_count: 5,
//!     total_ticks: 7_200,
//!     arrival_interval_ticks: 30,
//!     seed: 42,
//! };
//! let mut engine = EngineBuilder::new(config, SingleLine).build()?;
//! engine.run(&mut NoopObserver)?;
//! println!("{} served", engine.stats().customers_served);
//! ```

pub mod builder;
pub mod customer;
pub mod engine;
pub mod error;
pub mod observer;
pub mod policy;
pub mod queue;
pub mod service;
pub mod station;
pub mod stats;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::EngineBuilder;
pub use customer::{Customer, MAX_ITEMS, MIN_ITEMS};
pub use engine::Engine;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use policy::{LeastCustomers, RandomLine, RoutingPolicy, SingleLine};
pub use queue::WaitQueue;
pub use service::{FixedService, ItemScan, ServiceModel};
pub use station::Station;
pub use stats::RunStats;
