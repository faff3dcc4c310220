//! Tricolor Pass - membership tiers, quests and rewards
//!
//! Members mint a tiered pass, complete quests to earn XP and redeem rewards
//! gated by XP, tier, time window and supply. This crate holds the rule
//! engine behind that flow plus the thin layers a client needs around it.
//!
//! ## Layers
//!
//! 1. **Engine** (`engine`): pure tier math and eligibility rules, plus the
//!    per-record atomic check-and-update operations on the catalog store and
//!    the redemption ledger. No I/O, no logging, no suspension points.
//!
//! 2. **Collaborators** (`contract`, `service`): the async contract stub that
//!    owns passes and the service that drives the engine on behalf of a user,
//!    turning results into events and log lines.

pub mod clock;
pub mod config;
pub mod contract;
pub mod display;
pub mod domain;
pub mod engine;
pub mod service;
pub mod store;

pub use domain::*;
