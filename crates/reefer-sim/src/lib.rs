//! `reefer-sim` — the tick loop and vehicle state machine of the cold-chain
//! twin.
//!
//! # One tick = one simulated minute
//!
//! ```text
//! for each minute while the route is unfinished and budget remains:
//!   ① Sample    — observer reads minute, elapsed time, per-SKU life
//!                 BEFORE anything advances.
//!   ② Advance   — DC and stores are passive ledgers (nothing to do);
//!                 the vehicle runs one state-machine transition
//!                 (travel / service / decide) plus shelf-life decay.
//!   ③ Log       — if the vehicle delivered this minute, fold the event
//!                 into the append-only delivery log (quantity-weighted
//!                 remaining life) and notify the observer.
//!   ④ Tick      — advance the absolute minute counter.
//! ```
//!
//! The vehicle hands its delivery event to the model as the *return value*
//! of its step call, so there is no persistent event slot to forget to
//! clear.
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                |
//! |-----------|-------------------------------------------------------|
//! | `fx-hash` | FxHash for the node → store ledger map.               |
//! | `serde`   | Serde derives on log records and value types.         |

pub mod builder;
pub mod error;
pub mod log;
pub mod model;
pub mod observer;
pub mod store;
pub mod vehicle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use log::{DeliveryEvent, DeliveryRecord};
pub use model::SimModel;
pub use observer::{NoopObserver, SimObserver};
pub use store::{Store, StoreLedger};
pub use vehicle::Vehicle;
