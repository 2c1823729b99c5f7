//! `reefer-core` — foundational types for the `reefer-sim` cold-chain twin.
//!
//! This crate is a dependency of every other `reefer-*` crate.  It
//! intentionally has no `reefer-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `NodeId`, `SkuId`                                 |
//! | [`time`]    | `Minute` absolute simulation-minute counter       |
//! | [`rng`]     | `SimRng` (explicitly seeded, per-component)       |
//! | [`sku`]     | `SkuParams`, `SkuTable`                           |
//! | [`params`]  | `ThermalParams`, `SimParams`                      |
//! | [`error`]   | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod sku;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{NodeId, SkuId};
pub use params::{SimParams, ThermalParams};
pub use rng::SimRng;
pub use sku::{default_produce_table, SkuParams, SkuTable};
pub use time::Minute;

/// The reserved depot node: every route starts and ends here.
pub const DEPOT: NodeId = NodeId(0);
