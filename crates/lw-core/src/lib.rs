//! # lw-core - Prize wheel engine for LuckWheel
//!
//! Holds the prize sectors of a lucky wheel, lays them out for painting and
//! drives the spin animation that always lands on a requested prize.
//!
//! ## Architecture
//!
//! ```text
//! LuckWheel
//!     │
//!     ├── WheelModel (ordered prizes → sector angles)
//!     ├── WheelRenderer (sectors + arc labels → WheelSurface)
//!     └── SpinController (SpinPlan → eased rotation → SpinOutcome)
//! ```
//!
//! The crate knows nothing about a GUI toolkit. Hosts hand the renderer a
//! [`WheelSurface`] and advance the controller with frame deltas.

pub mod animation;
pub mod config;
pub mod easing;
pub mod error;
pub mod layout;
pub mod model;
pub mod prize;
pub mod render;
pub mod spin;
pub mod style;
pub mod wheel;

pub use animation::*;
pub use config::*;
pub use easing::*;
pub use error::*;
pub use layout::*;
pub use model::*;
pub use prize::*;
pub use render::*;
pub use spin::*;
pub use style::*;
pub use wheel::*;
