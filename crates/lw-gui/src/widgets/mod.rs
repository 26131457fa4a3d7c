//! Custom widgets for LuckWheel

mod wheel;

pub use wheel::*;
