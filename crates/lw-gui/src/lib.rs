//! lw-gui: iced-based widgets for LuckWheel
//!
//! Paints the toolkit-agnostic wheel from `lw-core` onto an iced canvas.

pub mod theme;
pub mod widgets;

pub use theme::*;
pub use widgets::*;
