//! One-shot enter animations for the portfolio page, kept free of browser
//! types. A tween maps elapsed time to opacity and offset; a mount sequence
//! schedules the page's animated groups, including per-child stagger. The
//! frontend only drives these samples into styles.

pub mod easing;
pub mod sequence;
pub mod tween;

pub use easing::*;
pub use sequence::*;
pub use tween::*;
