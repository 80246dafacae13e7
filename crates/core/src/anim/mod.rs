//! Animation module for tile slides and spawn pops
//!
//! Every tile owns a [`Timeline`]: a strict FIFO of [`Segment`]s of which only
//! the front one runs. Segments write into a [`Pose`] (position + scale) that
//! renderers read back.

mod easing;
mod segment;

pub use easing::{ease, Easing, POP_PEAK, POP_RAMP_END};
pub use segment::{Pop, Pose, Progress, Segment, Slide, Timeline};
