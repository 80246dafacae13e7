//! Animation segments and the per-tile timeline that plays them in order.

use std::collections::VecDeque;

use super::easing::{ease, Easing};
use crate::types::Vec2;

/// Render-facing state an animation writes into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec2,
    pub scale: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

/// Result of advancing a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    InProgress,
    Done,
}

/// Move the pose linearly toward `target`
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    target: Vec2,
    duration: f32,
    instant: bool,
    elapsed: f32,
    /// Captured when the segment becomes active, not when it is queued.
    start: Option<Vec2>,
}

impl Slide {
    /// A timed slide; a non-positive duration yields an instant slide
    pub fn new(target: Vec2, duration: f32) -> Self {
        if duration > 0.0 {
            Self {
                target,
                duration,
                instant: false,
                elapsed: 0.0,
                start: None,
            }
        } else {
            Self::instant(target)
        }
    }

    /// Jump straight to `target` without a visible frame in between
    pub fn instant(target: Vec2) -> Self {
        Self {
            target,
            duration: 0.0,
            instant: true,
            elapsed: 0.0,
            start: None,
        }
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn is_instant(&self) -> bool {
        self.instant
    }

    pub fn advance(&mut self, dt: f32, pose: &mut Pose) -> Progress {
        if self.instant {
            pose.position = self.target;
            return Progress::Done;
        }

        let start = *self.start.get_or_insert(pose.position);
        self.elapsed += dt;
        let progress = (self.elapsed / self.duration).clamp(0.0, 1.0);
        pose.position = start.lerp(self.target, ease(progress, Easing::Linear));

        if progress >= 1.0 {
            pose.position = self.target;
            Progress::Done
        } else {
            Progress::InProgress
        }
    }
}

/// Scale the pose in from zero with a small overshoot
#[derive(Debug, Clone, PartialEq)]
pub struct Pop {
    duration: f32,
    elapsed: f32,
}

impl Pop {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32, pose: &mut Pose) -> Progress {
        self.elapsed += dt;
        let progress = if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };

        if progress >= 1.0 {
            pose.scale = 1.0;
            Progress::Done
        } else {
            pose.scale = ease(progress, Easing::PopOvershoot);
            Progress::InProgress
        }
    }
}

/// One queued animation step
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Slide(Slide),
    Pop(Pop),
}

impl Segment {
    pub fn advance(&mut self, dt: f32, pose: &mut Pose) -> Progress {
        match self {
            Segment::Slide(slide) => slide.advance(dt, pose),
            Segment::Pop(pop) => pop.advance(dt, pose),
        }
    }

    /// Instant segments finish without consuming time
    fn is_instant(&self) -> bool {
        matches!(self, Segment::Slide(slide) if slide.is_instant())
    }
}

/// FIFO of segments; only the front one is active
///
/// Segments are never replaced or cancelled: pushing appends, and [`Timeline::update`]
/// is the only consumer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    queue: VecDeque<Segment>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.queue.push_back(segment);
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Advance the active segment by `dt` seconds.
    ///
    /// When an instant segment completes, the next one is processed within
    /// the same call so a placement and its pop start on the same frame.
    pub fn update(&mut self, dt: f32, pose: &mut Pose) {
        while let Some(front) = self.queue.front_mut() {
            let instant = front.is_instant();
            match front.advance(dt, pose) {
                Progress::Done => {
                    self.queue.pop_front();
                    if !instant {
                        break;
                    }
                }
                Progress::InProgress => break,
            }
        }
    }
}
