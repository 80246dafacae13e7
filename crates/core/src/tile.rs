//! Tile module - a single numbered tile and its animation timeline

use crate::anim::{Pop, Pose, Segment, Slide, Timeline};
use crate::types::{magnitude, Vec2};

/// A numbered tile
///
/// `value` is an exponent: the tile shows `2^value`. Two tiles compare equal
/// when their values match; position and animation state are ignored, which
/// is exactly the equality the merge and "did the board change" checks need.
#[derive(Debug, Clone)]
pub struct Tile {
    value: u8,
    pose: Pose,
    timeline: Timeline,
}

impl Tile {
    /// Create a tile at the render origin with no pending animation
    pub fn new(value: u8) -> Self {
        assert!(value >= 1, "tile value must be at least 1");
        Self {
            value,
            pose: Pose::default(),
            timeline: Timeline::new(),
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// Displayed number (2^value)
    pub fn magnitude(&self) -> u32 {
        magnitude(self.value)
    }

    pub fn set_value(&mut self, value: u8) {
        assert!(value >= 1, "tile value must be at least 1");
        self.value = value;
    }

    /// Bump the value by one (doubling the displayed number)
    pub fn increase_value(&mut self) {
        self.value += 1;
    }

    pub fn position(&self) -> Vec2 {
        self.pose.position
    }

    pub fn scale(&self) -> f32 {
        self.pose.scale
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// True while any animation segment is pending
    pub fn is_animating(&self) -> bool {
        !self.timeline.is_idle()
    }

    pub fn pending_segments(&self) -> usize {
        self.timeline.len()
    }

    /// Queue a slide to `target` taking `duration` seconds
    pub fn slide(&mut self, target: Vec2, duration: f32) {
        self.timeline.push(Segment::Slide(Slide::new(target, duration)));
    }

    /// Queue an instant move to `target`
    pub fn place(&mut self, target: Vec2) {
        self.timeline.push(Segment::Slide(Slide::instant(target)));
    }

    /// Queue the spawn emphasis animation
    pub fn pop(&mut self, duration: f32) {
        self.timeline.push(Segment::Pop(Pop::new(duration)));
    }

    /// Advance the active animation by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.timeline.update(dt, &mut self.pose);
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tile {}
