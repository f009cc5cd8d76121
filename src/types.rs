// Strong typing over strings. Direction, configuration, and measured track geometry.
// All sizes are integer pixels, matching DOM offsetWidth/offsetHeight.

use serde::{Deserialize, Serialize};

/// Scroll axis of the slider. Fixed for the instance's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

/// Min/max bound of the legal offset range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

/// Which control was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Next,
    Prev,
}

/// Slider configuration. Immutable after construction.
///
/// Unknown fields in the input are ignored, so callers can pass a superset
/// object; recognized fields override the documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Number of items intended to be simultaneously visible.
    #[serde(default = "default_visibles")]
    pub visibles: u32,
    /// Scroll axis: "horizontal" or "vertical".
    #[serde(default)]
    pub direction: Direction,
    /// Distribute leftover viewport space as even inter-item gaps.
    #[serde(default = "default_true")]
    pub justify: bool,
    /// Items moved per control trigger.
    #[serde(default = "default_steps")]
    pub steps: i32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        SliderConfig {
            visibles: default_visibles(),
            direction: Direction::default(),
            justify: true,
            steps: default_steps(),
        }
    }
}

fn default_visibles() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_steps() -> i32 {
    1
}

/// Track geometry measured once at construction. Never re-measured; the
/// slider assumes a static, non-resizing viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMetrics {
    /// Extent of the outer container along the scroll axis.
    pub viewport_size: i32,
    /// Extent of the first item, assumed representative of all items.
    pub item_size: i32,
    /// Computed inter-item spacing. Zero until justification runs.
    pub item_gap: i32,
    /// Number of slidable items.
    pub item_count: usize,
}

impl TrackMetrics {
    pub fn new(viewport_size: i32, item_size: i32, item_count: usize) -> Self {
        TrackMetrics {
            viewport_size,
            item_size,
            item_gap: 0,
            item_count,
        }
    }
}
