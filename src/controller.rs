// Slider controller: owns the measured geometry, the configuration, and the
// current offset; orchestrates justification and stepwise movement. Style
// application goes through the TrackSurface seam so the core stays DOM-free.

use crate::error::SliderError;
use crate::geometry;
use crate::types::{Bound, Control, Direction, SliderConfig, TrackMetrics};

/// Style-effect sink for a slider instance. The DOM layer implements this
/// over inline styles; tests implement it with a recording fake.
pub trait TrackSurface {
    /// Set the trailing-edge spacing of every item (the edge matching the
    /// scroll direction: right margin for horizontal, bottom for vertical).
    fn apply_item_gap(&mut self, direction: Direction, gap: i32);

    /// Position the track along the scroll axis (`right` for horizontal,
    /// `top` for vertical).
    fn apply_offset(&mut self, direction: Direction, offset: i32);
}

/// One mounted slider. Measured once at construction; geometry is never
/// recomputed on resize.
#[derive(Debug)]
pub struct Slider<S: TrackSurface> {
    config: SliderConfig,
    metrics: TrackMetrics,
    current_offset: i32,
    surface: S,
}

impl<S: TrackSurface> Slider<S> {
    /// Build a slider from already-measured geometry. Runs justification when
    /// enabled and more than one item is visible, emitting one spacing
    /// instruction through the surface.
    ///
    /// The measurement must come from a rendered, visible layout; a track
    /// with no items is a construction-time error.
    pub fn new(
        metrics: TrackMetrics,
        config: SliderConfig,
        mut surface: S,
    ) -> Result<Self, SliderError> {
        if metrics.item_count == 0 {
            return Err(SliderError::EmptyTrack);
        }

        let mut metrics = metrics;
        if config.visibles > 1 && config.justify {
            let gap = geometry::justification_gap(
                metrics.viewport_size,
                metrics.item_size,
                config.visibles,
            );
            metrics.item_gap = gap;
            surface.apply_item_gap(config.direction, gap);
        }

        Ok(Slider {
            config,
            metrics,
            current_offset: 0,
            surface,
        })
    }

    /// Move the track by `steps` items. Zero is treated as one, matching the
    /// falsy default of the classic slider API; negative steps reverse.
    ///
    /// A move that would leave the legal offset range is rejected in full:
    /// no partial move, no clamping, no error. Returns whether the move was
    /// applied.
    pub fn move_by(&mut self, steps: i32) -> bool {
        let steps = if steps == 0 { 1 } else { steps };

        let next = geometry::next_offset(
            self.current_offset,
            self.metrics.item_size,
            self.metrics.item_gap,
            steps,
            self.config.direction,
        );

        let (min, max) = self.limits();
        if !geometry::within_limits(next, min, max) {
            return false;
        }

        self.current_offset = next;
        self.surface.apply_offset(self.config.direction, next);
        true
    }

    /// Handle a control trigger: next advances by the configured step size,
    /// prev retreats by it.
    pub fn trigger(&mut self, control: Control) -> bool {
        match control {
            Control::Next => self.move_by(self.config.steps),
            Control::Prev => self.move_by(-self.config.steps),
        }
    }

    /// Legal offset range as `(min, max)`, inclusive.
    pub fn limits(&self) -> (i32, i32) {
        let limit = |bound| {
            geometry::travel_limit(
                self.config.direction,
                bound,
                self.metrics.item_size,
                self.metrics.item_gap,
                self.metrics.item_count,
                self.config.visibles,
            )
        };
        (limit(Bound::Min), limit(Bound::Max))
    }

    pub fn current_offset(&self) -> i32 {
        self.current_offset
    }

    pub fn metrics(&self) -> &TrackMetrics {
        &self.metrics
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }
}
