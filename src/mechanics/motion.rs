//! Motion mechanics: screen-space interpolation for animated legs.

/// Point on the board canvas, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPos {
    pub x: f64,
    pub y: f64,
}

impl ScreenPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Linear interpolation a → b at t.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolate between two screen points.
#[inline]
pub fn lerp_pos(a: ScreenPos, b: ScreenPos, t: f64) -> ScreenPos {
    ScreenPos { x: lerp(a.x, b.x, t), y: lerp(a.y, b.y, t) }
}

/// One animated move: start/end points plus progress in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Leg {
    pub start: ScreenPos,
    pub end: ScreenPos,
    pub progress: f64,
}

impl Leg {
    pub fn new(start: ScreenPos, end: ScreenPos) -> Self {
        Self { start, end, progress: 0.0 }
    }

    pub fn position(&self) -> ScreenPos {
        lerp_pos(self.start, self.end, self.progress)
    }

    /// Spend up to `budget` progress on this leg. Returns `Some(unspent)`
    /// once the leg is finished, `None` while it is still under way.
    pub fn advance(&mut self, budget: f64) -> Option<f64> {
        let needed = 1.0 - self.progress;
        if budget >= needed {
            self.progress = 1.0;
            Some(budget - needed)
        } else {
            self.progress += budget;
            None
        }
    }
}
