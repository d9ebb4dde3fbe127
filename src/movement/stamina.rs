//! Movement domain: bounded jetpack fuel.

/// Fuel gauge kept within `0..=max` after every mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stamina {
    current: f32,
    max: f32,
}

impl Stamina {
    pub fn full(max: f32) -> Self {
        Self::with_current(max, max)
    }

    pub fn with_current(current: f32, max: f32) -> Self {
        let mut stamina = Self {
            current,
            max: max.max(0.0),
        };
        stamina.clamp();
        stamina
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn fraction(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }

    /// Continuous drain.
    pub fn consume(&mut self, rate: f32, dt: f32) {
        self.current -= rate * dt;
        self.clamp();
    }

    /// Flat drain that may bottom out at zero.
    pub fn consume_fixed(&mut self, amount: f32) {
        self.current -= amount;
        self.clamp();
    }

    /// Flat drain that only happens when the full amount is available.
    pub fn try_spend(&mut self, amount: f32) -> bool {
        if self.current < amount {
            return false;
        }
        self.consume_fixed(amount);
        true
    }

    pub fn regen(&mut self, rate: f32, dt: f32) {
        self.current += rate * dt;
        self.clamp();
    }

    pub fn refill(&mut self) {
        self.current = self.max;
    }

    fn clamp(&mut self) {
        // NaN collapses to empty rather than poisoning later comparisons.
        self.current = if self.current.is_nan() {
            0.0
        } else {
            self.current.max(0.0).min(self.max)
        };
    }
}
