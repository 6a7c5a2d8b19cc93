// File: crates/chart-core/src/scale.rs
// Summary: Index (X) and value (Y) scale transforms between data and pixels.

/// Horizontal slot scale: slot `i` sits at `leading + i * gap` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexScale {
    pub leading: f64,
    pub gap: f64,
}

impl IndexScale {
    pub fn new(leading: f64, gap: f64) -> Self {
        Self { leading, gap }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f64 {
        self.leading + index as f64 * self.gap
    }

    /// Nearest slot to a press position, or `None` outside `[0, len)`.
    pub fn index_at(&self, px: f64, len: usize) -> Option<usize> {
        if len == 0 || self.gap <= 0.0 || !px.is_finite() {
            return None;
        }
        let slot = ((px - self.leading) / self.gap).round();
        if slot < 0.0 || slot >= len as f64 {
            return None;
        }
        Some(slot as usize)
    }
}

/// Vertical value scale mapping `[0, maximum]` onto `[0, height]` pixels (bottom-up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub maximum: f64,
    pub height: f64,
}

impl ValueScale {
    pub fn new(maximum: f64, height: f64) -> Self {
        Self { maximum, height }
    }

    /// No positive maximum: every value maps to 0.
    pub fn is_degenerate(&self) -> bool {
        !(self.maximum > 0.0)
    }

    #[inline]
    pub fn to_px(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        crate::geometry::clamp(value / self.maximum * self.height, 0.0, self.height)
    }
}
