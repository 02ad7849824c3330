use crate::core::data::complex::Complex;
use crate::core::viewport::limits::ViewportLimits;

pub const DEFAULT_CENTER: Complex = Complex {
    real: -0.75,
    imag: 0.1,
};
pub const DEFAULT_RADIUS: f64 = 1.0;
pub const DEFAULT_PAN_VELOCITY_RATIO: Complex = Complex {
    real: 0.02,
    imag: 0.015,
};

/// Animated zoom/pan parameters for the fractal screen.
///
/// Pan velocity is a ratio of the current radius, so visual pan speed stays
/// constant while zooming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub center: Complex,
    pub radius: f64,
    pub radius_growth_rate: f64,
    pub pan_velocity_ratio: Complex,
}

impl ViewportState {
    /// Starts centred in the bounds at the widest radius, heading inward.
    #[must_use]
    pub fn centered_in(limits: &ViewportLimits) -> Self {
        Self {
            center: limits.bounds.center(),
            radius: limits.radius_max,
            radius_growth_rate: limits.shrink_rate(),
            pan_velocity_ratio: DEFAULT_PAN_VELOCITY_RATIO,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.pan_velocity_ratio.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
            && self.radius_growth_rate.is_finite()
            && self.radius_growth_rate > 0.0
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            radius: DEFAULT_RADIUS,
            radius_growth_rate: ViewportLimits::default().shrink_rate(),
            pan_velocity_ratio: DEFAULT_PAN_VELOCITY_RATIO,
        }
    }
}
