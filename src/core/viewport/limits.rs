use crate::core::data::{complex::Complex, complex_rect::ComplexRect};
use std::{error::Error, fmt};

pub const DEFAULT_BOUNDS_TOP_LEFT: Complex = Complex {
    real: -2.5,
    imag: -1.5,
};
pub const DEFAULT_BOUNDS_BOTTOM_RIGHT: Complex = Complex {
    real: 1.0,
    imag: 1.5,
};
pub const DEFAULT_RADIUS_MIN: f64 = 0.005;
pub const DEFAULT_RADIUS_MAX: f64 = 1.25;
pub const DEFAULT_RATE_FACTOR: f64 = 1.02;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportLimitsError {
    InvalidRadiusRange { min: f64, max: f64 },
    InvalidRateFactor { rate_factor: f64 },
}

impl fmt::Display for ViewportLimitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadiusRange { min, max } => write!(
                f,
                "viewport radius range must satisfy 0 < min < max: min={} max={}",
                min, max
            ),
            Self::InvalidRateFactor { rate_factor } => write!(
                f,
                "viewport rate factor must be finite and greater than 1: {}",
                rate_factor
            ),
        }
    }
}

impl Error for ViewportLimitsError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportLimits {
    pub bounds: ComplexRect,
    pub radius_min: f64,
    pub radius_max: f64,
    pub rate_factor: f64,
}

impl ViewportLimits {
    pub fn new(
        bounds: ComplexRect,
        radius_min: f64,
        radius_max: f64,
        rate_factor: f64,
    ) -> Result<Self, ViewportLimitsError> {
        let limits = Self {
            bounds,
            radius_min,
            radius_max,
            rate_factor,
        };
        limits.validate()?;

        Ok(limits)
    }

    pub fn validate(&self) -> Result<(), ViewportLimitsError> {
        if !(self.radius_min.is_finite()
            && self.radius_max.is_finite()
            && self.radius_min > 0.0
            && self.radius_min < self.radius_max)
        {
            return Err(ViewportLimitsError::InvalidRadiusRange {
                min: self.radius_min,
                max: self.radius_max,
            });
        }

        if !(self.rate_factor.is_finite() && self.rate_factor > 1.0) {
            return Err(ViewportLimitsError::InvalidRateFactor {
                rate_factor: self.rate_factor,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn shrink_rate(&self) -> f64 {
        self.rate_factor.recip()
    }

    #[must_use]
    pub fn grow_rate(&self) -> f64 {
        self.rate_factor
    }
}

pub(crate) fn default_bounds() -> ComplexRect {
    ComplexRect::new(DEFAULT_BOUNDS_TOP_LEFT, DEFAULT_BOUNDS_BOTTOM_RIGHT)
        .expect("default viewport bounds are valid")
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self {
            bounds: default_bounds(),
            radius_min: DEFAULT_RADIUS_MIN,
            radius_max: DEFAULT_RADIUS_MAX,
            rate_factor: DEFAULT_RATE_FACTOR,
        }
    }
}
