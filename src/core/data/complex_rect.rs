use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Axis-aligned region of the complex plane.
///
/// `top_left` holds the minimum real/imag pair and `bottom_right` the maximum,
/// so "top" is the smaller imaginary edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        // written negated so NaN extents are rejected too
        if !(width > 0.0 && height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Square region `center +/- radius` on both axes.
    pub fn around(center: Complex, radius: f64) -> Result<Self, ComplexRectError> {
        Self::new(
            Complex::new(center.real - radius, center.imag - radius),
            Complex::new(center.real + radius, center.imag + radius),
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.top_left.real
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.bottom_right.real
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.top_left.imag
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom_right.imag
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex::new(
            (self.top_left.real + self.bottom_right.real) * 0.5,
            (self.top_left.imag + self.bottom_right.imag) * 0.5,
        )
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.top_left.real <= point.real
            && self.top_left.imag <= point.imag
            && self.bottom_right.real >= point.real
            && self.bottom_right.imag >= point.imag
    }

    /// Clamps every edge into `bounds`. Returns `None` when the result
    /// collapses to zero width or height (self lies entirely outside).
    #[must_use]
    pub fn clamped_to(&self, bounds: &ComplexRect) -> Option<ComplexRect> {
        let clamp_real = |v: f64| v.clamp(bounds.left(), bounds.right());
        let clamp_imag = |v: f64| v.clamp(bounds.top(), bounds.bottom());

        ComplexRect::new(
            Complex::new(clamp_real(self.left()), clamp_imag(self.top())),
            Complex::new(clamp_real(self.right()), clamp_imag(self.bottom())),
        )
        .ok()
    }
}
