use crate::core::data::complex_rect::ComplexRect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportWarning {
    ExtentClamped,
    NonFiniteReset,
}

/// What one animation tick did, plus the region the renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportStepReport {
    pub extent: ComplexRect,
    pub flipped_real: bool,
    pub flipped_imag: bool,
    pub growth_reversed: bool,
    pub warning: Option<ViewportWarning>,
}

impl ViewportStepReport {
    #[must_use]
    pub fn bounced(&self) -> bool {
        self.flipped_real || self.flipped_imag
    }
}
