use crate::core::data::complex_rect::ComplexRect;
use crate::core::viewport::limits::ViewportLimits;
use crate::core::viewport::state::ViewportState;
use crate::core::viewport::status::{ViewportStepReport, ViewportWarning};

/// Advances the viewport by one animation tick.
///
/// The returned extent is the region for this frame, computed from the state
/// as it was on entry; the state is then advanced for the next frame. Pan
/// bounces off `limits.bounds` and the radius breathes between
/// `radius_min` and `radius_max`.
pub fn step_viewport(state: &mut ViewportState, limits: &ViewportLimits) -> ViewportStepReport {
    let mut warning = None;

    let raw_extent = match valid_extent(state) {
        Some(extent) => extent,
        None => {
            *state = ViewportState::centered_in(limits);
            warning = Some(ViewportWarning::NonFiniteReset);
            valid_extent(state).unwrap_or(limits.bounds)
        }
    };

    let bounds = &limits.bounds;
    let flipped_real = reflect(
        &mut state.pan_velocity_ratio.real,
        raw_extent.left() < bounds.left(),
        raw_extent.right() > bounds.right(),
    );
    let flipped_imag = reflect(
        &mut state.pan_velocity_ratio.imag,
        raw_extent.top() < bounds.top(),
        raw_extent.bottom() > bounds.bottom(),
    );

    let extent = raw_extent.clamped_to(bounds).unwrap_or(*bounds);
    if extent != raw_extent && warning.is_none() {
        warning = Some(ViewportWarning::ExtentClamped);
    }

    let previous_growth = state.radius_growth_rate;
    if state.radius >= limits.radius_max {
        state.radius_growth_rate = limits.shrink_rate();
    } else if state.radius <= limits.radius_min {
        state.radius_growth_rate = limits.grow_rate();
    }
    let growth_reversed = previous_growth != state.radius_growth_rate;

    state.radius *= state.radius_growth_rate;
    state.center = state.center + state.pan_velocity_ratio * state.radius;

    if !state.is_valid() {
        *state = ViewportState::centered_in(limits);
        warning = Some(ViewportWarning::NonFiniteReset);
    }

    ViewportStepReport {
        extent,
        flipped_real,
        flipped_imag,
        growth_reversed,
        warning,
    }
}

fn valid_extent(state: &ViewportState) -> Option<ComplexRect> {
    if !state.is_valid() {
        return None;
    }

    ComplexRect::around(state.center, state.radius).ok()
}

/// Turns the velocity back inward if it is heading past a crossed edge.
fn reflect(velocity: &mut f64, below_min: bool, above_max: bool) -> bool {
    if (below_min && *velocity < 0.0) || (above_max && *velocity > 0.0) {
        *velocity = -*velocity;
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::step_viewport;
    use crate::core::data::{complex::Complex, complex_rect::ComplexRect};
    use crate::core::viewport::{ViewportLimits, ViewportState, ViewportWarning};

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn rect(left: f64, top: f64, right: f64, bottom: f64) -> ComplexRect {
        ComplexRect::new(Complex::new(left, top), Complex::new(right, bottom))
            .expect("test rect should be valid")
    }

    fn limits(bounds: ComplexRect, radius_min: f64, radius_max: f64, rate: f64) -> ViewportLimits {
        ViewportLimits::new(bounds, radius_min, radius_max, rate).expect("test limits are valid")
    }

    fn state(center: Complex, radius: f64, growth: f64, pan: Complex) -> ViewportState {
        ViewportState {
            center,
            radius,
            radius_growth_rate: growth,
            pan_velocity_ratio: pan,
        }
    }

    #[test]
    fn radius_at_max_starts_shrinking() {
        let limits = limits(rect(-100.0, -100.0, 100.0, 100.0), 0.5, 2.0, 2.0);
        let mut viewport = state(Complex::default(), 2.0, 2.0, Complex::default());

        let report = step_viewport(&mut viewport, &limits);

        assert!(report.growth_reversed);
        assert_approx_eq(viewport.radius_growth_rate, 0.5);
        assert!(viewport.radius < 2.0);
        assert_approx_eq(viewport.radius, 1.0);
    }

    #[test]
    fn radius_at_min_starts_growing() {
        let limits = limits(rect(-100.0, -100.0, 100.0, 100.0), 0.5, 2.0, 2.0);
        let mut viewport = state(Complex::default(), 0.5, 0.5, Complex::default());

        let report = step_viewport(&mut viewport, &limits);

        assert!(report.growth_reversed);
        assert_approx_eq(viewport.radius_growth_rate, 2.0);
        assert!(viewport.radius > 0.5);
    }

    #[test]
    fn radius_between_limits_keeps_its_rate() {
        let limits = limits(rect(-100.0, -100.0, 100.0, 100.0), 0.5, 2.0, 1.25);
        let mut viewport = state(Complex::default(), 1.0, 0.8, Complex::default());

        let report = step_viewport(&mut viewport, &limits);

        assert!(!report.growth_reversed);
        assert_approx_eq(viewport.radius, 0.8);
    }

    #[test]
    fn radius_oscillates_between_limits_over_many_ticks() {
        let limits = limits(rect(-100.0, -100.0, 100.0, 100.0), 0.1, 1.0, 1.1);
        let mut viewport = state(Complex::default(), 1.0, 1.1, Complex::default());
        let mut reversals = 0;

        for _ in 0..200 {
            let report = step_viewport(&mut viewport, &limits);
            if report.growth_reversed {
                reversals += 1;
            }
            assert!(viewport.radius > 0.1 / 1.1 - EPSILON);
            assert!(viewport.radius < 1.0 * 1.1 + EPSILON);
        }

        assert!(reversals >= 4, "reversals={}", reversals);
    }

    #[test]
    fn pan_scales_with_new_radius() {
        let limits = limits(rect(-100.0, -100.0, 100.0, 100.0), 0.5, 4.0, 2.0);
        let mut viewport = state(Complex::new(1.0, -1.0), 1.0, 2.0, Complex::new(0.1, 0.2));

        step_viewport(&mut viewport, &limits);

        assert_approx_eq(viewport.radius, 2.0);
        assert_approx_eq(viewport.center.real, 1.2);
        assert_approx_eq(viewport.center.imag, -0.6);
    }

    #[test]
    fn report_extent_describes_the_state_before_the_step() {
        let limits = limits(rect(-100.0, -100.0, 100.0, 100.0), 0.5, 4.0, 2.0);
        let mut viewport = state(Complex::new(1.0, 2.0), 1.0, 2.0, Complex::new(0.5, 0.0));

        let report = step_viewport(&mut viewport, &limits);

        assert_eq!(report.extent, rect(0.0, 1.0, 2.0, 3.0));
        assert_eq!(report.warning, None);
    }

    #[test]
    fn pan_flips_on_the_first_tick_past_the_edge_and_not_before() {
        let limits = limits(rect(-2.0, -2.0, 2.0, 2.0), 0.5, 4.0, 2.0);
        let mut viewport = state(Complex::default(), 1.0, 1.0, Complex::new(0.25, 0.0));

        for tick in 1..=5 {
            let report = step_viewport(&mut viewport, &limits);
            assert!(!report.flipped_real, "flipped early on tick {}", tick);
            assert_eq!(viewport.pan_velocity_ratio.real, 0.25);
        }

        let report = step_viewport(&mut viewport, &limits);

        assert!(report.flipped_real);
        assert!(!report.flipped_imag);
        assert_eq!(viewport.pan_velocity_ratio.real, -0.25);
        assert_approx_eq(viewport.center.real, 1.0);
    }

    #[test]
    fn pan_does_not_flip_back_while_still_outside_and_heading_inward() {
        let limits = limits(rect(-2.0, -2.0, 2.0, 2.0), 0.5, 4.0, 2.0);
        let mut viewport = state(Complex::new(1.75, 0.0), 1.0, 1.0, Complex::new(-0.1, 0.0));

        let report = step_viewport(&mut viewport, &limits);

        assert!(!report.flipped_real);
        assert_eq!(viewport.pan_velocity_ratio.real, -0.1);
    }

    #[test]
    fn top_and_bottom_edges_flip_the_imaginary_component() {
        let limits = limits(rect(-2.0, -2.0, 2.0, 2.0), 0.5, 4.0, 2.0);
        let mut near_top = state(Complex::new(0.0, -1.5), 1.0, 1.0, Complex::new(0.1, -0.1));
        let mut near_bottom = state(Complex::new(0.0, 1.5), 1.0, 1.0, Complex::new(0.1, 0.1));

        let top_report = step_viewport(&mut near_top, &limits);
        let bottom_report = step_viewport(&mut near_bottom, &limits);

        assert!(top_report.flipped_imag && !top_report.flipped_real);
        assert!(bottom_report.flipped_imag && !bottom_report.flipped_real);
        assert_eq!(near_top.pan_velocity_ratio.imag, 0.1);
        assert_eq!(near_bottom.pan_velocity_ratio.imag, -0.1);
    }

    #[test]
    fn extent_is_clamped_into_bounds() {
        let limits = limits(rect(-2.0, -2.0, 2.0, 2.0), 0.5, 4.0, 2.0);
        let mut viewport = state(Complex::new(-1.5, 0.0), 1.0, 1.0, Complex::new(0.1, 0.0));

        let report = step_viewport(&mut viewport, &limits);

        assert_eq!(report.extent, rect(-2.0, -1.0, -0.5, 1.0));
        assert_eq!(report.warning, Some(ViewportWarning::ExtentClamped));
    }

    #[test]
    fn extent_falls_back_to_bounds_when_fully_outside() {
        let limits = limits(rect(-2.0, -2.0, 2.0, 2.0), 0.5, 4.0, 2.0);
        let mut viewport = state(Complex::new(10.0, 0.0), 1.0, 1.0, Complex::new(0.1, 0.0));

        let report = step_viewport(&mut viewport, &limits);

        assert_eq!(report.extent, limits.bounds);
        assert!(report.flipped_real);
    }

    #[test]
    fn bouncing_pan_returns_inside_bounds() {
        let limits = limits(rect(-2.0, -2.0, 2.0, 2.0), 0.5, 1.0, 1.01);
        let mut viewport = state(Complex::default(), 0.75, 1.0, Complex::new(0.2, 0.13));

        for _ in 0..2000 {
            step_viewport(&mut viewport, &limits);
            assert!(viewport.center.real.abs() < 3.5);
            assert!(viewport.center.imag.abs() < 3.5);
        }
    }

    #[test]
    fn non_finite_state_is_reset() {
        let limits = ViewportLimits::default();
        let mut viewport = state(Complex::new(f64::NAN, 0.0), 1.0, 1.0, Complex::default());

        let report = step_viewport(&mut viewport, &limits);

        assert_eq!(report.warning, Some(ViewportWarning::NonFiniteReset));
        assert!(viewport.is_valid());
        assert!(limits.bounds.contains_point(viewport.center));
    }

    #[test]
    fn overflowing_radius_is_reset_after_the_step() {
        let limits = limits(rect(-2.0, -2.0, 2.0, 2.0), 0.5, 4.0, 2.0);
        let mut viewport = state(Complex::default(), 2.0, f64::MAX, Complex::default());

        let report = step_viewport(&mut viewport, &limits);

        assert_eq!(report.warning, Some(ViewportWarning::NonFiniteReset));
        assert!(viewport.is_valid());
    }
}
