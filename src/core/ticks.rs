use smallvec::SmallVec;

pub(crate) const AXIS_X_TARGET_SPACING_PX: f64 = 80.0;
pub(crate) const AXIS_Y_TARGET_SPACING_PX: f64 = 40.0;

pub(crate) const AXIS_MIN_TICKS: usize = 2;
pub(crate) const AXIS_MAX_TICKS: usize = 12;

/// Buffer sized for the tick counts a 960x500 canvas produces.
pub type TickBuffer = SmallVec<[f64; 16]>;

pub fn tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Tick values on a 1/2/5 decade grid covering the domain.
///
/// Ticks land on multiples of the chosen step and stay inside the domain, so
/// rendered axis labels read as round numbers regardless of padding ratios.
pub fn nice_ticks(domain: (f64, f64), target_count: usize) -> TickBuffer {
    let mut ticks = TickBuffer::new();
    let (start, end) = if domain.0 <= domain.1 {
        (domain.0, domain.1)
    } else {
        (domain.1, domain.0)
    };

    if !start.is_finite() || !end.is_finite() || start == end || target_count == 0 {
        return ticks;
    }

    let step = nice_step((end - start) / target_count.max(1) as f64);
    if step <= 0.0 || !step.is_finite() {
        return ticks;
    }

    let mut value = (start / step).ceil() * step;
    while value <= end + step * 1e-9 {
        // Snap tiny float residue so labels format cleanly.
        let snapped = (value / step).round() * step;
        ticks.push(snapped);
        value += step;
        if ticks.len() > AXIS_MAX_TICKS * 4 {
            break;
        }
    }

    ticks
}

/// Rounds a raw step up to the nearest 1/2/5 multiple of a power of ten.
#[must_use]
pub fn nice_step(raw_step: f64) -> f64 {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 0.0;
    }

    let magnitude = 10.0_f64.powf(raw_step.log10().floor());
    let residual = raw_step / magnitude;
    let factor = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };

    factor * magnitude
}

/// Formats a tick value with just enough decimals for its step.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 || step <= 0.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    format!("{value:.decimals$}")
}
