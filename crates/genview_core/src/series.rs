//! Synthetic per-year generation series
//!
//! One generator serves every energy type; the profile carries the per-type
//! constants and formula variants. For the `i`-th year of a span:
//!
//! ```text
//! progress   = i / max(end - start, 1)
//! seasonal   = wave(i * period) * amplitude
//! factor     = low + u * (high - low)          (one draw per year)
//! generation = max(round(base * (1 + progress * growth) * (1 + seasonal) * factor), 0)
//! secondary  = round(base2 * trend(progress) * (1 + seasonal) * factor)
//! efficiency = clamp(round((eff_base + progress * eff_growth) * factor), band)
//! ```

use crate::error::SeriesError;
use crate::model::{EnergyProfile, MAX_YEAR, MIN_YEAR, YearDatum, YearRange};
use crate::rng::RandomSource;

/// Round to `decimals` places, half away from zero
#[must_use]
#[inline]
pub fn round_to(value: f64, decimals: u8) -> f64 {
    if decimals == 0 {
        return value.round();
    }
    let scale = 10f64.powi(i32::from(decimals));
    (value * scale).round() / scale
}

/// Generate the full series for `range` under `profile`.
///
/// Produces exactly `range.len()` rows in ascending year order. Draws one
/// value from `rng` per year, so a fixed source yields identical output on
/// every call.
pub fn generate<R: RandomSource + ?Sized>(
    range: YearRange,
    profile: &EnergyProfile,
    rng: &mut R,
) -> Result<Vec<YearDatum>, SeriesError> {
    if range.is_empty() {
        return Err(SeriesError::EmptyRange {
            start: range.start,
            end: range.end,
        });
    }
    if range.start < MIN_YEAR || range.end > MAX_YEAR {
        return Err(SeriesError::OutsideCalendar {
            start: range.start,
            end: range.end,
        });
    }
    profile.validate()?;

    let span = range.span().max(1) as f64;
    let series: Vec<YearDatum> = range
        .years()
        .enumerate()
        .map(|(i, year)| {
            let index = i as f64;
            let progress = index / span;
            let seasonal = profile.seasonal.offset(index);
            let factor = profile.jitter.factor(rng.next_unit());

            let generation = (profile.base_generation
                * (1.0 + progress * profile.growth_factor_max)
                * (1.0 + seasonal)
                * factor)
                .round();
            // Negative products round to -0.0; report a plain zero
            let generation = if generation > 0.0 { generation } else { 0.0 };

            let secondary = &profile.secondary;
            let secondary_metric = round_to(
                secondary.base * secondary.trend.multiplier(progress) * (1.0 + seasonal) * factor,
                secondary.decimals,
            );

            let efficiency_model = &profile.efficiency;
            let efficiency = efficiency_model.band.clamp(
                ((efficiency_model.base + progress * efficiency_model.growth) * factor).round(),
            );

            YearDatum {
                year,
                generation,
                secondary_metric,
                efficiency,
            }
        })
        .collect();

    tracing::trace!(
        energy = %profile.energy_type,
        start = range.start,
        end = range.end,
        rows = series.len(),
        "generated series"
    );

    Ok(series)
}
