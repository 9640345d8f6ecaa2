//! Energy profiles
//!
//! A profile is the fixed set of numeric parameters that distinguishes one
//! energy type's synthetic yearly series from another's. The small per-type
//! formula differences (sine vs cosine seasonality, whether the secondary
//! metric grows over the span) live here as data so a single generator can
//! serve every energy type.

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;
use crate::model::EnergyType;

/// Periodic modifier applied to generation and the secondary metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type")]
pub enum SeasonalWave {
    #[default]
    None,
    Sine {
        amplitude: f64,
        period: f64,
    },
    Cosine {
        amplitude: f64,
        period: f64,
    },
}

impl SeasonalWave {
    /// Seasonal offset for the `index`-th year of a span
    #[must_use]
    pub fn offset(&self, index: f64) -> f64 {
        match *self {
            SeasonalWave::None => 0.0,
            SeasonalWave::Sine { amplitude, period } => (index * period).sin() * amplitude,
            SeasonalWave::Cosine { amplitude, period } => (index * period).cos() * amplitude,
        }
    }

    fn params(&self) -> Option<(f64, f64)> {
        match *self {
            SeasonalWave::None => None,
            SeasonalWave::Sine { amplitude, period } | SeasonalWave::Cosine { amplitude, period } => {
                Some((amplitude, period))
            }
        }
    }
}

/// Bounds of the multiplicative random factor drawn once per year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JitterBand {
    pub low: f64,
    pub high: f64,
}

impl JitterBand {
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Map a unit draw in `[0, 1)` onto the band
    #[must_use]
    #[inline]
    pub fn factor(&self, unit: f64) -> f64 {
        self.low + unit * (self.high - self.low)
    }
}

/// How the secondary metric evolves across the span
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "factor")]
pub enum SecondaryTrend {
    #[default]
    Flat,
    /// Linear growth reaching `1 + factor` at the last year
    Growing(f64),
}

impl SecondaryTrend {
    #[must_use]
    pub fn multiplier(&self, progress: f64) -> f64 {
        match *self {
            SecondaryTrend::Flat => 1.0,
            SecondaryTrend::Growing(factor) => 1.0 + progress * factor,
        }
    }
}

/// Domain-specific companion series (wind speed, water flow, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryMetric {
    pub name: String,
    pub unit: String,
    pub base: f64,
    #[serde(default)]
    pub trend: SecondaryTrend,
    /// Decimal places kept after rounding
    #[serde(default)]
    pub decimals: u8,
}

/// Inclusive percentage band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentBand {
    pub min: f64,
    pub max: f64,
}

impl PercentBand {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyModel {
    pub base: f64,
    pub growth: f64,
    pub band: PercentBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyProfile {
    pub energy_type: EnergyType,
    pub generation_unit: String,
    /// Generation magnitude at the first year of the span
    pub base_generation: f64,
    /// Fraction of linear growth reached at the last year of the span
    pub growth_factor_max: f64,
    #[serde(default)]
    pub seasonal: SeasonalWave,
    pub jitter: JitterBand,
    pub secondary: SecondaryMetric,
    pub efficiency: EfficiencyModel,
}

impl EnergyProfile {
    /// Built-in parameters for `energy_type`
    #[must_use]
    pub fn builtin(energy_type: EnergyType) -> Self {
        match energy_type {
            EnergyType::Solar => Self::solar(),
            EnergyType::Wind => Self::wind(),
            EnergyType::Hydro => Self::hydro(),
            EnergyType::Geothermal => Self::geothermal(),
            EnergyType::Biomass => Self::biomass(),
        }
    }

    #[must_use]
    pub fn solar() -> Self {
        Self {
            energy_type: EnergyType::Solar,
            generation_unit: "GWh".to_string(),
            base_generation: 5200.0,
            growth_factor_max: 0.6,
            seasonal: SeasonalWave::None,
            jitter: JitterBand::new(0.9, 1.1),
            secondary: SecondaryMetric {
                name: "Solar Irradiance".to_string(),
                unit: "kWh/m²".to_string(),
                base: 5.5,
                trend: SecondaryTrend::Flat,
                decimals: 1,
            },
            efficiency: EfficiencyModel {
                base: 75.0,
                growth: 15.0,
                band: PercentBand::new(70.0, 100.0),
            },
        }
    }

    #[must_use]
    pub fn wind() -> Self {
        Self {
            energy_type: EnergyType::Wind,
            generation_unit: "GWh".to_string(),
            base_generation: 4500.0,
            growth_factor_max: 0.5,
            seasonal: SeasonalWave::Sine {
                amplitude: 0.15,
                period: 0.8,
            },
            jitter: JitterBand::new(0.85, 1.15),
            secondary: SecondaryMetric {
                name: "Wind Speed".to_string(),
                unit: "m/s".to_string(),
                base: 12.0,
                trend: SecondaryTrend::Flat,
                decimals: 1,
            },
            efficiency: EfficiencyModel {
                base: 82.0,
                growth: 10.0,
                band: PercentBand::new(80.0, 100.0),
            },
        }
    }

    #[must_use]
    pub fn hydro() -> Self {
        Self {
            energy_type: EnergyType::Hydro,
            generation_unit: "GWh".to_string(),
            base_generation: 8500.0,
            growth_factor_max: 0.3,
            seasonal: SeasonalWave::Sine {
                amplitude: 0.1,
                period: 0.5,
            },
            jitter: JitterBand::new(0.9, 1.1),
            secondary: SecondaryMetric {
                name: "Water Flow".to_string(),
                unit: "m³/s".to_string(),
                base: 1200.0,
                trend: SecondaryTrend::Growing(0.2),
                decimals: 0,
            },
            efficiency: EfficiencyModel {
                base: 85.0,
                growth: 8.0,
                band: PercentBand::new(80.0, 100.0),
            },
        }
    }

    #[must_use]
    pub fn geothermal() -> Self {
        Self {
            energy_type: EnergyType::Geothermal,
            generation_unit: "GWh".to_string(),
            base_generation: 3200.0,
            growth_factor_max: 0.4,
            // Subsurface heat barely moves with the seasons
            seasonal: SeasonalWave::Sine {
                amplitude: 0.02,
                period: 0.3,
            },
            jitter: JitterBand::new(0.95, 1.05),
            secondary: SecondaryMetric {
                name: "Well Temperature".to_string(),
                unit: "°C".to_string(),
                base: 180.0,
                trend: SecondaryTrend::Flat,
                decimals: 0,
            },
            efficiency: EfficiencyModel {
                base: 88.0,
                growth: 6.0,
                band: PercentBand::new(80.0, 100.0),
            },
        }
    }

    #[must_use]
    pub fn biomass() -> Self {
        Self {
            energy_type: EnergyType::Biomass,
            generation_unit: "GWh".to_string(),
            base_generation: 2800.0,
            growth_factor_max: 0.45,
            seasonal: SeasonalWave::Cosine {
                amplitude: 0.08,
                period: 0.6,
            },
            jitter: JitterBand::new(0.9, 1.1),
            secondary: SecondaryMetric {
                name: "Feedstock".to_string(),
                unit: "kt".to_string(),
                base: 1500.0,
                trend: SecondaryTrend::Growing(0.3),
                decimals: 0,
            },
            efficiency: EfficiencyModel {
                base: 72.0,
                growth: 12.0,
                band: PercentBand::new(70.0, 100.0),
            },
        }
    }

    /// Check that every parameter can drive the generator
    pub fn validate(&self) -> Result<(), ProfileError> {
        let mut numbers = vec![
            ("base_generation", self.base_generation),
            ("growth_factor_max", self.growth_factor_max),
            ("jitter.low", self.jitter.low),
            ("jitter.high", self.jitter.high),
            ("secondary.base", self.secondary.base),
            ("efficiency.base", self.efficiency.base),
            ("efficiency.growth", self.efficiency.growth),
            ("efficiency.band.min", self.efficiency.band.min),
            ("efficiency.band.max", self.efficiency.band.max),
        ];
        if let Some((amplitude, period)) = self.seasonal.params() {
            numbers.push(("seasonal.amplitude", amplitude));
            numbers.push(("seasonal.period", period));
        }
        if let SecondaryTrend::Growing(factor) = self.secondary.trend {
            numbers.push(("secondary.trend", factor));
        }
        if let Some(&(field, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ProfileError::NonFinite { field });
        }

        for (field, value) in [
            ("base_generation", self.base_generation),
            ("secondary.base", self.secondary.base),
            ("jitter.low", self.jitter.low),
        ] {
            if value < 0.0 {
                return Err(ProfileError::NegativeBase { field, value });
            }
        }

        if self.jitter.low > self.jitter.high {
            return Err(ProfileError::InvertedJitter {
                low: self.jitter.low,
                high: self.jitter.high,
            });
        }

        let band = self.efficiency.band;
        if band.min > band.max {
            return Err(ProfileError::InvertedBand {
                min: band.min,
                max: band.max,
            });
        }
        if band.min < 0.0 || band.max > 100.0 {
            return Err(ProfileError::BandOutOfRange {
                min: band.min,
                max: band.max,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_are_valid() {
        for energy in EnergyType::ALL {
            let profile = EnergyProfile::builtin(energy);
            assert_eq!(profile.energy_type, energy);
            profile.validate().unwrap();
        }
    }

    #[test]
    fn test_jitter_factor() {
        let band = JitterBand::new(0.9, 1.1);
        assert_eq!(band.factor(0.0), 0.9);
        assert!((band.factor(0.5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_seasonal_offsets() {
        assert_eq!(SeasonalWave::None.offset(3.0), 0.0);

        let sine = SeasonalWave::Sine {
            amplitude: 0.1,
            period: 0.5,
        };
        assert_eq!(sine.offset(0.0), 0.0);

        let cosine = SeasonalWave::Cosine {
            amplitude: 0.08,
            period: 0.6,
        };
        assert!((cosine.offset(0.0) - 0.08).abs() < 1e-12);
    }

    #[test]
    fn test_secondary_trend() {
        assert_eq!(SecondaryTrend::Flat.multiplier(1.0), 1.0);
        assert!((SecondaryTrend::Growing(0.2).multiplier(0.5) - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_inverted_jitter() {
        let mut profile = EnergyProfile::solar();
        profile.jitter = JitterBand::new(1.2, 0.8);
        assert_eq!(
            profile.validate(),
            Err(ProfileError::InvertedJitter {
                low: 1.2,
                high: 0.8
            })
        );
    }

    #[test]
    fn test_validate_rejects_band_outside_percent() {
        let mut profile = EnergyProfile::wind();
        profile.efficiency.band = PercentBand::new(80.0, 120.0);
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::BandOutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut profile = EnergyProfile::hydro();
        profile.seasonal = SeasonalWave::Sine {
            amplitude: f64::NAN,
            period: 0.5,
        };
        assert_eq!(
            profile.validate(),
            Err(ProfileError::NonFinite {
                field: "seasonal.amplitude"
            })
        );
    }

    #[test]
    fn test_validate_rejects_negative_base() {
        let mut profile = EnergyProfile::biomass();
        profile.base_generation = -1.0;
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::NegativeBase {
                field: "base_generation",
                ..
            })
        ));
    }

    #[test]
    fn test_seasonal_wave_yaml_shape() {
        let wave: SeasonalWave =
            serde_json::from_str(r#"{"type":"Cosine","amplitude":0.1,"period":0.6}"#).unwrap();
        assert_eq!(
            wave,
            SeasonalWave::Cosine {
                amplitude: 0.1,
                period: 0.6
            }
        );
    }
}
