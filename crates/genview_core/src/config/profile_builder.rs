//! Profile Builder DSL
//!
//! Provides a fluent API for defining energy profiles.
//!
//! # Examples
//!
//! ```ignore
//! use genview_core::config::ProfileBuilder;
//!
//! // Start from the built-in wind parameters and retune them
//! let offshore = ProfileBuilder::wind()
//!     .base_generation(6_000.0)
//!     .sine(0.2, 0.7)
//!     .jitter(0.9, 1.1)
//!     .build()?;
//!
//! // Define a profile from scratch
//! let pilot = ProfileBuilder::new(EnergyType::Solar)
//!     .base_generation(120.0)
//!     .growth(1.5)
//!     .secondary("Irradiance", "kWh/m²", 5.0)
//!     .efficiency(72.0, 20.0)
//!     .efficiency_band(70.0, 100.0)
//!     .build()?;
//! ```

use crate::error::ProfileError;
use crate::model::{
    EfficiencyModel, EnergyProfile, EnergyType, JitterBand, PercentBand, SeasonalWave,
    SecondaryMetric, SecondaryTrend,
};

/// Builder for an [`EnergyProfile`]
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    profile: EnergyProfile,
}

impl ProfileBuilder {
    /// Blank profile: no generation, no seasonality, no jitter
    #[must_use]
    pub fn new(energy_type: EnergyType) -> Self {
        Self {
            profile: EnergyProfile {
                energy_type,
                generation_unit: "GWh".to_string(),
                base_generation: 0.0,
                growth_factor_max: 0.0,
                seasonal: SeasonalWave::None,
                jitter: JitterBand::new(1.0, 1.0),
                secondary: SecondaryMetric {
                    name: "Secondary".to_string(),
                    unit: String::new(),
                    base: 0.0,
                    trend: SecondaryTrend::Flat,
                    decimals: 0,
                },
                efficiency: EfficiencyModel {
                    base: 0.0,
                    growth: 0.0,
                    band: PercentBand::new(0.0, 100.0),
                },
            },
        }
    }

    /// Start from an existing profile
    #[must_use]
    pub fn from_profile(profile: EnergyProfile) -> Self {
        Self { profile }
    }

    // =========================================================================
    // Built-in Presets
    // =========================================================================

    #[must_use]
    pub fn solar() -> Self {
        Self::from_profile(EnergyProfile::solar())
    }

    #[must_use]
    pub fn wind() -> Self {
        Self::from_profile(EnergyProfile::wind())
    }

    #[must_use]
    pub fn hydro() -> Self {
        Self::from_profile(EnergyProfile::hydro())
    }

    #[must_use]
    pub fn geothermal() -> Self {
        Self::from_profile(EnergyProfile::geothermal())
    }

    #[must_use]
    pub fn biomass() -> Self {
        Self::from_profile(EnergyProfile::biomass())
    }

    // =========================================================================
    // Builder Methods
    // =========================================================================

    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.profile.generation_unit = unit.into();
        self
    }

    #[must_use]
    pub fn base_generation(mut self, base: f64) -> Self {
        self.profile.base_generation = base;
        self
    }

    /// Fraction of linear growth reached at the end of the span
    #[must_use]
    pub fn growth(mut self, factor: f64) -> Self {
        self.profile.growth_factor_max = factor;
        self
    }

    #[must_use]
    pub fn sine(mut self, amplitude: f64, period: f64) -> Self {
        self.profile.seasonal = SeasonalWave::Sine { amplitude, period };
        self
    }

    #[must_use]
    pub fn cosine(mut self, amplitude: f64, period: f64) -> Self {
        self.profile.seasonal = SeasonalWave::Cosine { amplitude, period };
        self
    }

    #[must_use]
    pub fn no_seasonality(mut self) -> Self {
        self.profile.seasonal = SeasonalWave::None;
        self
    }

    #[must_use]
    pub fn jitter(mut self, low: f64, high: f64) -> Self {
        self.profile.jitter = JitterBand::new(low, high);
        self
    }

    #[must_use]
    pub fn secondary(mut self, name: impl Into<String>, unit: impl Into<String>, base: f64) -> Self {
        self.profile.secondary.name = name.into();
        self.profile.secondary.unit = unit.into();
        self.profile.secondary.base = base;
        self
    }

    /// Let the secondary metric grow to `1 + factor` by the end of the span
    #[must_use]
    pub fn secondary_growth(mut self, factor: f64) -> Self {
        self.profile.secondary.trend = SecondaryTrend::Growing(factor);
        self
    }

    #[must_use]
    pub fn secondary_decimals(mut self, decimals: u8) -> Self {
        self.profile.secondary.decimals = decimals;
        self
    }

    #[must_use]
    pub fn efficiency(mut self, base: f64, growth: f64) -> Self {
        self.profile.efficiency.base = base;
        self.profile.efficiency.growth = growth;
        self
    }

    #[must_use]
    pub fn efficiency_band(mut self, min: f64, max: f64) -> Self {
        self.profile.efficiency.band = PercentBand::new(min, max);
        self
    }

    /// Validate and return the finished profile
    pub fn build(self) -> Result<EnergyProfile, ProfileError> {
        self.profile.validate()?;
        Ok(self.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_match_builtins() {
        for energy in EnergyType::ALL {
            let built = match energy {
                EnergyType::Solar => ProfileBuilder::solar(),
                EnergyType::Wind => ProfileBuilder::wind(),
                EnergyType::Hydro => ProfileBuilder::hydro(),
                EnergyType::Geothermal => ProfileBuilder::geothermal(),
                EnergyType::Biomass => ProfileBuilder::biomass(),
            }
            .build()
            .unwrap();
            assert_eq!(built, EnergyProfile::builtin(energy));
        }
    }

    #[test]
    fn test_custom_profile() {
        let profile = ProfileBuilder::new(EnergyType::Wind)
            .unit("MWh")
            .base_generation(900.0)
            .growth(0.25)
            .cosine(0.05, 1.2)
            .jitter(0.95, 1.05)
            .secondary("Hub Wind Speed", "m/s", 9.5)
            .secondary_growth(0.1)
            .secondary_decimals(1)
            .efficiency(85.0, 5.0)
            .efficiency_band(80.0, 100.0)
            .build()
            .unwrap();

        assert_eq!(profile.generation_unit, "MWh");
        assert_eq!(profile.base_generation, 900.0);
        assert_eq!(
            profile.seasonal,
            SeasonalWave::Cosine {
                amplitude: 0.05,
                period: 1.2
            }
        );
        assert_eq!(profile.secondary.trend, SecondaryTrend::Growing(0.1));
        assert_eq!(profile.efficiency.band, PercentBand::new(80.0, 100.0));
    }

    #[test]
    fn test_build_validates() {
        let err = ProfileBuilder::solar()
            .efficiency_band(90.0, 80.0)
            .build()
            .unwrap_err();
        assert_eq!(err, ProfileError::InvertedBand { min: 90.0, max: 80.0 });
    }
}
