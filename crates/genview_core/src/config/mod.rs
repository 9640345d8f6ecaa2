//! Dashboard configuration
//!
//! `DashboardConfig` is the serializable description of how the dashboard
//! behaves: range limits, the span policy, an optional fixed seed, and
//! per-energy-type tweaks to the built-in profiles.

mod profile_builder;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{
    EnergyProfile, EnergyType, JitterBand, MAX_SPAN, MAX_YEAR, MIN_YEAR, PercentBand,
    SeasonalWave, SecondaryTrend,
};
use crate::range::{RangeController, SpanPolicy, YearBounds};

pub use profile_builder::ProfileBuilder;

/// Complete dashboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Maximum distance between the first and last selected year
    pub max_span: i32,
    pub min_year: i32,
    pub max_year: i32,
    pub span_policy: SpanPolicy,
    /// Fixed seed for reproducible series; entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub default_energy: EnergyType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<ProfileOverride>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let bounds = YearBounds::default();
        Self {
            max_span: MAX_SPAN,
            min_year: bounds.min,
            max_year: bounds.max,
            span_policy: SpanPolicy::default(),
            seed: None,
            default_energy: EnergyType::Solar,
            profiles: Vec::new(),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_span <= 0 {
            return Err(ConfigError::InvalidSpan(self.max_span));
        }
        let calendar = MIN_YEAR..=MAX_YEAR;
        if self.min_year > self.max_year
            || !calendar.contains(&self.min_year)
            || !calendar.contains(&self.max_year)
        {
            return Err(ConfigError::InvalidYearBounds {
                min: self.min_year,
                max: self.max_year,
            });
        }
        self.registry().map(|_| ())
    }

    #[must_use]
    pub fn year_bounds(&self) -> YearBounds {
        YearBounds {
            min: self.min_year,
            max: self.max_year,
        }
    }

    /// A range controller honoring these limits, anchored at `current_year`
    #[must_use]
    pub fn controller(&self, current_year: i32) -> RangeController {
        RangeController::with_current_year(current_year)
            .max_span(self.max_span)
            .bounds(self.year_bounds())
            .policy(self.span_policy)
    }

    /// Built-in profiles with this config's overrides applied
    pub fn registry(&self) -> Result<ProfileRegistry, ConfigError> {
        ProfileRegistry::builtin().with_overrides(&self.profiles)
    }
}

/// Partial replacement for one built-in profile; unset fields keep the built-in value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileOverride {
    pub energy_type: EnergyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_generation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_factor_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonal: Option<SeasonalWave>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jitter: Option<JitterBand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_base: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_trend: Option<SecondaryTrend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency_base: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency_growth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency_band: Option<PercentBand>,
}

impl ProfileOverride {
    #[must_use]
    pub fn new(energy_type: EnergyType) -> Self {
        Self {
            energy_type,
            base_generation: None,
            growth_factor_max: None,
            seasonal: None,
            jitter: None,
            secondary_base: None,
            secondary_trend: None,
            efficiency_base: None,
            efficiency_growth: None,
            efficiency_band: None,
        }
    }

    /// Patch `profile` in place
    pub fn apply(&self, profile: &mut EnergyProfile) {
        if let Some(v) = self.base_generation {
            profile.base_generation = v;
        }
        if let Some(v) = self.growth_factor_max {
            profile.growth_factor_max = v;
        }
        if let Some(v) = self.seasonal {
            profile.seasonal = v;
        }
        if let Some(v) = self.jitter {
            profile.jitter = v;
        }
        if let Some(v) = self.secondary_base {
            profile.secondary.base = v;
        }
        if let Some(v) = self.secondary_trend {
            profile.secondary.trend = v;
        }
        if let Some(v) = self.efficiency_base {
            profile.efficiency.base = v;
        }
        if let Some(v) = self.efficiency_growth {
            profile.efficiency.growth = v;
        }
        if let Some(v) = self.efficiency_band {
            profile.efficiency.band = v;
        }
    }
}

/// One profile per energy type
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: FxHashMap<EnergyType, EnergyProfile>,
}

impl ProfileRegistry {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            profiles: EnergyType::ALL
                .into_iter()
                .map(|e| (e, EnergyProfile::builtin(e)))
                .collect(),
        }
    }

    /// Apply overrides, validating every touched profile.
    ///
    /// Each energy type may be overridden at most once.
    pub fn with_overrides(mut self, overrides: &[ProfileOverride]) -> Result<Self, ConfigError> {
        let mut seen = Vec::with_capacity(overrides.len());
        for o in overrides {
            if seen.contains(&o.energy_type) {
                return Err(ConfigError::DuplicateOverride(o.energy_type));
            }
            seen.push(o.energy_type);

            let profile = self
                .profiles
                .entry(o.energy_type)
                .or_insert_with(|| EnergyProfile::builtin(o.energy_type));
            o.apply(profile);
            profile.validate()?;
        }
        Ok(self)
    }

    /// Registry always holds every energy type
    #[must_use]
    pub fn get(&self, energy_type: EnergyType) -> &EnergyProfile {
        &self.profiles[&energy_type]
    }

    /// Profiles in `EnergyType::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = &EnergyProfile> {
        EnergyType::ALL.into_iter().map(|e| self.get(e))
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProfileError;

    #[test]
    fn test_default_config_is_valid() {
        let config = DashboardConfig::default();
        config.validate().unwrap();
        assert_eq!(config.max_span, 30);
        assert_eq!(config.span_policy, SpanPolicy::Clamp);
    }

    #[test]
    fn test_invalid_span() {
        let config = DashboardConfig {
            max_span: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidSpan(0)));
    }

    #[test]
    fn test_inverted_bounds() {
        let config = DashboardConfig {
            min_year: 2100,
            max_year: 2000,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidYearBounds { .. })
        ));
    }

    #[test]
    fn test_bounds_outside_calendar() {
        let config = DashboardConfig {
            min_year: i32::MIN,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidYearBounds {
                min: i32::MIN,
                max: 2100
            })
        );

        let config = DashboardConfig {
            max_year: MAX_YEAR + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_override_applies() {
        let mut o = ProfileOverride::new(EnergyType::Wind);
        o.base_generation = Some(6000.0);
        o.jitter = Some(JitterBand::new(0.95, 1.05));
        let registry = ProfileRegistry::builtin().with_overrides(&[o]).unwrap();

        let wind = registry.get(EnergyType::Wind);
        assert_eq!(wind.base_generation, 6000.0);
        assert_eq!(wind.jitter, JitterBand::new(0.95, 1.05));
        // Untouched fields keep built-in values
        assert_eq!(wind.growth_factor_max, EnergyProfile::wind().growth_factor_max);
        assert_eq!(registry.get(EnergyType::Solar), &EnergyProfile::solar());
    }

    #[test]
    fn test_invalid_override_rejected() {
        let mut o = ProfileOverride::new(EnergyType::Hydro);
        o.efficiency_band = Some(PercentBand::new(50.0, 150.0));
        let err = ProfileRegistry::builtin().with_overrides(&[o]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Profile(ProfileError::BandOutOfRange {
                min: 50.0,
                max: 150.0
            })
        );
    }

    #[test]
    fn test_duplicate_override_rejected() {
        let overrides = [
            ProfileOverride::new(EnergyType::Solar),
            ProfileOverride::new(EnergyType::Solar),
        ];
        let err = ProfileRegistry::builtin()
            .with_overrides(&overrides)
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateOverride(EnergyType::Solar));
    }

    #[test]
    fn test_registry_iter_order() {
        let registry = ProfileRegistry::builtin();
        let order: Vec<EnergyType> = registry.iter().map(|p| p.energy_type).collect();
        assert_eq!(order, EnergyType::ALL.to_vec());
    }

    #[test]
    fn test_controller_uses_limits() {
        let config = DashboardConfig {
            max_span: 10,
            span_policy: SpanPolicy::Reject,
            ..Default::default()
        };
        let controller = config.controller(2026);
        assert_eq!(controller.span_limit(), 10);
        assert_eq!(controller.range().start, 2026);
    }

    #[test]
    fn test_config_json_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{"max_span": 20, "span_policy": "reject"}"#).unwrap();
        assert_eq!(config.max_span, 20);
        assert_eq!(config.span_policy, SpanPolicy::Reject);
        assert_eq!(config.min_year, 1900);
        assert!(config.profiles.is_empty());
    }
}
