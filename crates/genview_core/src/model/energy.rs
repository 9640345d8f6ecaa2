use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// The renewable sources tracked by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyType {
    Solar,
    Wind,
    Hydro,
    Geothermal,
    Biomass,
}

impl EnergyType {
    pub const ALL: [EnergyType; 5] = [
        EnergyType::Solar,
        EnergyType::Wind,
        EnergyType::Hydro,
        EnergyType::Geothermal,
        EnergyType::Biomass,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            EnergyType::Solar => "Solar",
            EnergyType::Wind => "Wind",
            EnergyType::Hydro => "Hydro",
            EnergyType::Geothermal => "Geothermal",
            EnergyType::Biomass => "Biomass",
        }
    }
}

impl fmt::Display for EnergyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EnergyType {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EnergyType::ALL
            .into_iter()
            .find(|e| e.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProfileError::UnknownEnergyType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("wind".parse::<EnergyType>().unwrap(), EnergyType::Wind);
        assert_eq!(" HYDRO ".parse::<EnergyType>().unwrap(), EnergyType::Hydro);
        assert_eq!(
            "Geothermal".parse::<EnergyType>().unwrap(),
            EnergyType::Geothermal
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "tidal".parse::<EnergyType>().unwrap_err();
        assert_eq!(err, ProfileError::UnknownEnergyType("tidal".to_string()));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&EnergyType::Biomass).unwrap();
        assert_eq!(json, "\"biomass\"");
        let back: EnergyType = serde_json::from_str("\"solar\"").unwrap();
        assert_eq!(back, EnergyType::Solar);
    }
}
