use std::fmt;

use crate::model::{EnergyType, MAX_YEAR, MIN_YEAR};

/// Errors raised by the range setters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// Year falls outside the configured bounds
    InvalidYear { year: i32, min: i32, max: i32 },
    /// Span would exceed the maximum and the policy is to reject
    SpanExceeded { span: i64, max: i32 },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::InvalidYear { year, min, max } => {
                write!(f, "invalid year {year} (expected {min}..={max})")
            }
            RangeError::SpanExceeded { span, max } => {
                write!(f, "year span of {span} exceeds the maximum of {max} years")
            }
        }
    }
}

impl std::error::Error for RangeError {}

/// Errors related to energy profile parameters
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileError {
    NonFinite { field: &'static str },
    NegativeBase { field: &'static str, value: f64 },
    InvertedJitter { low: f64, high: f64 },
    InvertedBand { min: f64, max: f64 },
    BandOutOfRange { min: f64, max: f64 },
    UnknownEnergyType(String),
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::NonFinite { field } => write!(f, "profile field `{field}` is not finite"),
            ProfileError::NegativeBase { field, value } => {
                write!(f, "profile field `{field}` must be non-negative (got {value})")
            }
            ProfileError::InvertedJitter { low, high } => {
                write!(f, "jitter band is inverted (low={low}, high={high})")
            }
            ProfileError::InvertedBand { min, max } => {
                write!(f, "efficiency band is inverted (min={min}, max={max})")
            }
            ProfileError::BandOutOfRange { min, max } => {
                write!(f, "efficiency band [{min}, {max}] is outside 0..=100")
            }
            ProfileError::UnknownEnergyType(name) => write!(f, "unknown energy type `{name}`"),
        }
    }
}

impl std::error::Error for ProfileError {}

/// Errors raised while generating a series
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// The range ends before it starts
    EmptyRange { start: i32, end: i32 },
    /// The range reaches past `MIN_YEAR..=MAX_YEAR`
    OutsideCalendar { start: i32, end: i32 },
    InvalidProfile(ProfileError),
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesError::EmptyRange { start, end } => {
                write!(f, "cannot generate a series for {start}..={end}: range is empty")
            }
            SeriesError::OutsideCalendar { start, end } => write!(
                f,
                "cannot generate a series for {start}..={end}: years must lie within {MIN_YEAR}..={MAX_YEAR}"
            ),
            SeriesError::InvalidProfile(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SeriesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeriesError::InvalidProfile(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ProfileError> for SeriesError {
    fn from(err: ProfileError) -> Self {
        SeriesError::InvalidProfile(err)
    }
}

/// Errors raised while projecting summary statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    EmptySeries,
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::EmptySeries => write!(f, "series is empty, no data to summarize"),
        }
    }
}

impl std::error::Error for StatsError {}

#[derive(Debug, Clone, PartialEq)]
pub enum EnsembleError {
    NoIterations,
    Series(SeriesError),
}

impl fmt::Display for EnsembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnsembleError::NoIterations => write!(f, "ensemble needs at least one iteration"),
            EnsembleError::Series(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EnsembleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EnsembleError::Series(e) => Some(e),
            EnsembleError::NoIterations => None,
        }
    }
}

impl From<SeriesError> for EnsembleError {
    fn from(err: SeriesError) -> Self {
        EnsembleError::Series(err)
    }
}

/// Errors related to dashboard configuration
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidSpan(i32),
    InvalidYearBounds { min: i32, max: i32 },
    Profile(ProfileError),
    DuplicateOverride(EnergyType),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSpan(span) => {
                write!(f, "configuration error: max_span must be positive (got {span})")
            }
            ConfigError::InvalidYearBounds { min, max } => {
                write!(
                    f,
                    "configuration error: year bounds {min}..={max} must be ordered and within {MIN_YEAR}..={MAX_YEAR}"
                )
            }
            ConfigError::Profile(e) => write!(f, "configuration error: {e}"),
            ConfigError::DuplicateOverride(energy) => {
                write!(f, "configuration error: {energy} profile is overridden twice")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Profile(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ProfileError> for ConfigError {
    fn from(err: ProfileError) -> Self {
        ConfigError::Profile(err)
    }
}

/// Umbrella error for callers driving the whole pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Range(RangeError),
    Series(SeriesError),
    Stats(StatsError),
    Ensemble(EnsembleError),
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Range(e) => write!(f, "{e}"),
            Error::Series(e) => write!(f, "{e}"),
            Error::Stats(e) => write!(f, "{e}"),
            Error::Ensemble(e) => write!(f, "{e}"),
            Error::Config(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Range(e) => Some(e),
            Error::Series(e) => Some(e),
            Error::Stats(e) => Some(e),
            Error::Ensemble(e) => Some(e),
            Error::Config(e) => Some(e),
        }
    }
}

impl From<RangeError> for Error {
    fn from(err: RangeError) -> Self {
        Error::Range(err)
    }
}

impl From<SeriesError> for Error {
    fn from(err: SeriesError) -> Self {
        Error::Series(err)
    }
}

impl From<StatsError> for Error {
    fn from(err: StatsError) -> Self {
        Error::Stats(err)
    }
}

impl From<EnsembleError> for Error {
    fn from(err: EnsembleError) -> Self {
        Error::Ensemble(err)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Error::Config(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
