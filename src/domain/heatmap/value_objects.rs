use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - a named financial index from the backend catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct IndexName(String);

impl IndexName {
    pub fn new(name: String) -> Result<Self, String> {
        if name.trim().is_empty() {
            return Err("Index name cannot be empty".to_string());
        }
        Ok(Self(name))
    }

    /// Maps a raw `<select>` value to a selection; the empty placeholder
    /// option becomes "none selected".
    pub fn from_select_value(raw: &str) -> Option<Self> {
        Self::new(raw.to_string()).ok()
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IndexName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for IndexName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Value Object - forward return horizon, wire strings matching the backend
/// `forward_period` query parameter. The default current/MoM lens is the
/// absence of a period (`Option<ForwardPeriod>::None`), never a variant here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
pub enum ForwardPeriod {
    #[strum(serialize = "1M")]
    #[serde(rename = "1M")]
    OneMonth,

    #[strum(serialize = "3M")]
    #[serde(rename = "3M")]
    ThreeMonths,

    #[strum(serialize = "6M")]
    #[serde(rename = "6M")]
    SixMonths,

    #[strum(serialize = "1Y")]
    #[serde(rename = "1Y")]
    OneYear,

    #[strum(serialize = "2Y")]
    #[serde(rename = "2Y")]
    TwoYears,

    #[strum(serialize = "3Y")]
    #[serde(rename = "3Y")]
    ThreeYears,

    #[strum(serialize = "4Y")]
    #[serde(rename = "4Y")]
    FourYears,
}

impl ForwardPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
            Self::TwoYears => "2Y",
            Self::ThreeYears => "3Y",
            Self::FourYears => "4Y",
        }
    }

    /// Horizon length in months, matching the backend's period map.
    pub fn months(&self) -> u32 {
        match self {
            Self::OneMonth => 1,
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::OneYear => 12,
            Self::TwoYears => 24,
            Self::ThreeYears => 36,
            Self::FourYears => 48,
        }
    }
}
