use crate::domain::heatmap::{ForwardPeriod, IndexName};

/// Outcome of one logical backend request. The catalog fetch and the heatmap
/// fetch each carry their own instance.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// What the user currently has picked. Lives independently of the catalog:
/// a period choice survives catalog reloads and index switches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    /// `None` is the "Select an index…" placeholder.
    pub index: Option<IndexName>,
    /// `None` is the default current/month-over-month lens.
    pub period: Option<ForwardPeriod>,
}
