use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Soft-deletion marker as the store keeps it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeletedAt {
    #[default]
    Absent,
    Present(DateTime<Utc>),
}

/// The instant a never-deleted record reports as its deletion time.
pub fn zero_instant() -> DateTime<Utc> {
    DateTime::<Utc>::default()
}

impl DeletedAt {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeletedAt::Present(_))
    }

    pub fn as_option(&self) -> Option<DateTime<Utc>> {
        match self {
            DeletedAt::Absent => None,
            DeletedAt::Present(at) => Some(*at),
        }
    }

    /// Collapses the marker into the always-present API value.
    ///
    /// This is lossy: after the conversion a live record and one deleted at
    /// [`zero_instant`] look the same.
    pub fn or_zero(&self) -> DateTime<Utc> {
        self.as_option().unwrap_or_else(zero_instant)
    }
}

impl From<Option<DateTime<Utc>>> for DeletedAt {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        match value {
            None => DeletedAt::Absent,
            Some(at) => DeletedAt::Present(at),
        }
    }
}

impl From<Option<NaiveDateTime>> for DeletedAt {
    fn from(value: Option<NaiveDateTime>) -> Self {
        value.map(|at| at.and_utc()).into()
    }
}
