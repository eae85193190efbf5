use super::DeletedAt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A publisher.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub name: String,
    pub domain: String,
    pub created_at: DateTime<Utc>,
    pub deleted_at: DeletedAt,
}

impl Source {
    /// A source carrying its identity and nothing else.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// The parent `Source` of a `SubSource`, as handed to the dispatcher.
///
/// `Unresolved` carries only the identity taken from the child's foreign key.
/// Only `id()` is guaranteed to be meaningful on it.
#[derive(Clone, Debug, PartialEq)]
pub enum SourceRef {
    Unresolved { id: String },
    Resolved(Source),
}

impl SourceRef {
    pub fn unresolved(id: impl Into<String>) -> Self {
        SourceRef::Unresolved { id: id.into() }
    }

    pub fn id(&self) -> &str {
        match self {
            SourceRef::Unresolved { id } => id,
            SourceRef::Resolved(source) => &source.id,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, SourceRef::Resolved(_))
    }

    /// The value the identity-only shortcut presents: the full record when
    /// resolved, otherwise the id with every other field zero valued.
    pub fn to_partial(&self) -> Source {
        match self {
            SourceRef::Unresolved { id } => Source::with_id(id.as_str()),
            SourceRef::Resolved(source) => source.clone(),
        }
    }
}

impl From<Source> for SourceRef {
    fn from(source: Source) -> Self {
        SourceRef::Resolved(source)
    }
}
