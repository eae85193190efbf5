use super::DeletedAt;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A feed or channel scraped under a `Source`, e.g. a single account on a
/// social site.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubSource {
    pub id: String,
    pub name: String,
    // id of the account on the original site
    pub external_identifier: String,
    pub avatar_url: String,
    pub origin_url: String,
    pub is_from_shared_post: bool,
    pub source_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: DeletedAt,
}
