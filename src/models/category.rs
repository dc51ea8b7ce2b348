use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::resource::{Entity, ListRoute};

/// A spending category for a group. Routing fields typed, the rest passed
/// through.
///
/// Note: the backend lists categories under `category/{group_id}` instead of
/// the `group/{group_id}/category` shape the other resources use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: i64,
    pub group_id: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Entity for Category {
    const RESOURCE: &'static str = "category";
    const LIST_ROUTE: ListRoute = ListRoute::Flat;

    fn id(&self) -> i64 {
        self.id
    }
}
