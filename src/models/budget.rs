use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::resource::{Entity, ListRoute};

/// A budget for a group. Routing fields typed, the rest passed through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Budget {
    pub id: i64,
    pub group_id: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Entity for Budget {
    const RESOURCE: &'static str = "budget";
    const LIST_ROUTE: ListRoute = ListRoute::UnderGroup;

    fn id(&self) -> i64 {
        self.id
    }
}
