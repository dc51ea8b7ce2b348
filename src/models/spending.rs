use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::resource::{Entity, ListRoute};

/// A spending entry inside a group. Only the routing fields are typed;
/// everything else (amount, payer, date, ...) belongs to the backend and is
/// passed through unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Spending {
    pub id: i64,
    pub group_id: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Entity for Spending {
    const RESOURCE: &'static str = "spending";
    const LIST_ROUTE: ListRoute = ListRoute::UnderGroup;

    fn id(&self) -> i64 {
        self.id
    }
}
