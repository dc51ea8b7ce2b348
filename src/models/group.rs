use serde::{Deserialize, Serialize};

use crate::client::resource::{Entity, ListRoute};

/// A shared expense group. `id == 0` means not yet created on the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub owner_id: i64,
}

impl Entity for Group {
    const RESOURCE: &'static str = "group";
    const LIST_ROUTE: ListRoute = ListRoute::Root;

    fn id(&self) -> i64 {
        self.id
    }
}
