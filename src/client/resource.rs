use std::marker::PhantomData;

use axum::http::HeaderMap;
use serde::{de::DeserializeOwned, Serialize};

use super::ApiClient;
use crate::error::AppError;

/// Where a resource's list endpoint lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRoute {
    /// `{resource}`: the groups of the current user.
    Root,
    /// `group/{group_id}/{resource}`: spendings and budgets.
    UnderGroup,
    /// `{resource}/{group_id}`: categories only; the backend routes them
    /// flat instead of under the group.
    Flat,
}

/// A backend-managed entity with the shared path conventions.
pub trait Entity: Serialize + DeserializeOwned {
    const RESOURCE: &'static str;
    const LIST_ROUTE: ListRoute;

    /// Backend id; `<= 0` means the entity has not been created yet.
    fn id(&self) -> i64;
}

/// Save/fetch/list operations for one resource type.
///
/// Verb and path are picked by convention: an entity with a positive id is
/// updated in place, anything else is created.
pub struct ResourceService<'a, T> {
    client: &'a ApiClient,
    _marker: PhantomData<T>,
}

impl<'a, T: Entity> ResourceService<'a, T> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self {
            client,
            _marker: PhantomData,
        }
    }

    /// Create or update, returning the entity as the backend stored it.
    pub async fn save(&self, entity: &T, auth: HeaderMap) -> Result<T, AppError> {
        let data = serde_json::to_value(entity)?;
        let body = if entity.id() > 0 {
            let path = format!("{}/{}", T::RESOURCE, entity.id());
            self.client.put(&path, &data, auth).await?
        } else {
            self.client.post(T::RESOURCE, &data, auth).await?
        };
        Ok(serde_json::from_value(body)?)
    }

    pub async fn fetch(&self, id: i64, auth: HeaderMap) -> Result<T, AppError> {
        let path = format!("{}/{}", T::RESOURCE, id);
        let body = self.client.get(&path, auth).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// List the entities visible in `group_id`. Ignored for `ListRoute::Root`,
    /// where the backend scopes the list to the authenticated user instead.
    pub async fn list(&self, group_id: i64, auth: HeaderMap) -> Result<Vec<T>, AppError> {
        let path = match T::LIST_ROUTE {
            ListRoute::Root => T::RESOURCE.to_string(),
            ListRoute::UnderGroup => format!("group/{}/{}", group_id, T::RESOURCE),
            ListRoute::Flat => format!("{}/{}", T::RESOURCE, group_id),
        };
        let body = self.client.get(&path, auth).await?;
        Ok(serde_json::from_value(body)?)
    }
}
