use axum::{
    extract::{Form, Path, State},
    http::HeaderMap,
    response::{Json, Redirect},
};
use serde::Deserialize;

use crate::auth::auth_header;
use crate::client::ApiClient;
use crate::error::AppError;
use crate::models::{Group, Spending};

#[derive(Debug, Deserialize)]
pub struct GroupForm {
    pub name: Option<String>,
    pub description: Option<String>,
}

// Load the details page: an existing group, or an empty one for the create form.
pub async fn details_load(
    State(client): State<ApiClient>,
    id: Option<Path<i64>>,
    headers: HeaderMap,
) -> Result<Json<Group>, AppError> {
    let id = id.map(|Path(id)| id).unwrap_or(0);
    let group = if id > 0 {
        client.groups().fetch(id, auth_header(&headers)).await?
    } else {
        Group::default()
    };
    Ok(Json(group))
}

// Save the submitted group and move on to its movements page.
pub async fn details_action(
    State(client): State<ApiClient>,
    id: Option<Path<i64>>,
    headers: HeaderMap,
    Form(form): Form<GroupForm>,
) -> Result<Redirect, AppError> {
    let id = id.map(|Path(id)| id).unwrap_or(0);

    let name = form
        .name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::Validation("Name is required".to_string()))?;
    let description = form
        .description
        .filter(|description| !description.is_empty())
        .ok_or_else(|| AppError::Validation("Description is required".to_string()))?;

    let group = Group {
        id,
        name,
        description,
        owner_id: 0,
    };
    let saved = client.groups().save(&group, auth_header(&headers)).await?;
    Ok(Redirect::to(&format!("/groups/movements/{}", saved.id)))
}

// All groups of the current user.
pub async fn list_load(
    State(client): State<ApiClient>,
    headers: HeaderMap,
) -> Result<Json<Vec<Group>>, AppError> {
    let groups = client.groups().list(0, auth_header(&headers)).await?;
    Ok(Json(groups))
}

// Spendings of one group, for the movements page.
pub async fn movements_load(
    State(client): State<ApiClient>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<Vec<Spending>>, AppError> {
    let spendings = client.spendings().list(id, auth_header(&headers)).await?;
    Ok(Json(spendings))
}
