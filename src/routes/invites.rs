use axum::{
    extract::{Form, Path, State},
    http::HeaderMap,
    response::{Json, Redirect},
};
use serde::Deserialize;

use crate::auth::{auth_header, user_id};
use crate::client::ApiClient;
use crate::error::AppError;
use crate::models::{Group, SendInvite};

#[derive(Debug, Deserialize)]
pub struct InviteForm {
    pub email: Option<String>,
}

// Load the invite page with the group being invited to.
pub async fn send_load(
    State(client): State<ApiClient>,
    id: Option<Path<i64>>,
    headers: HeaderMap,
) -> Result<Json<Group>, AppError> {
    let group_id = id.map(|Path(id)| id).unwrap_or(0);
    let group = client.groups().fetch(group_id, auth_header(&headers)).await?;
    Ok(Json(group))
}

// Send the invite and return to the group's members page.
pub async fn send_action(
    State(client): State<ApiClient>,
    id: Option<Path<i64>>,
    headers: HeaderMap,
    Form(form): Form<InviteForm>,
) -> Result<Redirect, AppError> {
    let group_id = id.map(|Path(id)| id).unwrap_or(0);

    let email = form
        .email
        .filter(|email| !email.is_empty())
        .ok_or_else(|| AppError::Validation("Receiver Email is required".to_string()))?;

    let invite = SendInvite {
        sender_id: user_id(&headers),
        receiver_email: email,
        group_id,
    };
    client.invites().send(&invite, auth_header(&headers)).await?;
    Ok(Redirect::to(&format!("/groups/members/{group_id}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::test_support::spawn_backend;
    use axum::http::{
        header::{COOKIE, LOCATION},
        HeaderValue, StatusCode,
    };
    use axum::response::IntoResponse;
    use serde_json::Value;

    fn client_for(base_url: &str) -> ApiClient {
        ApiClient::new(ApiConfig::new(base_url))
    }

    fn session_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("token=abc; user_id=11"),
        );
        headers
    }

    #[tokio::test]
    async fn load_fetches_the_group() {
        let (base_url, requests) = spawn_backend(
            StatusCode::OK,
            r#"{"id":4,"name":"flat","description":"rent","owner_id":2}"#,
        )
        .await;
        let client = client_for(&base_url);

        let Json(group) = send_load(State(client), Some(Path(4)), session_headers())
            .await
            .unwrap();

        assert_eq!(group.id, 4);
        let recorded = requests.lock().unwrap();
        assert_eq!(recorded[0].path, "group/4");
        assert_eq!(recorded[0].authorization.as_deref(), Some("Bearer abc"));
    }

    #[tokio::test]
    async fn action_requires_email() {
        let (base_url, requests) = spawn_backend(StatusCode::OK, "").await;
        let client = client_for(&base_url);

        let err = send_action(
            State(client),
            Some(Path(4)),
            session_headers(),
            Form(InviteForm { email: None }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Receiver Email is required");
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn action_sends_invite_and_redirects_to_members() {
        let (base_url, requests) = spawn_backend(StatusCode::OK, "").await;
        let client = client_for(&base_url);

        let form = InviteForm {
            email: Some("friend@example.com".to_string()),
        };
        let redirect = send_action(State(client), Some(Path(4)), session_headers(), Form(form))
            .await
            .unwrap();

        let response = redirect.into_response();
        assert!(response.status().is_redirection());
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/groups/members/4");

        let recorded = requests.lock().unwrap();
        assert_eq!(recorded[0].path, "invite");
        let sent: Value = serde_json::from_str(&recorded[0].body).unwrap();
        assert_eq!(sent["sender_id"], 11);
        assert_eq!(sent["receiver_email"], "friend@example.com");
        assert_eq!(sent["group_id"], 4);
    }
}
