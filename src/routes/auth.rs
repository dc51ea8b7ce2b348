use axum::{
    extract::{Form, State},
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Redirect},
};
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::AppError;
use crate::models::{Credentials, Session};

#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CredentialsForm {
    fn into_credentials(self) -> Result<Credentials, AppError> {
        let email = self
            .email
            .filter(|email| !email.is_empty())
            .ok_or_else(|| AppError::Validation("Email is required".to_string()))?;
        let password = self
            .password
            .filter(|password| !password.is_empty())
            .ok_or_else(|| AppError::Validation("Password is required".to_string()))?;
        Ok(Credentials { email, password })
    }
}

// Session cookies read back by auth::auth_header and auth::user_id.
fn session_response(session: Session) -> impl IntoResponse {
    let cookies = AppendHeaders([
        (
            SET_COOKIE,
            format!("token={}; Path=/; HttpOnly", session.token),
        ),
        (
            SET_COOKIE,
            format!("user_id={}; Path=/; HttpOnly", session.user_id),
        ),
    ]);
    (cookies, Redirect::to("/groups"))
}

pub async fn register(
    State(client): State<ApiClient>,
    Form(form): Form<CredentialsForm>,
) -> Result<impl IntoResponse, AppError> {
    let credentials = form.into_credentials()?;
    let session = client.users().register(&credentials).await?;
    Ok(session_response(session))
}

pub async fn login(
    State(client): State<ApiClient>,
    Form(form): Form<CredentialsForm>,
) -> Result<impl IntoResponse, AppError> {
    let credentials = form.into_credentials()?;
    let session = client.users().login(&credentials).await?;
    Ok(session_response(session))
}
