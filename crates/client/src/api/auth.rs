//! `/auth` endpoints.

use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::models::{LoginRequest, LoginResponse, Profile};

/// `POST /auth/login`. Sent without credentials even on an authenticated
/// client.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> ClientResult<LoginResponse> {
    client
        .anonymous()
        .post("/auth/login", &LoginRequest { email, password })
        .await
}

/// `GET /auth/profile` for the client's token.
pub async fn profile(client: &ApiClient) -> ClientResult<Profile> {
    client.get("/auth/profile").await
}
