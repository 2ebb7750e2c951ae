//! User account client
//!
//! Typed access to the `/users` endpoints. Only password reset is exposed;
//! sign-up and sign-in stay with the session layer, which is outside this
//! crate.

use serde_json::json;

use crate::api::{ApiClient, RequestOptions, ResponseError};

use super::ResetReceipt;

/// Client for the `/users` endpoints
#[derive(Debug, Clone)]
pub struct UserClient {
    api: ApiClient,
}

impl UserClient {
    /// Creates a user client sharing the given API client
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Changes the password for the account identified by `email`.
    ///
    /// The backend rejects a wrong current password with 401 and an unknown
    /// email with 404; both surface as `ResponseError::Api`.
    pub async fn reset_password(
        &self,
        email: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<ResetReceipt, ResponseError> {
        let body = json!({
            "email": email,
            "currentPassword": current_password,
            "newPassword": new_password,
        });
        let options = RequestOptions::new().with_body(body);
        self.api
            .put("/users/reset-password", options)
            .await
            .into_json()
    }
}
