// src/services/iam.rs
use reqwest::{Client, header};
use serde::Deserialize;

use crate::error::AppError;

pub const APIKEY_GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange the API key for a short-lived bearer token.
///
/// A fresh token is fetched on every call; nothing is cached. Non-2xx
/// responses fail immediately with [`AppError::UpstreamAuth`].
pub async fn fetch_iam_token(http: &Client, iam_url: &str, api_key: &str) -> Result<String, AppError> {
    let response = http
        .post(iam_url)
        .header(header::ACCEPT, "application/json")
        .form(&[("grant_type", APIKEY_GRANT_TYPE), ("apikey", api_key)])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(AppError::UpstreamAuth {
            status: status.as_u16(),
            body,
        });
    }

    let token: TokenResponse = serde_json::from_str(&body)
        .map_err(|e| AppError::ResponseShape(format!("token response: {e}")))?;

    tracing::debug!("obtained IAM token");
    Ok(token.access_token)
}
