use api_types::{transaction::Transaction, user::User, wallet::WalletBalance};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("not found")]
    NotFound,
    #[error("server error: {0}")]
    Server(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|err| AppError::BaseUrl(err.to_string()))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    pub async fn user(&self) -> std::result::Result<User, ClientError> {
        self.get_json("user").await
    }

    pub async fn transactions(&self) -> std::result::Result<Vec<Transaction>, ClientError> {
        self.get_json("transactions").await
    }

    pub async fn wallet_balance(&self) -> std::result::Result<WalletBalance, ClientError> {
        self.get_json("wallet").await
    }

    /// Plain GET against the configured base endpoint. No request body, no
    /// auth headers, no retries; any non-success status or decode failure is
    /// this read's failure.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> std::result::Result<T, ClientError> {
        let endpoint = self
            .base_url
            .join(path)
            .map_err(|err| ClientError::Server(format!("invalid base_url: {err}")))?;

        let res = self
            .http
            .get(endpoint)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        if res.status().is_success() {
            return res.json::<T>().await.map_err(ClientError::Transport);
        }

        let status = res.status();
        let body = res
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());

        let err = match status.as_u16() {
            404 => ClientError::NotFound,
            _ => ClientError::Server(body),
        };
        Err(err)
    }
}
