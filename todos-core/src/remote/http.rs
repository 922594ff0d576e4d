//! HTTP+JSON implementation of [`RemoteStore`]

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use super::RemoteStore;
use crate::config::Config;
use crate::error::{RemoteError, Result};
use crate::model::{TodoDraft, TodoId, TodoItem};

/// Talks to a json-server style `/todos` collection
#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: Client,
    config: Config,
}

impl HttpRemote {
    pub fn new(config: Config) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Use a preconfigured client (proxies, TLS roots, ...)
    pub fn with_client(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    /// Send a request, failing on transport errors and non-2xx statuses
    async fn send(&self, method: Method, url: String, request: RequestBuilder) -> Result<Vec<u8>> {
        tracing::debug!(%method, %url, "Sending request");

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%method, %url, %status, "Request rejected");
            return Err(RemoteError::Status {
                method,
                url,
                status,
            });
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: String,
        request: RequestBuilder,
    ) -> Result<T> {
        let body = self.send(method, url.clone(), request).await?;
        serde_json::from_slice(&body).map_err(|source| RemoteError::Decode { url, source })
    }
}

#[async_trait]
impl RemoteStore for HttpRemote {
    async fn list(&self) -> Result<Vec<TodoItem>> {
        let url = self.config.collection_url();
        let request = self.client.get(&url);
        self.send_json(Method::GET, url, request).await
    }

    async fn create(&self, draft: &TodoDraft) -> Result<TodoItem> {
        let url = self.config.collection_url();
        let request = self.client.post(&url).json(draft);
        self.send_json(Method::POST, url, request).await
    }

    async fn update(&self, id: &TodoId, fields: &TodoDraft) -> Result<TodoItem> {
        let url = self.config.item_url(id);
        let request = self.client.put(&url).json(fields);
        self.send_json(Method::PUT, url, request).await
    }

    async fn delete(&self, id: &TodoId) -> Result<()> {
        let url = self.config.item_url(id);
        let request = self.client.delete(&url);
        self.send(Method::DELETE, url, request).await?;
        Ok(())
    }
}
