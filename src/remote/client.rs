use std::time::{Duration, Instant};

use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::config::RemoteConfig;
use crate::error::StoreError;
use crate::listing::{Draft, Record, RecordId};
use crate::remote::endpoint::ResourceEndpoint;

/// Single-shot HTTP calls against the listing collection.
///
/// Holds no state besides the connection pool. Every method is one round
/// trip; failures are returned, never retried.
#[derive(Clone)]
pub struct ResourceClient {
    client: Client,
    endpoint: ResourceEndpoint,
}

impl ResourceClient {
    pub fn new(endpoint: ResourceEndpoint, remote: &RemoteConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(remote.connect_timeout_seconds)));
        if let Some(seconds) = remote.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(u64::from(seconds)));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &ResourceEndpoint {
        &self.endpoint
    }

    /// `GET /{resource}`
    pub async fn fetch_all(&self) -> Result<Vec<Record>, StoreError> {
        let url = self.endpoint.collection().clone();
        let response = self.send(self.client.get(url.clone()), &url).await?;
        decode(response, &url).await
    }

    /// `POST /{resource}`
    pub async fn insert(&self, draft: &Draft) -> Result<Record, StoreError> {
        let url = self.endpoint.collection().clone();
        let response = self
            .send(self.client.post(url.clone()).json(draft), &url)
            .await?;
        decode(response, &url).await
    }

    /// `PUT /{resource}/{id}` with the full record as body.
    pub async fn replace(&self, record: &Record) -> Result<Record, StoreError> {
        let url = self.endpoint.item(&record.id);
        let response = self
            .send(self.client.put(url.clone()).json(record), &url)
            .await?;
        decode(response, &url).await
    }

    /// `DELETE /{resource}/{id}`. The response body is ignored.
    pub async fn remove(&self, id: &RecordId) -> Result<(), StoreError> {
        let url = self.endpoint.item(id);
        self.send(self.client.delete(url.clone()), &url).await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder, url: &Url) -> Result<Response, StoreError> {
        let started = Instant::now();
        let response = request.send().await.map_err(|source| {
            tracing::warn!(url = %url, error = %source, "Request failed");
            StoreError::Transport {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            "Response received"
        );

        if !status.is_success() {
            return Err(StoreError::Response {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(response: Response, url: &Url) -> Result<T, StoreError> {
    response.json::<T>().await.map_err(|source| StoreError::Decode {
        url: url.to_string(),
        source,
    })
}
