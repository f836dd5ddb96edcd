use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument, warn};
use url::Url;

use super::{Gateway, GatewayError};
use crate::domain::{Contact, ContactFields, ContactId};

/// REST gateway: `GET/POST {base}`, `PUT/DELETE {base}/{id}`, JSON bodies.
///
/// No authentication, query parameters or retries. Without a configured
/// timeout a hung request stays pending.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: Url,
}

/// Only the id of an echoed record is needed.
#[derive(Deserialize)]
struct Echo {
    id: ContactId,
}

impl HttpGateway {
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, base_url })
    }

    /// `{base}/{id}`, tolerating a trailing slash on the base.
    pub fn item_url(&self, id: &ContactId) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::Transport(format!("not a base url: {}", self.base_url)))?
            .pop_if_empty()
            .push(&id.to_string());
        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder, url: &Url) -> Result<reqwest::Response, GatewayError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        warn!(status = status.as_u16(), url = %url, "Gateway rejected request");
        Err(GatewayError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    #[instrument(skip(self), fields(url = %self.base_url))]
    async fn list(&self) -> Result<Vec<Contact>, GatewayError> {
        debug!("Sending request");
        let response = self.send(self.client.get(self.base_url.clone()), &self.base_url).await?;
        Ok(response.json::<Vec<Contact>>().await?)
    }

    #[instrument(skip(self, fields), fields(url = %self.base_url))]
    async fn create(&self, fields: ContactFields) -> Result<Option<ContactId>, GatewayError> {
        debug!("Sending request");
        let response = self
            .send(self.client.post(self.base_url.clone()).json(&fields), &self.base_url)
            .await?;
        // Services that answer without echoing the record still count as success.
        let body = response.bytes().await?;
        Ok(serde_json::from_slice::<Echo>(&body).ok().map(|echo| echo.id))
    }

    #[instrument(skip(self, fields), fields(contact_id = %id))]
    async fn update(&self, id: ContactId, fields: ContactFields) -> Result<(), GatewayError> {
        debug!("Sending request");
        let url = self.item_url(&id)?;
        self.send(self.client.put(url.clone()).json(&fields), &url).await?;
        Ok(())
    }

    #[instrument(skip(self), fields(contact_id = %id))]
    async fn delete(&self, id: ContactId) -> Result<(), GatewayError> {
        debug!("Sending request");
        let url = self.item_url(&id)?;
        self.send(self.client.delete(url.clone()), &url).await?;
        Ok(())
    }
}
