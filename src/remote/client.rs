//! REST client for the ATS backend.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{HiretrackError, Result};
use crate::types::{EntityKind, OptionValue};

use super::{OptionsSource, PageRequest, PageResponse, RecordSource};

/// Shared HTTP transport for all entity clients.
pub struct RestClient {
    http: reqwest::Client,
    base: Url,
}

impl RestClient {
    /// Create a client from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url = config.base_url()?;
        let base = Url::parse(&base_url)
            .map_err(|e| HiretrackError::InvalidUrl(base_url.clone(), e.to_string()))?;

        let mut headers = HeaderMap::new();
        if let Some(token) = config.api_token() {
            let mut value =
                HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                    .map_err(|_| HiretrackError::Auth("API token contains invalid header characters".to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.backend.timeout))
            .build()?;

        Ok(Self { http, base })
    }

    /// Build the collection URL for an entity, e.g. `{base}/candidates`.
    fn entity_url(&self, entity: EntityKind) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| {
                HiretrackError::InvalidUrl(self.base.to_string(), "cannot be a base".to_string())
            })?
            .pop_if_empty()
            .push(entity.as_str());
        Ok(url)
    }

    /// Typed paged access for one entity.
    pub fn entity<R>(self: &Arc<Self>, entity: EntityKind) -> EntityClient<R> {
        EntityClient {
            client: Arc::clone(self),
            entity,
            _marker: PhantomData,
        }
    }
}

/// Paged record source for a single entity kind.
pub struct EntityClient<R> {
    client: Arc<RestClient>,
    entity: EntityKind,
    _marker: PhantomData<fn() -> R>,
}

impl<R> EntityClient<R> {
    pub fn entity(&self) -> EntityKind {
        self.entity
    }
}

fn check_status(status: StatusCode, entity: EntityKind) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(HiretrackError::Auth(format!(
            "backend rejected credentials for '{}' ({})",
            entity, status
        )));
    }
    Err(HiretrackError::Api(format!(
        "backend returned {} for '{}'",
        status, entity
    )))
}

#[async_trait]
impl<R> RecordSource<R> for EntityClient<R>
where
    R: DeserializeOwned + Send + Sync,
{
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResponse<R>> {
        let mut url = self.client.entity_url(self.entity)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("pageNumber", &request.page_number.to_string());
            query.append_pair("pageSize", &request.page_size.to_string());
            if let Some(term) = &request.search_term {
                query.append_pair("searchTerm", term);
            }
        }

        tracing::debug!(
            entity = %self.entity,
            page = request.page_number,
            size = request.page_size,
            searched = request.search_term.is_some(),
            "fetching page"
        );

        let response = self.client.http.get(url).send().await?;
        check_status(response.status(), self.entity)?;
        let page: PageResponse<R> = response.json().await?;
        Ok(page)
    }
}

#[async_trait]
impl<R> OptionsSource for EntityClient<R>
where
    R: Send + Sync,
{
    async fn fetch_options(&self, field: &str) -> Result<Vec<OptionValue>> {
        let mut url = self.client.entity_url(self.entity)?;
        let url_str = url.to_string();
        url.path_segments_mut()
            .map_err(|_| {
                HiretrackError::InvalidUrl(url_str, "cannot be a base".to_string())
            })?
            .push("options")
            .push(field);

        tracing::debug!(entity = %self.entity, field, "fetching master-data options");

        let response = self.client.http.get(url).send().await?;
        check_status(response.status(), self.entity)?;
        let options: Vec<OptionValue> = response.json().await?;
        Ok(options)
    }
}
