//! Loader for the parameter editor: fetches the parameter list and the model
//! from the backend and hands them to the editor.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::protocol::{Model, Parameter, MODEL_PATH, PARAMS_PATH};
use tracing::{debug, error, info};
use url::Url;

pub mod config;
pub mod error;

pub use config::{load_config, EditorConfig, DEFAULT_API_URL};
pub use error::LoadError;

/// Source of the two editor inputs.
#[async_trait]
pub trait ParamsBackend: Send + Sync {
    async fn fetch_params(&self) -> Result<Vec<Parameter>, LoadError>;
    async fn fetch_model(&self) -> Result<Model, LoadError>;
}

pub struct HttpParamsBackend {
    http: Client,
    base_url: Url,
}

impl HttpParamsBackend {
    pub fn new(api_url: &str) -> Result<Self, LoadError> {
        Self::with_client(Client::new(), api_url)
    }

    pub fn with_client(http: Client, api_url: &str) -> Result<Self, LoadError> {
        Ok(Self {
            http,
            base_url: config::parse_base_url(api_url)?,
        })
    }

    pub fn from_config(config: &EditorConfig) -> Result<Self, LoadError> {
        Self::new(&config.api_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LoadError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|err| LoadError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: err.to_string(),
            })?;
        let endpoint = url.to_string();
        debug!(%endpoint, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| LoadError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status { endpoint, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| LoadError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;
        serde_json::from_slice(&body).map_err(|source| LoadError::Malformed { endpoint, source })
    }
}

#[async_trait]
impl ParamsBackend for HttpParamsBackend {
    async fn fetch_params(&self) -> Result<Vec<Parameter>, LoadError> {
        self.get_json(PARAMS_PATH).await
    }

    async fn fetch_model(&self) -> Result<Model, LoadError> {
        self.get_json(MODEL_PATH).await
    }
}

/// Result of the startup load. On failure `params` and `model` are empty and
/// `error` says why; the editor is still built from the empty inputs.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub params: Vec<Parameter>,
    pub model: Model,
    pub error: Option<LoadError>,
}

/// Startup load phase as seen by a front end. The outcome itself is consumed
/// when the editor is built, so `Ready` carries nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Requests both inputs concurrently; the first failure fails the whole load.
pub async fn load_inputs(
    backend: &dyn ParamsBackend,
) -> Result<(Vec<Parameter>, Model), LoadError> {
    futures::try_join!(backend.fetch_params(), backend.fetch_model())
}

/// Like [`load_inputs`] but never fails: errors are logged and replaced by
/// empty defaults.
pub async fn load_or_default(backend: &dyn ParamsBackend) -> LoadOutcome {
    match load_inputs(backend).await {
        Ok((params, model)) => {
            info!(
                params = params.len(),
                values = model.param_values.len(),
                "loaded parameters and model"
            );
            LoadOutcome {
                params,
                model,
                error: None,
            }
        }
        Err(err) => {
            error!(endpoint = err.endpoint(), "failed to load parameters and model: {err}");
            LoadOutcome {
                error: Some(err),
                ..LoadOutcome::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
