use super::types::Sentence;
use crate::config::Config;
use crate::error::AnnotateError;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The seam between the preprocessor and the external tagger. Implemented by
/// the HTTP sidecar client in production and by scripted fakes in tests.
#[async_trait]
pub trait Annotator: Send + Sync {
    async fn annotate(&self, text: &str) -> Result<Vec<Sentence>, AnnotateError>;
}

#[derive(Serialize)]
struct AnnotateRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct AnnotateResponse {
    sentences: Vec<Sentence>,
}

/// Client for a VnCoreNLP-style annotation sidecar.
pub struct HttpAnnotator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAnnotator {
    /// Fails fast when the configured endpoint is empty or unparsable, so a
    /// misconfigured process refuses to start instead of failing per query.
    pub fn from_config(config: &Config) -> Result<Self, AnnotateError> {
        let endpoint = config.annotator_url.trim();
        if endpoint.is_empty() {
            return Err(AnnotateError::Misconfigured(
                "annotator endpoint is empty".to_string(),
            ));
        }
        if let Err(err) = reqwest::Url::parse(endpoint) {
            return Err(AnnotateError::Misconfigured(format!(
                "invalid annotator endpoint '{}': {}",
                endpoint, err
            )));
        }

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl Annotator for HttpAnnotator {
    async fn annotate(&self, text: &str) -> Result<Vec<Sentence>, AnnotateError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnnotateRequest { text })
            .send()
            .await
            .map_err(|err| AnnotateError::Unavailable(err.to_string()))?;

        if !response.status().is_success() {
            return Err(AnnotateError::Unavailable(format!(
                "annotator returned status {}",
                response.status()
            )));
        }

        let decoded: AnnotateResponse = response
            .json()
            .await
            .map_err(|err| AnnotateError::Unavailable(format!("bad annotator payload: {}", err)))?;

        Ok(decoded.sentences)
    }
}
