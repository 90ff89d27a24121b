use super::VisionProvider;
use crate::gallery::Category;
use crate::suggest::error::SuggestError;
use crate::suggest::types::{RawSuggestion, SuggestRequest};
use async_trait::async_trait;
use serde::Serialize;
use url::Url;

/// Client for the external vision endpoint. One POST per analysis; no
/// retries, the caller decides whether to resubmit.
pub struct HttpVisionProvider {
    client: reqwest::Client,
    endpoint: Url,
    api_key: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeRequest<'a> {
    image_base64: &'a str,
    filename: &'a str,
    prompt: String,
}

impl HttpVisionProvider {
    pub fn new(
        endpoint: Url,
        api_key: Option<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, SuggestError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SuggestError::Network(e.to_string()))?;
        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }

    /// Fixed analysis prompt enumerating the category registry so the
    /// model can only answer in terms the validator accepts.
    fn prompt() -> String {
        let categories: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        format!(
            "Analyze this photo from Ko Lake Villa, a lakefront boutique villa on \
             Koggala Lake in Ahangama, Sri Lanka. Choose the single best category \
             from: {}. Respond as JSON with suggestedCategory, title, description, \
             tags and confidence.",
            categories.join(", ")
        )
    }
}

#[async_trait]
impl VisionProvider for HttpVisionProvider {
    async fn analyze(&self, request: &SuggestRequest) -> Result<RawSuggestion, SuggestError> {
        let Some(api_key) = &self.api_key else {
            return Err(SuggestError::MissingCredentials);
        };

        let payload = AnalyzeRequest {
            image_base64: &request.image_base64,
            filename: &request.filename,
            prompt: Self::prompt(),
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SuggestError::Network(format!(
                "vision endpoint answered {}",
                status
            )));
        }

        response
            .json::<RawSuggestion>()
            .await
            .map_err(|e| SuggestError::BadResponse(e.to_string()))
    }

    fn name(&self) -> &str {
        "HTTP vision provider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_enumerates_the_whole_registry() {
        let prompt = HttpVisionProvider::prompt();
        for category in Category::ALL {
            assert!(prompt.contains(category.as_str()), "{} missing", category);
        }
    }

    #[tokio::test]
    async fn missing_key_is_reported_without_a_network_call() {
        let provider = HttpVisionProvider::new(
            Url::parse("http://127.0.0.1:1/analyze").unwrap(),
            None,
            std::time::Duration::from_secs(1),
        )
        .unwrap();
        let request = SuggestRequest {
            filename: "pool.jpg".to_string(),
            image_base64: String::new(),
            file_size: 0,
            modified_epoch: 0,
        };
        let err = provider.analyze(&request).await.unwrap_err();
        assert!(matches!(err, SuggestError::MissingCredentials));
    }
}
