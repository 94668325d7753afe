use serde::de::DeserializeOwned;
use shared::{
    config::InsightConfig,
    error::{AppError, AppResult},
};

use self::model::{GenerateContentRequest, GenerateContentResponse};

pub mod model;

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(config: &InsightConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint, self.model
        )
    }

    pub async fn generate_text(&self, prompt: String) -> AppResult<String> {
        self.generate_content(GenerateContentRequest::from_prompt(prompt))
            .await
    }

    pub async fn generate_json<T: DeserializeOwned>(
        &self,
        prompt: String,
        schema: serde_json::Value,
    ) -> AppResult<T> {
        let text = self
            .generate_content(GenerateContentRequest::from_prompt(prompt).with_json_schema(schema))
            .await?;
        serde_json::from_str(&text).map_err(|e| {
            AppError::ExternalServiceError(format!("malformed JSON from text service: {e}"))
        })
    }

    async fn generate_content(&self, request: GenerateContentRequest) -> AppResult<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::ExternalServiceError("GEMINI_API_KEY is not configured".into())
        })?;

        let res = self
            .http
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("request failed: {e}")))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "text service returned {status}: {body}"
            )));
        }

        let body: GenerateContentResponse = res
            .json()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("unreadable response: {e}")))?;

        body.text()
            .ok_or_else(|| AppError::ExternalServiceError("text service returned no text".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> InsightConfig {
        InsightConfig {
            api_key: api_key.map(String::from),
            model: "gemini-test".into(),
            // 何も待ち受けていないポート
            endpoint: "http://127.0.0.1:9/".into(),
        }
    }

    #[test]
    fn url_names_the_model() {
        let client = GeminiClient::new(&config(Some("k")));
        assert_eq!(
            client.url(),
            "http://127.0.0.1:9/v1beta/models/gemini-test:generateContent"
        );
    }

    #[tokio::test]
    async fn missing_api_key_fails_without_network() {
        let client = GeminiClient::new(&config(None));
        let res = client.generate_text("hi".into()).await;
        assert!(matches!(res, Err(AppError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn connection_refused_is_an_external_error() {
        let client = GeminiClient::new(&config(Some("k")));
        let res = client.generate_text("hi".into()).await;
        assert!(matches!(res, Err(AppError::ExternalServiceError(_))));
    }
}
