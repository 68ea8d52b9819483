use async_trait::async_trait;
use reibun_core::ports::ExampleSource;
use reibun_core::types::{ExampleQuery, FetchOutcome};

use crate::response::SearchResponse;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Malformed response body: {0}")]
    Body(#[from] serde_json::Error),
}

/// Sentence search against the Tatoeba API.
#[derive(Clone)]
pub struct TatoebaClient {
    client: reqwest::Client,
    search_url: String,
}

impl TatoebaClient {
    pub fn new(search_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            search_url,
        }
    }

    /// One exact-match search. The `=` prefix pins the query to
    /// sentences containing the word verbatim rather than stemmed.
    async fn search(&self, query: &ExampleQuery) -> Result<SearchResponse, FetchError> {
        let response = self
            .client
            .get(&self.search_url)
            .query(&[
                ("query", format!("={}", query.word())),
                ("from", "jpn".to_string()),
                ("to", query.language.code().to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await?;
        parse_body(&body)
    }
}

fn parse_body(body: &str) -> Result<SearchResponse, FetchError> {
    Ok(serde_json::from_str(body)?)
}

fn outcome_from_response(word: &str, response: SearchResponse) -> FetchOutcome {
    let examples = response.into_examples();
    if examples.is_empty() {
        FetchOutcome::NotFound {
            word: word.to_string(),
        }
    } else {
        FetchOutcome::Found(examples)
    }
}

#[async_trait]
impl ExampleSource for TatoebaClient {
    async fn fetch(&self, query: &ExampleQuery) -> FetchOutcome {
        match self.search(query).await {
            Ok(response) => outcome_from_response(query.word(), response),
            Err(error) => {
                tracing::warn!("tatoeba search for '{}' failed: {error}", query.word());
                FetchOutcome::ServiceError(error.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use reibun_core::types::TargetLanguage;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    #[test]
    fn test_usable_page_becomes_found() {
        let body = r#"{
            "results": [{
                "text": "猫が好きです。",
                "transcriptions": [{ "needsReview": false }],
                "translations": [[{ "text": "I like cats." }]]
            }]
        }"#;

        let response = parse_body(body).unwrap();
        let outcome = outcome_from_response("猫", response);

        match outcome {
            FetchOutcome::Found(examples) => {
                assert_eq!(examples.len(), 1);
                assert_eq!(examples[0].japanese(), "猫が好きです。");
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_page_becomes_not_found() {
        let response = parse_body(r#"{ "results": [] }"#).unwrap();

        assert_eq!(
            outcome_from_response("存在しない語", response),
            FetchOutcome::NotFound {
                word: "存在しない語".to_string()
            }
        );
    }

    #[test]
    fn test_page_with_only_unusable_entries_becomes_not_found() {
        let body = r#"{
            "results": [{
                "text": "猫が好きです。",
                "transcriptions": [{ "needsReview": true }],
                "translations": [[{ "text": "I like cats." }]]
            }]
        }"#;

        let response = parse_body(body).unwrap();

        assert!(matches!(
            outcome_from_response("猫", response),
            FetchOutcome::NotFound { .. }
        ));
    }

    #[test]
    fn test_unparseable_body_is_an_error() {
        assert!(matches!(
            parse_body("<html>down for maintenance</html>"),
            Err(FetchError::Body(_))
        ));
    }

    #[tokio::test]
    async fn test_error_status_becomes_service_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request).await;
            let _ = stream
                .write_all(
                    b"HTTP/1.1 503 Service Unavailable\r\n\
                      content-length: 0\r\nconnection: close\r\n\r\n",
                )
                .await;
        });

        let client = TatoebaClient::new(format!("http://{addr}"));
        let query = ExampleQuery::new("猫", TargetLanguage::English).unwrap();

        match client.fetch(&query).await {
            FetchOutcome::ServiceError(reason) => assert!(reason.contains("503")),
            other => panic!("expected ServiceError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_becomes_service_error() {
        // Bind then drop to get a port nothing is listening on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = TatoebaClient::new(format!("http://{addr}"));
        let query = ExampleQuery::new("猫", TargetLanguage::English).unwrap();

        assert!(matches!(
            client.fetch(&query).await,
            FetchOutcome::ServiceError(_)
        ));
    }
}
