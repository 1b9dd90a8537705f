//! Wire types for the news service.
//!
//! Field names follow the service's JSON contract (`titulo`, `contenido`, ...)
//! and are renamed into English on the Rust side.

use serde::{Deserialize, Serialize};

/// One article as returned by `GET /noticias`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RawArticle {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "contenido", default)]
    pub paragraphs: Vec<String>,
    pub link: String,
}

/// Body of `POST /resumir_batch`.
#[derive(Serialize, Debug)]
pub(crate) struct SummarizeBatchRequest<'a> {
    pub contenidos: &'a [String],
}

/// The batch endpoint answers with a bare array, but the upstream summarizer
/// wraps it in `{ "resumenes": [...] }`. Accept both.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum SummarizeBatchResponse {
    Bare(Vec<String>),
    Wrapped { resumenes: Vec<String> },
}

impl SummarizeBatchResponse {
    pub fn into_summaries(self) -> Vec<String> {
        match self {
            SummarizeBatchResponse::Bare(v) => v,
            SummarizeBatchResponse::Wrapped { resumenes } => resumenes,
        }
    }
}

/// Body of `POST /resumir`.
#[derive(Serialize, Debug)]
pub(crate) struct SummarizeRequest<'a> {
    pub contenido: &'a str,
}

#[derive(Deserialize, Debug)]
pub(crate) struct SummarizeResponse {
    pub resumen: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_article_uses_service_field_names() {
        let json = r#"{"titulo":"Ola de calor","contenido":["p1","p2"],"link":"https://example.com/a"}"#;
        let article: RawArticle = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "Ola de calor");
        assert_eq!(article.paragraphs, vec!["p1", "p2"]);
        assert_eq!(article.link, "https://example.com/a");
    }

    #[test]
    fn test_raw_article_missing_content_is_empty() {
        let json = r#"{"titulo":"t","link":"l"}"#;
        let article: RawArticle = serde_json::from_str(json).unwrap();
        assert!(article.paragraphs.is_empty());
    }

    #[test]
    fn test_batch_request_serializes_contenidos() {
        let texts = vec!["a".to_string(), "b".to_string()];
        let body = serde_json::to_value(SummarizeBatchRequest { contenidos: &texts }).unwrap();
        assert_eq!(body, serde_json::json!({"contenidos": ["a", "b"]}));
    }

    #[test]
    fn test_batch_response_accepts_both_shapes() {
        let bare: SummarizeBatchResponse = serde_json::from_str(r#"["x","y"]"#).unwrap();
        assert_eq!(bare.into_summaries(), vec!["x", "y"]);

        let wrapped: SummarizeBatchResponse =
            serde_json::from_str(r#"{"resumenes":["x"]}"#).unwrap();
        assert_eq!(wrapped.into_summaries(), vec!["x"]);
    }
}
