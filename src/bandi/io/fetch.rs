use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::bandi::error::{Result, ToolError};
use crate::bandi::model::Bando;

/// Downloads the dataset served at `url` and decodes it into records.
///
/// A single GET is issued; whatever the endpoint returns in that response is
/// treated as the complete result set.
#[instrument(level = "info", skip(client))]
pub async fn fetch_bandi(client: &Client, url: &str) -> Result<Vec<Bando>> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ToolError::Request {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await?;
    debug!(bytes = body.len(), "response body received");

    let records = parse_bandi(&body)?;
    info!(record_count = records.len(), "decoded records from endpoint");
    Ok(records)
}

/// Decodes a JSON array of announcement objects.
pub fn parse_bandi(body: &str) -> Result<Vec<Bando>> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bandi::error::ErrorKind;

    #[test]
    fn parses_array_of_objects() {
        let body = r#"[
            {"codice_bando": "A1", "titolo_bando": "Primo", ":id": "row-1"},
            {"codice_bando": "A2", "presentato": null}
        ]"#;

        let records = parse_bandi(body).expect("records parsed");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Primo");
        assert_eq!(records[1].code, "A2");
        assert_eq!(records[1].submitted, "");
    }

    #[test]
    fn truncated_body_is_a_deserialization_error() {
        let error = parse_bandi(r#"[{"codice_bando": "A1""#).expect_err("truncated JSON");
        assert_eq!(error.kind(), ErrorKind::Deserialization);
    }

    #[test]
    fn top_level_object_is_rejected() {
        let error = parse_bandi(r#"{"codice_bando": "A1"}"#).expect_err("not an array");
        assert!(matches!(error, ToolError::Deserialization(_)));
    }
}
