//! Turning an HTTP response into a fetch outcome.

use crate::domain::error::{PagerError, Result};
use crate::domain::Item;

/// Result of one fetch, as seen by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The endpoint returned a list of items.
    Success(Vec<Item>),
    /// Transport, status or payload failure, already formatted for display.
    Failure(String),
}

impl FetchOutcome {
    /// Maps a response status and body to an outcome.
    ///
    /// - 2xx with a JSON array of `{id, name, ..}` records is a success; any
    ///   extra fields are dropped.
    /// - Any other status is a failure naming the status code, followed by the
    ///   body text when there is one. Zellij reports transport errors this way
    ///   too, with the error text as body.
    /// - A 2xx body that does not parse is a failure carrying the parse error.
    ///
    /// # Example
    ///
    /// ```
    /// use item_pager::fetch::FetchOutcome;
    /// use item_pager::Item;
    ///
    /// let ok = FetchOutcome::from_response(200, br#"[{"id": 1, "name": "Bus", "age": 3}]"#);
    /// assert_eq!(ok, FetchOutcome::Success(vec![Item::new(1, "Bus")]));
    ///
    /// let missing = FetchOutcome::from_response(404, b"");
    /// assert_eq!(missing, FetchOutcome::Failure("Request failed with status code 404".into()));
    /// ```
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let result = check_status(status, body).and_then(|()| parse_items(body));
        match result {
            Ok(items) => {
                tracing::debug!(status = status, item_count = items.len(), "fetch succeeded");
                Self::Success(items)
            }
            Err(e) => {
                tracing::debug!(status = status, error = %e, "fetch failed");
                Self::Failure(e.to_string())
            }
        }
    }

    /// Returns `true` for [`FetchOutcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

fn check_status(status: u16, body: &[u8]) -> Result<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let detail = String::from_utf8_lossy(body);
    let detail = detail.trim();
    let message = if detail.is_empty() {
        format!("Request failed with status code {status}")
    } else {
        format!("Request failed with status code {status}: {detail}")
    };
    Err(PagerError::Fetch(message))
}

/// Parses a JSON array of item records.
///
/// # Errors
///
/// Returns [`PagerError::Payload`] if the body is not valid JSON or any record
/// lacks an integer `id` or a string `name`.
pub fn parse_items(body: &[u8]) -> Result<Vec<Item>> {
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_keeps_order_and_drops_extra_fields() {
        let body = br#"[
            {"id": 2, "name": "Car", "username": "c"},
            {"id": 1, "name": "Bus", "website": "bus.example"}
        ]"#;
        assert_eq!(
            FetchOutcome::from_response(200, body),
            FetchOutcome::Success(vec![Item::new(2, "Car"), Item::new(1, "Bus")])
        );
    }

    #[test]
    fn empty_array_is_a_success() {
        assert_eq!(FetchOutcome::from_response(204, b"[]"), FetchOutcome::Success(vec![]));
    }

    #[test]
    fn error_status_includes_body_text() {
        let outcome = FetchOutcome::from_response(400, b"Network Error\n");
        assert_eq!(
            outcome,
            FetchOutcome::Failure("Request failed with status code 400: Network Error".into())
        );
    }

    #[test]
    fn malformed_payload_is_a_failure() {
        let outcome = FetchOutcome::from_response(200, b"{\"items\": []}");
        match outcome {
            FetchOutcome::Failure(message) => assert!(message.starts_with("Malformed payload")),
            FetchOutcome::Success(_) => panic!("object payload must not parse as items"),
        }
    }

    #[test]
    fn string_id_is_rejected() {
        assert!(parse_items(br#"[{"id": "1", "name": "Bus"}]"#).is_err());
    }
}
