use serde::Deserialize;

/// Errors surfaced by API calls.
///
/// Status-specific variants carry the server's `message` verbatim so the
/// page can show it; transport and decode failures get generic wording.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (DNS, refused, timeout).
    #[error("Could not reach the server")]
    Transport(#[source] reqwest::Error),

    /// 401 from the server: missing, expired or rejected token.
    #[error("{0}")]
    Unauthorized(String),

    /// 403 from the server. The message names the modules that may access
    /// the resource.
    #[error("{0}")]
    Forbidden(String),

    /// 404 from the server.
    #[error("{0}")]
    NotFound(String),

    /// Any other non-2xx status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A 2xx body that did not match the expected shape.
    #[error("Unexpected response from the server: {0}")]
    Decode(String),

    /// The persisted session could not be read or written.
    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ClientError {
    /// Build the error for a non-2xx response from its status and raw body.
    ///
    /// Uses the `message` of a `{message, code}` body when present, otherwise
    /// `"Request failed with status <code>"`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {status}"));

        match status {
            401 => ClientError::Unauthorized(message),
            403 => ClientError::Forbidden(message),
            404 => ClientError::NotFound(message),
            _ => ClientError::Api { status, message },
        }
    }

    /// HTTP status, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Unauthorized(_) => Some(401),
            ClientError::Forbidden(_) => Some(403),
            ClientError::NotFound(_) => Some(404),
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for an alert or an error panel.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Decode(_) => "Unexpected response from the server".to_string(),
            ClientError::Storage(_) => "Could not access the saved session".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn server_message_is_kept_verbatim() {
        let err = ClientError::from_response(
            409,
            r#"{"message":"Vessel already exists: V-1","code":"CONFLICT"}"#,
        );
        assert_matches!(err, ClientError::Api { status: 409, ref message } if message == "Vessel already exists: V-1");
        assert_eq!(err.user_message(), "Vessel already exists: V-1");
    }

    #[test]
    fn missing_body_falls_back_to_status() {
        let err = ClientError::from_response(502, "<html>Bad gateway</html>");
        assert_eq!(err.user_message(), "Request failed with status 502");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn status_specific_variants() {
        let body = r#"{"message":"Access restricted to modules: monitoreo, administracion","code":"FORBIDDEN"}"#;
        assert_matches!(
            ClientError::from_response(403, body),
            ClientError::Forbidden(m) if m.contains("monitoreo")
        );
        assert_matches!(ClientError::from_response(401, ""), ClientError::Unauthorized(_));
        assert_matches!(ClientError::from_response(404, "{}"), ClientError::NotFound(_));
    }

    #[test]
    fn decode_errors_hide_details() {
        let err = ClientError::Decode("missing field `id`".into());
        assert_eq!(err.user_message(), "Unexpected response from the server");
        assert_eq!(err.status(), None);
    }
}
