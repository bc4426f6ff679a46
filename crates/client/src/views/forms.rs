//! Client-side form checks and submit outcomes.

use crate::error::ClientResult;

/// What the page does after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Success: go to this path.
    Navigate(String),
    /// Stay on the form and show this message.
    Alert(String),
}

impl FormOutcome {
    /// Map a submit result, building the destination from the created value.
    pub fn from_result<T>(result: ClientResult<T>, destination: impl FnOnce(&T) -> String) -> Self {
        match result {
            Ok(value) => FormOutcome::Navigate(destination(&value)),
            Err(e) => {
                tracing::warn!(error = %e, "Form submit failed");
                FormOutcome::Alert(e.user_message())
            }
        }
    }
}

/// Presence checks for required inputs. Only presence is checked here; the
/// server validates everything else.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Required text: blank counts as missing.
    pub fn text(mut self, name: &'static str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.missing.push(name);
        }
        self
    }

    /// Required selection or parsed value.
    pub fn present<T>(mut self, name: &'static str, value: &Option<T>) -> Self {
        if value.is_none() {
            self.missing.push(name);
        }
        self
    }

    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }

    /// `Err` with the alert text when anything is missing.
    pub fn check(&self) -> Result<(), String> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(format!(
                "Please complete the required fields: {}",
                self.missing.join(", ")
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    #[test]
    fn lists_missing_fields_in_order() {
        let fields = RequiredFields::new()
            .text("code", "  ")
            .present("client", &None::<u8>)
            .present("route", &Some(1))
            .text("notes", "ok");
        assert_eq!(fields.missing(), ["code", "client"]);
        assert_eq!(
            fields.check().unwrap_err(),
            "Please complete the required fields: code, client"
        );
    }

    #[test]
    fn complete_form_passes() {
        assert!(RequiredFields::new().text("code", "RES-1").check().is_ok());
    }

    #[test]
    fn submit_outcomes() {
        let ok: ClientResult<u32> = Ok(7);
        assert_eq!(
            FormOutcome::from_result(ok, |id| format!("/items/{id}")),
            FormOutcome::Navigate("/items/7".into())
        );

        let err: ClientResult<u32> = Err(ClientError::Api {
            status: 409,
            message: "Reservation already exists: RES-1".into(),
        });
        assert_eq!(
            FormOutcome::from_result(err, |id| format!("/items/{id}")),
            FormOutcome::Alert("Reservation already exists: RES-1".into())
        );
    }
}
