use serde::{Deserialize, Serialize};

/// Structured detail of a failed operation.
///
/// Carries zero or one human readable message and zero or one machine
/// readable code. Both may be absent, `ErrorDetail::default()` is the
/// fully blank detail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    message: Option<String>,
    message_code: Option<String>,
}

impl ErrorDetail {
    /// Detail with a human readable message and no code.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            message_code: None,
        }
    }

    /// Attaches a machine readable code to the detail.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.message_code = Some(code.into());
        self
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn message_code(&self) -> Option<&str> {
        self.message_code.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detail_has_both_fields_absent() {
        let detail = ErrorDetail::default();
        assert_eq!(detail.message(), None);
        assert_eq!(detail.message_code(), None);
    }

    #[test]
    fn serializes_both_fields() -> anyhow::Result<()> {
        let detail = ErrorDetail::new("name is required").with_code("E-REQ");
        let json = serde_json::to_string(&detail)?;
        assert_eq!(
            json,
            r#"{"message":"name is required","message_code":"E-REQ"}"#
        );

        let back: ErrorDetail = serde_json::from_str(&json)?;
        assert_eq!(back, detail);
        Ok(())
    }
}
