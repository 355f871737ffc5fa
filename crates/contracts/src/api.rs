use serde::{Deserialize, Serialize};

/// Response envelope shared by every REST endpoint.
///
/// Failures are reported here, never as a transport-level fault: a handler
/// answers 400 with the same shape and `succeeded == false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub succeeded: bool,
    pub message: String,
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            succeeded: true,
            message: message.into(),
            errors: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            data: None,
            succeeded: false,
            message: message.into(),
            errors: None,
        }
    }

    pub fn fail_with(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            data: None,
            succeeded: false,
            message: message.into(),
            errors: Some(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_wire_shape() {
        let ok = ApiResponse::ok(42, "done");
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["data"], 42);
        assert_eq!(json["succeeded"], true);
        assert_eq!(json["message"], "done");
        assert_eq!(json["errors"], serde_json::Value::Null);

        let fail: ApiResponse<i32> = ApiResponse::fail_with("bad", vec!["oops".into()]);
        let json = serde_json::to_value(&fail).unwrap();
        assert_eq!(json["data"], serde_json::Value::Null);
        assert_eq!(json["succeeded"], false);
        assert_eq!(json["errors"][0], "oops");
    }
}
