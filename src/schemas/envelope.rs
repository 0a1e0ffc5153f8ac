use crate::error::{Result, TripError};
use jsonschema::{Draft, JSONSchema};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::type_name;

const MAX_SCHEMA_ERRORS: usize = 3;

/// JSON schema generated for a response envelope type.
pub fn envelope_schema<T: JsonSchema>() -> Result<Value> {
    Ok(serde_json::to_value(schemars::schema_for!(T))?)
}

/// Check a response body against the schema of `T`.
pub fn validate_envelope<T: JsonSchema>(payload: &Value) -> Result<()> {
    let schema = envelope_schema::<T>()?;
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .map_err(|err| {
            TripError::Decode(format!(
                "Failed to prepare `{}` schema for validation: {}",
                short_type_name::<T>(),
                err
            ))
        })?;

    if let Err(errors) = validator.validate(payload) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let mut path = error.instance_path.to_string();
                if path.is_empty() {
                    path = "<root>".to_string();
                }
                details.push(format!("{}: {}", path, error));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail_str = if details.is_empty() {
            "response body failed schema validation".to_string()
        } else {
            details.join("; ")
        };

        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(TripError::Decode(format!(
            "Response does not match `{}`: {}",
            short_type_name::<T>(),
            detail_str
        )));
    }

    Ok(())
}

/// Parse, validate and deserialize a raw response body into `T`.
pub fn decode_envelope<T>(body: &str) -> Result<T>
where
    T: JsonSchema + DeserializeOwned,
{
    let payload: Value = serde_json::from_str(body)
        .map_err(|err| TripError::Decode(format!("Response is not valid JSON: {err}")))?;

    validate_envelope::<T>(&payload)?;

    serde_path_to_error::deserialize(payload).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        TripError::Decode(format!(
            "failed to deserialize `{}` at {}: {}",
            short_type_name::<T>(),
            location,
            err
        ))
    })
}

fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TripResponse;

    #[test]
    fn valid_envelope_decodes() {
        let response: TripResponse =
            decode_envelope(r#"{"itinerary": "Day 1\nMorning:\n- coffee"}"#).unwrap();
        assert_eq!(response.itinerary, "Day 1\nMorning:\n- coffee");
    }

    #[test]
    fn missing_field_is_a_decode_error() {
        let err = decode_envelope::<TripResponse>(r#"{"plan": "Day 1"}"#).unwrap_err();
        assert_eq!(err.error_code(), "DECODE_ERROR");
        assert!(err.to_string().contains("TripResponse"));
    }

    #[test]
    fn wrong_field_type_is_a_decode_error() {
        let err = decode_envelope::<TripResponse>(r#"{"itinerary": 42}"#).unwrap_err();
        assert!(matches!(err, TripError::Decode(_)));
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let err = decode_envelope::<TripResponse>("<html>oops</html>").unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }
}
