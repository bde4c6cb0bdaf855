use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::app_error::{AppError, AppResult};

/// Accepted shape of a waitlist signup.
#[derive(Debug, Clone, Validate)]
pub struct RegisterWaitlistInput {
    #[validate(email(message = "Invalid email"))]
    pub email: String,
}

impl RegisterWaitlistInput {
    /// Check an untyped JSON body against the schema.
    ///
    /// Shape errors (not an object, missing field, wrong type) are reported before
    /// the field rules run. The email is kept exactly as submitted.
    pub fn parse(body: &Value) -> AppResult<Self> {
        let Value::Object(fields) = body else {
            return Err(validation_error(format!(
                "Expected object, received {}",
                json_type(body)
            )));
        };

        let email = match fields.get("email") {
            None => return Err(validation_error("Required at \"email\"")),
            Some(Value::String(email)) => email.clone(),
            Some(other) => {
                return Err(validation_error(format!(
                    "Expected string, received {} at \"email\"",
                    json_type(other)
                )));
            }
        };

        let input = Self { email };
        input
            .validate()
            .map_err(|errors| validation_error(describe(&errors)))?;
        Ok(input)
    }
}

fn validation_error(detail: impl std::fmt::Display) -> AppError {
    AppError::InvalidInput(format!("Validation error: {detail}"))
}

/// Flatten field errors into `<message> at "<field>"` fragments, sorted for stable output.
fn describe(errors: &ValidationErrors) -> String {
    let mut issues = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error.message.clone().unwrap_or_else(|| error.code.clone());
            issues.push(format!("{message} at \"{field}\""));
        }
    }
    issues.sort();
    issues.join("; ")
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
