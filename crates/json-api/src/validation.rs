//! Request validation error mapping.

use salvo::prelude::StatusError;
use validator::ValidationErrors;

/// Flatten validation failures into their human-readable messages, sorted by field.
pub(crate) fn messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();

    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map_or_else(|| format!("{field} is invalid."), ToString::to_string)
            })
        })
        .collect()
}

pub(crate) fn into_bad_request(errors: &ValidationErrors) -> StatusError {
    let messages = messages(errors);

    if messages.is_empty() {
        return StatusError::bad_request().brief("Invalid request payload");
    }

    StatusError::bad_request().brief(messages.join(" "))
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Form {
        #[validate(length(min = 1, message = "Name is required."))]
        name: String,

        #[validate(email)]
        email: String,
    }

    #[test]
    fn collects_messages_with_fallback() {
        let form = Form {
            name: String::new(),
            email: "nope".to_string(),
        };

        let Err(errors) = form.validate() else {
            unreachable!("form is invalid");
        };

        assert_eq!(
            messages(&errors),
            vec!["email is invalid.".to_string(), "Name is required.".to_string()]
        );
    }
}
