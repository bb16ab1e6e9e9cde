//! Prompt text for the language model.

use crate::content::{ConfirmationEmailInput, SecurityPolicyInput};

pub(super) const CONFIRMATION_EMAIL_SYSTEM: &str = "You are an expert email composer specializing in creating professional and informative booking confirmation emails for hotels. Reply with the HTML document only, without commentary or code fences.";

pub(super) const SECURITY_POLICY_SYSTEM: &str =
    "You are an expert security advisor specializing in hotel security policies.";

pub(super) fn confirmation_email(input: &ConfirmationEmailInput) -> String {
    format!(
        "You will use the following information to generate a personalized HTML email \
         confirmation for the guest. Ensure the email is well-formatted and includes all \
         necessary booking details.\n\n\
         Guest Name: {guest}\n\
         Hotel Name: {hotel}\n\
         Check-In Date: {check_in}\n\
         Check-Out Date: {check_out}\n\
         Booking Details: {details}\n\n\
         Generate the complete HTML content for the email, including the <html>, <head>, and \
         <body> tags. Use modern HTML and CSS for styling to ensure a professional look and feel.",
        guest = input.guest_name,
        hotel = input.hotel_name,
        check_in = input.check_in_date,
        check_out = input.check_out_date,
        details = input.booking_details,
    )
}

pub(super) fn security_policy(input: &SecurityPolicyInput) -> String {
    format!(
        "You will use this information to generate security policy recommendations for the \
         hotel.\n\n\
         Hotel Name: {name}\n\
         Hotel Description: {description}\n\
         Existing Security Measures: {measures}\n\
         Potential Threats: {threats}\n\n\
         Based on this information, provide a list of security policy recommendations for the \
         hotel. Be specific and actionable.",
        name = input.hotel_name,
        description = input.hotel_description,
        measures = input.existing_security_measures,
        threats = input.potential_threats,
    )
}

/// Strip a surrounding Markdown code fence, if the model added one anyway.
pub(super) fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();

    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let body = body.strip_suffix("```").unwrap_or(body);

    match body.split_once('\n') {
        Some((info, rest)) if !info.contains('<') => rest.trim(),
        _ => body.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_prompt_lists_every_fact() {
        let prompt = confirmation_email(&ConfirmationEmailInput {
            guest_name: "Alice Doe".to_string(),
            hotel_name: "Seaside Inn".to_string(),
            check_in_date: "June 1, 2025".to_string(),
            check_out_date: "June 5, 2025".to_string(),
            booking_details: "Booking for 1 room(s): Suite.".to_string(),
        });

        for line in [
            "Guest Name: Alice Doe",
            "Hotel Name: Seaside Inn",
            "Check-In Date: June 1, 2025",
            "Check-Out Date: June 5, 2025",
            "Booking Details: Booking for 1 room(s): Suite.",
        ] {
            assert!(prompt.contains(line), "missing {line:?} in {prompt}");
        }
    }

    #[test]
    fn strips_fenced_html() {
        assert_eq!(
            strip_code_fence("```html\n<html></html>\n```"),
            "<html></html>"
        );
        assert_eq!(strip_code_fence("  <html></html> "), "<html></html>");
        assert_eq!(strip_code_fence("```<p>x</p>```"), "<p>x</p>");
    }
}
