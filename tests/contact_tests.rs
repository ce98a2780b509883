// Host-side tests for contact form validation and the EmailJS payload.

use folio_core::*;

#[test]
fn well_formed_input_passes() {
    let valid = ContactForm::new("Alice", "a@b.com", "hi").validate();
    assert!(valid.is_ok());
}

#[test]
fn fields_are_trimmed() {
    let valid = ContactForm::new("  Alice ", " a@b.com\n", "\thi ")
        .validate()
        .unwrap();
    assert_eq!(valid.form(), &ContactForm::new("Alice", "a@b.com", "hi"));
    assert_eq!(valid.form().name, "Alice");
}

#[test]
fn malformed_email_is_rejected() {
    for email in ["a@b", "abc.com", "", "a b@c.com", "a@@b.com", "@b.com", "a@b.", "a@.com"] {
        assert_eq!(
            ContactForm::new("Alice", email, "hi").validate(),
            Err(ContactError::InvalidEmail),
            "{email:?} should be rejected"
        );
    }
}

#[test]
fn email_pattern_accepts_common_addresses() {
    for email in ["a@b.com", "first.last@example.co.uk", "x+tag@sub.domain.io"] {
        assert!(is_valid_email(email), "{email:?} should pass");
    }
}

#[test]
fn empty_name_or_message_is_rejected() {
    assert_eq!(
        ContactForm::new("", "a@b.com", "hi").validate(),
        Err(ContactError::MissingFields)
    );
    assert_eq!(
        ContactForm::new("Alice", "a@b.com", "   ").validate(),
        Err(ContactError::MissingFields)
    );
}

#[test]
fn email_is_checked_before_required_fields() {
    assert_eq!(
        ContactForm::new("", "nope", "").validate(),
        Err(ContactError::InvalidEmail)
    );
}

#[test]
fn errors_display_as_alert_text() {
    assert_eq!(
        ContactError::InvalidEmail.to_string(),
        "❌ Incorrect email address"
    );
    assert_eq!(
        ContactError::MissingFields.to_string(),
        "❌ Please fill in all fields"
    );
}

#[test]
fn send_request_matches_emailjs_shape() {
    let params = ContactForm::new("Alice", "a@b.com", "hi")
        .validate()
        .unwrap()
        .into_params("1/2/2026, 10:00:00 AM".to_owned());
    let config = MailConfig::default();
    let json = serde_json::to_value(config.request(params)).unwrap();

    assert_eq!(json["service_id"], "service_rmxhyyi");
    assert_eq!(json["template_id"], "template_cw3f92c");
    assert_eq!(json["user_id"], config.public_key.as_str());
    assert_eq!(json["template_params"]["name"], "Alice");
    assert_eq!(json["template_params"]["email"], "a@b.com");
    assert_eq!(json["template_params"]["message"], "hi");
    assert_eq!(json["template_params"]["time"], "1/2/2026, 10:00:00 AM");
}
