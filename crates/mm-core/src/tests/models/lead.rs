use crate::Lead;

#[test]
fn test_lead_new() {
    let lead = Lead::new("Maria Muster", "maria@example.de", "Wir planen ein Event.").unwrap();

    assert_eq!(lead.name, "Maria Muster");
    assert_eq!(lead.email, "maria@example.de");
    assert_eq!(lead.message, "Wir planen ein Event.");
}

#[test]
fn test_lead_rejects_empty_name() {
    let result = Lead::new("", "maria@example.de", "Hallo");

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("name"));
}

#[test]
fn test_lead_rejects_empty_email() {
    let result = Lead::new("Maria", "", "Hallo");

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("email"));
}

#[test]
fn test_lead_rejects_empty_message() {
    let result = Lead::new("Maria", "maria@example.de", "");

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("message"));
}

#[test]
fn test_lead_rejects_malformed_email() {
    for email in [
        "maria",
        "maria@",
        "@example.de",
        "ma ria@example.de",
        "maria@exa mple.de",
        "maria@@example.de",
    ] {
        let result = Lead::new("Maria", email, "Hallo");
        assert!(result.is_err(), "expected '{}' to be rejected", email);
    }
}

#[test]
fn test_lead_error_names_location() {
    let err = Lead::new("", "maria@example.de", "Hallo").unwrap_err();

    // The raising call site (this test file) ends up in the message.
    assert!(err.to_string().contains("lead.rs"));
}
