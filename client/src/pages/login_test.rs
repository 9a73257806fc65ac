use super::*;

#[test]
fn validate_login_input_trims_email_only() {
    assert_eq!(
        validate_login_input("  user@example.com ", " secret "),
        Ok(("user@example.com".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter email and password."));
}
