use super::*;

#[test]
fn validate_signup_input_trims_identity_fields() {
    assert_eq!(
        validate_signup_input(" a@b.com ", " ana ", "pw"),
        Ok(SignupInput { email: "a@b.com".to_owned(), username: "ana".to_owned(), password: "pw".to_owned() })
    );
}

#[test]
fn validate_signup_input_rejects_missing_fields() {
    assert_eq!(validate_signup_input("a@b.com", "  ", "pw"), Err("All fields are required."));
    assert_eq!(validate_signup_input("", "ana", "pw"), Err("All fields are required."));
    assert_eq!(validate_signup_input("a@b.com", "ana", ""), Err("All fields are required."));
}
