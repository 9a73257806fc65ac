use super::*;

fn user(name: &str) -> User {
    User { id: 1, username: name.to_owned(), email: format!("{name}@example.com") }
}

#[test]
fn bearer_token_missing_is_an_error() {
    let response = AuthResponse { user: Some(user("bob")), ..AuthResponse::default() };
    assert_eq!(bearer_token(&response), Err(SessionError::MissingToken));
    assert_eq!(SessionError::MissingToken.to_string(), "No token returned");
}

#[test]
fn bearer_token_accepts_access_token() {
    let response = AuthResponse { access_token: Some("jwt".to_owned()), ..AuthResponse::default() };
    assert_eq!(bearer_token(&response), Ok("jwt"));
}

#[test]
fn identity_prefers_auth_me() {
    let chosen = identity_after_auth(Ok(user("fresh")), Some(user("embedded"))).unwrap();
    assert_eq!(chosen.map(|u| u.username), Some("fresh".to_owned()));
}

#[test]
fn identity_falls_back_to_embedded_user() {
    let chosen = identity_after_auth(Err(ApiError::Network("offline".to_owned())), Some(user("embedded"))).unwrap();
    assert_eq!(chosen.map(|u| u.username), Some("embedded".to_owned()));
    assert_eq!(identity_after_auth(Err(ApiError::Unavailable), None), Ok(None));
}

#[test]
fn identity_rejected_token_does_not_fall_back() {
    let chosen = identity_after_auth(Err(ApiError::Unauthorized), Some(user("embedded")));
    assert_eq!(chosen, Err(ApiError::Unauthorized));

    let status = ApiError::from_status(401, r#"{"error":"Token has expired"}"#);
    assert!(identity_after_auth(Err(status), Some(user("embedded"))).is_err());
}

#[test]
fn api_errors_pass_through_transparently() {
    let err = SessionError::from(ApiError::from_status(401, r#"{"error":"Invalid email or password."}"#));
    assert_eq!(err.to_string(), "request failed: 401");
}

#[test]
fn failure_text_appends_server_detail() {
    let err = SessionError::Api(ApiError::from_status(401, r#"{"error":"Invalid email or password."}"#));
    assert_eq!(failure_text("Login failed.", &err), "Login failed. Invalid email or password.");
    assert_eq!(failure_text("Login failed.", &SessionError::MissingToken), "No token returned");
}
