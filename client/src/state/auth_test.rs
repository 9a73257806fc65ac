use super::*;

fn alice() -> User {
    User { id: 1, username: "alice".to_owned(), email: "alice@example.com".to_owned() }
}

#[test]
fn auth_state_starts_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert_eq!(state.greeting(), None);
}

#[test]
fn signed_in_sets_user_and_finishes_loading() {
    let mut state = AuthState::default();
    state.signed_in(alice());
    assert!(!state.loading);
    assert_eq!(state.greeting().as_deref(), Some("Hi, alice"));
}

#[test]
fn signed_out_clears_user() {
    let mut state = AuthState::default();
    state.signed_in(alice());
    state.signed_out();
    assert!(!state.loading);
    assert!(state.user.is_none());
}
