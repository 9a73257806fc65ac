use super::*;

#[test]
fn push_appends_in_order_with_unique_ids() {
    let mut state = ToastState::default();
    let a = state.push("first", ToastKind::Info, DEFAULT_TOAST_MS);
    let b = state.push("second", ToastKind::Error, DEFAULT_TOAST_MS);
    assert_ne!(a.id, b.id);
    let messages: Vec<_> = state.items.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["first", "second"]);
}

#[test]
fn duplicate_messages_are_kept() {
    let mut state = ToastState::default();
    state.push("saved", ToastKind::Success, DEFAULT_TOAST_MS);
    state.push("saved", ToastKind::Success, DEFAULT_TOAST_MS);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn dismiss_removes_only_the_expired_toast() {
    let mut state = ToastState::default();
    let a = state.push("a", ToastKind::Info, 1000);
    let b = state.push("b", ToastKind::Info, 5000);
    assert!(state.dismiss(a.id));
    assert_eq!(state.items, vec![b.clone()]);
    assert!(!state.dismiss(a.id));
    assert!(state.dismiss(b.id));
    assert!(state.items.is_empty());
}

#[test]
fn lifetime_matches_configured_duration() {
    let mut state = ToastState::default();
    let default = state.push("x", ToastKind::Info, DEFAULT_TOAST_MS);
    let custom = state.push("y", ToastKind::Info, 750);
    assert_eq!(default.lifetime(), Duration::from_secs(3));
    assert_eq!(custom.lifetime(), Duration::from_millis(750));
}

#[test]
fn kinds_map_to_distinct_classes() {
    assert_eq!(ToastKind::default(), ToastKind::Info);
    assert_ne!(ToastKind::Success.class(), ToastKind::Error.class());
    assert!(ToastKind::Error.class().ends_with("--error"));
}
