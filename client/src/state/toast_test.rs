use super::*;

// =============================================================
// ToastState queue behavior
// =============================================================

#[test]
fn push_queues_in_order() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "first".to_owned());
    state.push(ToastKind::Error, "second".to_owned());
    let messages: Vec<&str> = state.toasts.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(messages, ["first", "second"]);
}

#[test]
fn push_returns_unique_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a".to_owned());
    let b = state.push(ToastKind::Info, "b".to_owned());
    assert_ne!(a, b);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "a".to_owned());
    state.push(ToastKind::Success, "b".to_owned());
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "b");
}

#[test]
fn dismiss_of_unknown_id_is_a_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "a".to_owned());
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a".to_owned());
    state.dismiss(a);
    let b = state.push(ToastKind::Info, "b".to_owned());
    assert_ne!(a, b);
}

// =============================================================
// ToastKind
// =============================================================

#[test]
fn kinds_map_to_distinct_css_modifiers() {
    assert_ne!(ToastKind::Success.class(), ToastKind::Error.class());
    assert_ne!(ToastKind::Error.class(), ToastKind::Info.class());
    assert!(ToastKind::Success.class().starts_with("toast--"));
}
