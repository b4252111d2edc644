use super::*;

// =============================================================
// Default lifetimes
// =============================================================

#[test]
fn errors_are_sticky() {
    assert_eq!(NotificationKind::Error.default_timeout_ms(), None);
}

#[test]
fn warnings_linger_longer_than_success_and_info() {
    assert_eq!(NotificationKind::Success.default_timeout_ms(), Some(5_000));
    assert_eq!(NotificationKind::Info.default_timeout_ms(), Some(5_000));
    assert_eq!(NotificationKind::Warning.default_timeout_ms(), Some(8_000));
}

// =============================================================
// Queue behavior
// =============================================================

#[test]
fn push_appends_with_kind_timeout() {
    let mut state = NotificationState::default();
    let id = state.push(NotificationKind::Warning, "Heads up", Some("Session expires soon".to_owned()));

    assert_eq!(state.items.len(), 1);
    let item = &state.items[0];
    assert_eq!(item.id, id);
    assert_eq!(item.title, "Heads up");
    assert_eq!(item.message.as_deref(), Some("Session expires soon"));
    assert_eq!(item.auto_dismiss_ms, Some(8_000));
}

#[test]
fn push_assigns_distinct_ids() {
    let mut state = NotificationState::default();
    let a = state.push(NotificationKind::Info, "a", None);
    let b = state.push(NotificationKind::Info, "b", None);
    assert_ne!(a, b);
}

#[test]
fn push_beyond_cap_evicts_oldest() {
    let mut state = NotificationState::default();
    for i in 0..MAX_VISIBLE + 2 {
        state.push(NotificationKind::Info, format!("n{i}"), None);
    }

    assert_eq!(state.items.len(), MAX_VISIBLE);
    assert_eq!(state.items[0].title, "n2");
    assert_eq!(state.items[MAX_VISIBLE - 1].title, format!("n{}", MAX_VISIBLE + 1));
}

#[test]
fn dismiss_removes_only_matching_item() {
    let mut state = NotificationState::default();
    let keep = state.push(NotificationKind::Success, "keep", None);
    let drop = state.push(NotificationKind::Error, "drop", None);

    assert!(state.dismiss(drop));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, keep);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = NotificationState::default();
    state.push(NotificationKind::Success, "x", None);
    assert!(!state.dismiss(Uuid::new_v4()));
    assert_eq!(state.items.len(), 1);
}

#[test]
fn clear_empties_queue() {
    let mut state = NotificationState::default();
    state.push(NotificationKind::Success, "x", None);
    state.clear();
    assert!(state.is_empty());
}

#[test]
fn auto_dismiss_ms_reads_the_queued_entry() {
    let mut state = NotificationState::default();
    let warning = state.push(NotificationKind::Warning, "Slow network", None);
    let error = state.push(NotificationKind::Error, "Save failed", Some("500".to_owned()));

    assert_eq!(state.auto_dismiss_ms(warning), Some(8_000));
    assert_eq!(state.auto_dismiss_ms(error), None);

    state.dismiss(warning);
    assert_eq!(state.auto_dismiss_ms(warning), None);
}
