use super::*;

#[test]
fn default_identity_is_first() {
    let state = UiState::default();
    assert_eq!(state.identity, Identity::First);
}

#[test]
fn select_switches_identity() {
    let mut state = UiState::default();
    state.select(Identity::Second);
    assert_eq!(state.identity, Identity::Second);

    state.select(Identity::First);
    assert_eq!(state.identity, Identity::First);
}

#[test]
fn reselecting_active_identity_is_stable() {
    let mut state = UiState { identity: Identity::Second };
    state.select(Identity::Second);
    assert_eq!(state.identity, Identity::Second);
}
