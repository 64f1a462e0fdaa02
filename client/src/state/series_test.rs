use super::*;

#[test]
fn default_shows_five_terms() {
    assert_eq!(SeriesState::default().terms, 5);
}

#[test]
fn add_accumulates() {
    let mut state = SeriesState::default();
    state.add(1);
    assert_eq!(state.terms, 6);
    state.add(5);
    assert_eq!(state.terms, 11);
}

#[test]
fn add_saturates_at_cap() {
    let mut state = SeriesState { terms: MAX_TERMS - 2 };
    state.add(5);
    assert_eq!(state.terms, MAX_TERMS);
    state.add(5);
    assert_eq!(state.terms, MAX_TERMS);
}

#[test]
fn reset_returns_to_one_term() {
    let mut state = SeriesState { terms: 37 };
    state.reset();
    assert_eq!(state.terms, 1);
}
