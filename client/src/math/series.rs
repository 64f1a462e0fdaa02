//! Series accumulator: partial sums of ∑ n⁻ⁿ and ∑ (−1)ⁿ⁺¹ n⁻ⁿ.

use frames::Identity;

/// Upper bound on the term count exposed by the UI. The terms shrink so fast
/// that anything beyond this is invisible at f64 precision.
pub const MAX_TERMS: u32 = 50;

/// Exact value of ∫₀¹ x⁻ˣ dx = ∑ n⁻ⁿ.
pub const FIRST_EXACT: f64 = 1.291_285_997_062_663_5;

/// Exact value of ∫₀¹ xˣ dx = ∑ (−1)ⁿ⁺¹ n⁻ⁿ.
pub const SECOND_EXACT: f64 = 0.783_430_510_712_134_4;

/// One accumulated series entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesTerm {
    pub n: u32,
    /// Signed term value: n⁻ⁿ, negated on even n for the second identity.
    pub term: f64,
    /// Running sum through this term.
    pub partial_sum: f64,
}

/// Accumulate the first `max_n` terms of the active identity's series.
#[must_use]
pub fn partial_sums(identity: Identity, max_n: u32) -> Vec<SeriesTerm> {
    let mut history = Vec::with_capacity(max_n as usize);
    let mut sum = 0.0;

    for n in 1..=max_n {
        let mut term = f64::from(n).powf(-f64::from(n));
        if identity == Identity::Second && n % 2 == 0 {
            term = -term;
        }
        sum += term;
        history.push(SeriesTerm { n, term, partial_sum: sum });
    }

    history
}

/// The documented exact constant the series converges to.
#[must_use]
pub fn exact_value(identity: Identity) -> f64 {
    match identity {
        Identity::First => FIRST_EXACT,
        Identity::Second => SECOND_EXACT,
    }
}

#[cfg(test)]
#[path = "series_test.rs"]
mod tests;
