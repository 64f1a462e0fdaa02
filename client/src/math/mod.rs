//! Pure math for the two Sophomore's Dream identities.
//!
//! DESIGN
//! ======
//! Everything here is a total function of its arguments: no state, no I/O.
//! Components call these on every render; nothing is cached, so the table
//! and the chart can never disagree with the selected identity.

pub mod curve;
pub mod series;

pub use curve::{CurvePoint, DEFAULT_RESOLUTION, sample_curve};
pub use series::{MAX_TERMS, SeriesTerm, exact_value, partial_sums};
