//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`ui`, `series`, `tutor`) so individual
//! components can depend on small focused models. Each struct is plain data
//! with plain methods; components wrap them in `RwSignal`s via context.

pub mod series;
pub mod tutor;
pub mod ui;
