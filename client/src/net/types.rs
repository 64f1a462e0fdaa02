//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The frame model itself lives in the `frames` crate so serde round-trips
//! stay lossless on both sides; this module just re-exports it under the
//! names the client code uses.

pub use frames::Status as FrameStatus;
pub use frames::{Data, FRAME_IDENTITY, FRAME_MESSAGE, FRAME_QUESTION, Frame};
