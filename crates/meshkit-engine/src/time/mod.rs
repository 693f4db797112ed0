//! Time subsystem.
//!
//! Frame timing without coupling to the runtime:
//! - one `FrameClock` per window
//! - call `tick()` once per presented frame to obtain `FrameTime`
//! - `FrameTime::elapsed` drives time-based animation (mesh spin)

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
