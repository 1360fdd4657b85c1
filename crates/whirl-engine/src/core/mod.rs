//! Core engine-facing contracts.
//!
//! The stable seam between the runtime (platform loop) and the application:
//! an `App` trait plus the per-frame context handed to it. Runtime internals
//! stay out of user code.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
