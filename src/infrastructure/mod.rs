//! Infrastructure Layer
//!
//! Runtime plumbing for the standalone runner.

pub mod sampler;
pub mod shutdown;

pub use sampler::{Sampler, SamplerStats};
pub use shutdown::{shutdown_signal, ShutdownController};
