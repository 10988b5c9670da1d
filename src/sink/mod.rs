//! Submission sink module

mod log;
mod traits;

pub use log::LogSink;
pub use traits::SupportSink;

#[cfg(test)]
pub use traits::MockSupportSink;
