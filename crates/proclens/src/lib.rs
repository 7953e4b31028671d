//! Enumerate running processes and answer "is this executable running?".
//!
//! A thin layer over the host OS's native process-inspection calls: one
//! enumeration pass discovers the live process ids, each id is resolved to
//! its executable base name on demand, and membership queries stop at the
//! first match.

pub mod enumerate;
pub mod error;
pub mod platform;
pub mod resolve;
pub mod scanner;

pub use error::ScanError;
pub use platform::ProcessApi;
pub use resolve::MAX_BASE_NAME_LEN;
pub use scanner::{ProcessNames, ProcessScanner};
