//! The seam between the scanner and the operating system.
//!
//! [`ProcessApi`] captures the four native capabilities this crate
//! consumes: fill a buffer with live process ids, open one process for
//! querying, fetch its first loaded module, and read that module's base
//! name. One adapter exists per supported OS; unit tests substitute a
//! scripted one.

use crate::error::ScanError;

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(test)]
pub(crate) mod fake;

/// Native process-inspection capabilities of one operating system.
///
/// All methods are synchronous queries against live OS state. The
/// per-process methods never error: a process that cannot be inspected
/// yields `None`, whatever the reason.
pub trait ProcessApi {
    /// An open, query-only process handle. Must be passed back to
    /// [`ProcessApi::close_process`] exactly once.
    type Process;
    /// An opaque reference to one loaded module within an open process.
    type Module;

    /// Fill `ids` with the identifiers of currently running processes,
    /// returning how many entries were written.
    ///
    /// The OS cannot signal truncation, so a return value equal to
    /// `ids.len()` means the buffer may have been too small and the caller
    /// retries with a larger one. Errors mean the enumeration facility
    /// itself failed, not that any single process is inaccessible.
    fn fill_process_ids(&self, ids: &mut [u32]) -> Result<usize, ScanError>;

    /// Open `pid` for querying. `None` when the process has exited, is
    /// protected, or the caller lacks privilege.
    fn open_process(&self, pid: u32) -> Option<Self::Process>;

    /// The first module loaded into the process; by OS convention this is
    /// the process's own executable.
    fn first_module(&self, process: &Self::Process) -> Option<Self::Module>;

    /// Write the module's base name into `buf`, returning the byte count
    /// written. Names longer than `buf` are truncated to fit.
    fn module_base_name(
        &self,
        process: &Self::Process,
        module: &Self::Module,
        buf: &mut [u8],
    ) -> Option<usize>;

    /// Release a handle obtained from [`ProcessApi::open_process`].
    fn close_process(&self, process: Self::Process);
}

#[cfg(target_os = "linux")]
pub type NativeApi = linux::ProcFs;

#[cfg(target_os = "macos")]
pub type NativeApi = macos::LibprocApi;

#[cfg(target_os = "windows")]
pub type NativeApi = windows::PsapiApi;

/// Connect to the host OS's process facilities.
///
/// The one place capability-level failures surface: a host missing the
/// required facility (e.g. `/proc` not mounted) errors here, once, instead
/// of during individual queries.
pub fn native() -> Result<NativeApi, ScanError> {
    NativeApi::new()
}
