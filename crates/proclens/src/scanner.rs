//! Scanning façade: lazy name sequences and membership queries.

use crate::enumerate;
use crate::error::ScanError;
use crate::platform::{self, NativeApi, ProcessApi};
use crate::resolve;

/// Scans running processes and resolves their executable base names.
///
/// Every query performs a fresh enumerate-then-resolve pass against live
/// OS state; nothing is cached between calls, so results are a snapshot of
/// the instant the query ran.
pub struct ProcessScanner<A = NativeApi> {
    api: A,
}

impl ProcessScanner {
    /// Connect to the host OS's process facilities.
    ///
    /// This is the only place capability problems surface; once
    /// constructed, per-process failures are absorbed as skipped names.
    pub fn new() -> Result<Self, ScanError> {
        Ok(Self {
            api: platform::native()?,
        })
    }
}

impl<A: ProcessApi> ProcessScanner<A> {
    /// Scan through a caller-supplied process API instead of the host's.
    pub fn with_api(api: A) -> Self {
        Self { api }
    }

    /// Snapshot of every running process id, unresolved.
    pub fn process_ids(&self) -> Result<Vec<u32>, ScanError> {
        enumerate::list_process_ids(&self.api)
    }

    /// Lazily resolved executable names of all running processes, in
    /// enumeration order. Processes whose name cannot be resolved are
    /// skipped. Each call re-enumerates from scratch.
    pub fn process_names(&self) -> Result<ProcessNames<'_, A>, ScanError> {
        let ids = enumerate::list_process_ids(&self.api)?;
        Ok(ProcessNames {
            api: &self.api,
            ids: ids.into_iter(),
        })
    }

    /// All resolved executable names, materialized.
    pub fn list_all(&self) -> Result<Vec<String>, ScanError> {
        let names: Vec<String> = self.process_names()?.collect();
        tracing::debug!(count = names.len(), "process scan complete");
        Ok(names)
    }

    /// Whether some running process has exactly this executable base name.
    ///
    /// Stops enumerating and resolving at the first match, so a hit early
    /// in the process table never pays for the rest of it.
    pub fn is_running(&self, name: &str) -> Result<bool, ScanError> {
        let mut names = self.process_names()?;
        Ok(names.any(|candidate| candidate == name))
    }
}

/// Pull-based name sequence from [`ProcessScanner::process_names`].
///
/// The id set was snapshotted when the sequence was created; names resolve
/// one at a time as the sequence is advanced.
pub struct ProcessNames<'a, A: ProcessApi> {
    api: &'a A,
    ids: std::vec::IntoIter<u32>,
}

impl<A: ProcessApi> Iterator for ProcessNames<'_, A> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let pid = self.ids.next()?;
            if let Some(name) = resolve::resolve_process_name(self.api, pid) {
                return Some(name);
            }
        }
    }
}
