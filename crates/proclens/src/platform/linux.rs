// Linux adapter: everything comes from procfs. Process ids are the numeric
// directory names under /proc, and a process's first module is the
// /proc/<pid>/exe symlink target.

use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use crate::error::ScanError;
use crate::platform::ProcessApi;

pub struct ProcFs;

impl ProcFs {
    pub fn new() -> Result<Self, ScanError> {
        if !Path::new("/proc").is_dir() {
            return Err(ScanError::CapabilityUnavailable(
                "/proc is not mounted".into(),
            ));
        }
        Ok(Self)
    }
}

/// A pid confirmed live at open time. Nothing to release on Linux; the
/// per-query reads below re-check liveness implicitly.
pub struct ProcDir {
    pid: u32,
}

impl ProcessApi for ProcFs {
    type Process = ProcDir;
    type Module = PathBuf;

    fn fill_process_ids(&self, ids: &mut [u32]) -> Result<usize, ScanError> {
        let mut written = 0;
        for entry in fs::read_dir("/proc")? {
            let entry = entry?;
            let Some(pid) = entry
                .file_name()
                .to_str()
                .and_then(|name| name.parse::<u32>().ok())
            else {
                continue;
            };
            if written == ids.len() {
                // Out of room with entries left over: report exactly-full
                // so the enumerator retries with a larger buffer.
                return Ok(written);
            }
            ids[written] = pid;
            written += 1;
        }
        Ok(written)
    }

    fn open_process(&self, pid: u32) -> Option<ProcDir> {
        fs::metadata(format!("/proc/{pid}")).ok()?;
        Some(ProcDir { pid })
    }

    fn first_module(&self, process: &ProcDir) -> Option<PathBuf> {
        // Readable only for our own processes without privilege; anything
        // else is an absence, same as an exited pid.
        let pid = process.pid;
        fs::read_link(format!("/proc/{pid}/exe")).ok()
    }

    fn module_base_name(
        &self,
        _process: &ProcDir,
        module: &PathBuf,
        buf: &mut [u8],
    ) -> Option<usize> {
        let name = module.file_name()?.as_bytes();
        let len = name.len().min(buf.len());
        buf[..len].copy_from_slice(&name[..len]);
        Some(len)
    }

    fn close_process(&self, _process: ProcDir) {}
}
