// macOS adapter built on libproc. pids_by_type hands back the full pid set
// in one call; the adapter feeds it through the shared fill-buffer contract
// so the enumerator treats every platform identically.

use std::path::PathBuf;

use libproc::libproc::bsd_info::BSDInfo;
use libproc::libproc::proc_pid::{pidinfo, pidpath};
use libproc::processes::{pids_by_type, ProcFilter};

use crate::error::ScanError;
use crate::platform::ProcessApi;

pub struct LibprocApi;

impl LibprocApi {
    pub fn new() -> Result<Self, ScanError> {
        Ok(Self)
    }
}

/// A pid that answered a BSD-info probe at open time.
pub struct PidProbe {
    pid: i32,
}

impl ProcessApi for LibprocApi {
    type Process = PidProbe;
    type Module = PathBuf;

    fn fill_process_ids(&self, ids: &mut [u32]) -> Result<usize, ScanError> {
        let pids = pids_by_type(ProcFilter::All)?;
        let len = pids.len().min(ids.len());
        ids[..len].copy_from_slice(&pids[..len]);
        Ok(len)
    }

    fn open_process(&self, pid: u32) -> Option<PidProbe> {
        let pid = i32::try_from(pid).ok()?;
        pidinfo::<BSDInfo>(pid, 0).ok()?;
        Some(PidProbe { pid })
    }

    fn first_module(&self, process: &PidProbe) -> Option<PathBuf> {
        pidpath(process.pid).ok().map(PathBuf::from)
    }

    fn module_base_name(
        &self,
        _process: &PidProbe,
        module: &PathBuf,
        buf: &mut [u8],
    ) -> Option<usize> {
        use std::os::unix::ffi::OsStrExt;

        let name = module.file_name()?.as_bytes();
        let len = name.len().min(buf.len());
        buf[..len].copy_from_slice(&name[..len]);
        Some(len)
    }

    fn close_process(&self, _process: PidProbe) {}
}
