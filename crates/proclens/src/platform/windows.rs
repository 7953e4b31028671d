// Windows adapter over psapi. The only platform where a process is a real
// kernel handle, so this is the adapter the close_process contract exists
// for.

use windows_sys::Win32::Foundation::{CloseHandle, HANDLE, HMODULE};
use windows_sys::Win32::System::ProcessStatus::{
    K32EnumProcessModules, K32EnumProcesses, K32GetModuleBaseNameA,
};
use windows_sys::Win32::System::Threading::{
    OpenProcess, PROCESS_QUERY_INFORMATION, PROCESS_VM_READ,
};

use crate::error::ScanError;
use crate::platform::ProcessApi;

pub struct PsapiApi;

impl PsapiApi {
    pub fn new() -> Result<Self, ScanError> {
        Ok(Self)
    }
}

/// A kernel handle from OpenProcess; released in `close_process`.
pub struct OpenedProcess(HANDLE);

impl ProcessApi for PsapiApi {
    type Process = OpenedProcess;
    type Module = HMODULE;

    fn fill_process_ids(&self, ids: &mut [u32]) -> Result<usize, ScanError> {
        let capacity_bytes = u32::try_from(ids.len() * std::mem::size_of::<u32>())
            .map_err(|_| ScanError::ProcessEnumeration("id buffer exceeds u32 bytes".into()))?;
        let mut returned_bytes: u32 = 0;
        // Safety: ids outlives the call and capacity_bytes matches its size.
        let ok = unsafe { K32EnumProcesses(ids.as_mut_ptr(), capacity_bytes, &mut returned_bytes) };
        if ok == 0 {
            return Err(ScanError::ProcessEnumeration(
                std::io::Error::last_os_error().to_string(),
            ));
        }
        Ok(returned_bytes as usize / std::mem::size_of::<u32>())
    }

    fn open_process(&self, pid: u32) -> Option<OpenedProcess> {
        // Query + VM read is all the module list needs; exited, protected,
        // and cross-privilege processes all fail here and stay absent.
        // Safety: no pointer arguments.
        let handle = unsafe { OpenProcess(PROCESS_QUERY_INFORMATION | PROCESS_VM_READ, 0, pid) };
        if handle == 0 {
            None
        } else {
            Some(OpenedProcess(handle))
        }
    }

    fn first_module(&self, process: &OpenedProcess) -> Option<HMODULE> {
        let mut module: HMODULE = 0;
        let mut needed: u32 = 0;
        // Room for a single entry: the first module is the executable itself.
        // Safety: module is a valid out-pointer for exactly the byte count
        // passed.
        let ok = unsafe {
            K32EnumProcessModules(
                process.0,
                &mut module,
                std::mem::size_of::<HMODULE>() as u32,
                &mut needed,
            )
        };
        if ok == 0 {
            None
        } else {
            Some(module)
        }
    }

    fn module_base_name(
        &self,
        process: &OpenedProcess,
        module: &HMODULE,
        buf: &mut [u8],
    ) -> Option<usize> {
        // Safety: buf outlives the call and nsize matches its length.
        let len =
            unsafe { K32GetModuleBaseNameA(process.0, *module, buf.as_mut_ptr(), buf.len() as u32) };
        if len == 0 {
            None
        } else {
            Some(len as usize)
        }
    }

    fn close_process(&self, process: OpenedProcess) {
        // Safety: the handle came from OpenProcess and is closed exactly once.
        unsafe { CloseHandle(process.0) };
    }
}
