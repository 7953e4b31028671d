//! Per-process executable name resolution.

use crate::platform::ProcessApi;

/// Base names are read into a buffer of this many bytes; longer names are
/// silently truncated.
pub const MAX_BASE_NAME_LEN: usize = 64;

/// The executable base name of one process, or `None` when the process
/// cannot be inspected.
///
/// Absence covers every per-process condition: the process exited between
/// enumeration and this call, the caller lacks the privilege to open it,
/// or the OS reports no modules for it. None of these are errors.
pub fn resolve_process_name<A: ProcessApi>(api: &A, pid: u32) -> Option<String> {
    let process = api.open_process(pid)?;
    let name = read_base_name(api, &process);
    api.close_process(process);
    name
}

fn read_base_name<A: ProcessApi>(api: &A, process: &A::Process) -> Option<String> {
    let module = api.first_module(process)?;
    let mut buf = [0_u8; MAX_BASE_NAME_LEN];
    let written = api
        .module_base_name(process, &module, &mut buf)?
        .min(buf.len());
    Some(String::from_utf8_lossy(&buf[..written]).into_owned())
}

#[cfg(test)]
mod tests {
    use super::{resolve_process_name, MAX_BASE_NAME_LEN};
    use crate::platform::fake::FakeApi;

    #[test]
    fn resolves_the_first_module_base_name() {
        let api = FakeApi::new().with_process(7, "alpha.exe");

        assert_eq!(resolve_process_name(&api, 7).as_deref(), Some("alpha.exe"));
        assert_eq!(api.closed.get(), 1);
    }

    #[test]
    fn denied_open_is_absent_and_acquires_nothing() {
        let api = FakeApi::new().with_unopenable(7);

        assert_eq!(resolve_process_name(&api, 7), None);
        // The open failed, so there is no handle to release.
        assert_eq!(api.closed.get(), 0);
    }

    #[test]
    fn moduleless_process_is_absent_but_still_released() {
        let api = FakeApi::new().with_moduleless(7);

        assert_eq!(resolve_process_name(&api, 7), None);
        assert_eq!(*api.opened.borrow(), [7]);
        assert_eq!(api.closed.get(), 1);
    }

    #[test]
    fn unknown_pid_is_absent() {
        let api = FakeApi::new().with_process(7, "alpha.exe");

        assert_eq!(resolve_process_name(&api, 8), None);
    }

    #[test]
    fn long_names_truncate_to_the_buffer() {
        let long = "a-process-name-well-past-the-buffer-width-padding-padding-padding-padding.exe";
        assert!(long.len() > MAX_BASE_NAME_LEN);
        let api = FakeApi::new().with_process(7, long);

        let resolved = resolve_process_name(&api, 7).unwrap();
        assert_eq!(resolved.len(), MAX_BASE_NAME_LEN);
        assert_eq!(resolved, long[..MAX_BASE_NAME_LEN]);
    }
}
