//! Scripted stand-in for the operating system, used by unit tests.
//!
//! Each fixture process is given an outcome up front (resolves to a name,
//! denies the open, or opens but has no modules), and the fake counts
//! fills, opens, and closes so tests can assert on short-circuiting and
//! handle hygiene.

use std::cell::{Cell, RefCell};

use crate::error::ScanError;
use crate::platform::ProcessApi;

struct FakeProcess {
    pid: u32,
    /// `None` means the open call itself is denied.
    name: Option<&'static str>,
    /// When false, the process opens but reports no modules.
    has_module: bool,
}

pub(crate) struct FakeApi {
    processes: Vec<FakeProcess>,
    /// How many fill calls to answer with "buffer exactly full" before
    /// reporting real contents.
    full_responses: Cell<usize>,
    pub(crate) fill_calls: Cell<usize>,
    pub(crate) opened: RefCell<Vec<u32>>,
    pub(crate) closed: Cell<usize>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self {
            processes: Vec::new(),
            full_responses: Cell::new(0),
            fill_calls: Cell::new(0),
            opened: RefCell::new(Vec::new()),
            closed: Cell::new(0),
        }
    }

    pub(crate) fn with_process(mut self, pid: u32, name: &'static str) -> Self {
        self.processes.push(FakeProcess {
            pid,
            name: Some(name),
            has_module: true,
        });
        self
    }

    pub(crate) fn with_unopenable(mut self, pid: u32) -> Self {
        self.processes.push(FakeProcess {
            pid,
            name: None,
            has_module: true,
        });
        self
    }

    pub(crate) fn with_moduleless(mut self, pid: u32) -> Self {
        self.processes.push(FakeProcess {
            pid,
            name: Some("never-read"),
            has_module: false,
        });
        self
    }

    /// Answer the next `count` fill calls with an exactly-full buffer.
    pub(crate) fn with_full_responses(self, count: usize) -> Self {
        self.full_responses.set(count);
        self
    }

    fn find(&self, pid: u32) -> Option<&FakeProcess> {
        self.processes.iter().find(|process| process.pid == pid)
    }
}

pub(crate) struct FakeHandle {
    pid: u32,
}

impl ProcessApi for FakeApi {
    type Process = FakeHandle;
    type Module = u32;

    fn fill_process_ids(&self, ids: &mut [u32]) -> Result<usize, ScanError> {
        self.fill_calls.set(self.fill_calls.get() + 1);
        if self.full_responses.get() > 0 {
            self.full_responses.set(self.full_responses.get() - 1);
            return Ok(ids.len());
        }
        let mut written = 0;
        for process in &self.processes {
            if written == ids.len() {
                return Ok(written);
            }
            ids[written] = process.pid;
            written += 1;
        }
        Ok(written)
    }

    fn open_process(&self, pid: u32) -> Option<FakeHandle> {
        self.opened.borrow_mut().push(pid);
        self.find(pid)?.name?;
        Some(FakeHandle { pid })
    }

    fn first_module(&self, process: &FakeHandle) -> Option<u32> {
        self.find(process.pid)?.has_module.then_some(process.pid)
    }

    fn module_base_name(
        &self,
        process: &FakeHandle,
        _module: &u32,
        buf: &mut [u8],
    ) -> Option<usize> {
        let name = self.find(process.pid)?.name?.as_bytes();
        let len = name.len().min(buf.len());
        buf[..len].copy_from_slice(&name[..len]);
        Some(len)
    }

    fn close_process(&self, _process: FakeHandle) {
        self.closed.set(self.closed.get() + 1);
    }
}
