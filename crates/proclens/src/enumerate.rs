//! Discovery of the full live process-id set.

use crate::error::ScanError;
use crate::platform::ProcessApi;

/// Seed capacity for the first fill attempt, in id entries.
const INITIAL_CAPACITY: usize = 512;

/// Ceiling for the retry loop. An OS reporting more ids than this means
/// the fill call is misbehaving, not that the machine is busy.
const MAX_CAPACITY: usize = 1 << 20;

/// Every process id currently known to the OS, in the order the OS
/// reported them. Order is not stable across calls.
///
/// The fill call cannot signal truncation, so an exactly-full buffer is
/// treated as "possibly more" and retried at double the capacity until a
/// fill comes back short.
pub fn list_process_ids<A: ProcessApi>(api: &A) -> Result<Vec<u32>, ScanError> {
    let mut capacity = INITIAL_CAPACITY;
    loop {
        let mut ids = vec![0_u32; capacity];
        let returned = api.fill_process_ids(&mut ids)?;
        if returned < capacity {
            ids.truncate(returned);
            return Ok(ids);
        }
        if capacity >= MAX_CAPACITY {
            return Err(ScanError::EnumerationGrowthExceeded { capacity });
        }
        tracing::trace!(capacity, "process id buffer exactly full, doubling");
        capacity *= 2;
    }
}
