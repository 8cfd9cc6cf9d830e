use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

// Chimeboard epoch: 2025-01-01T00:00:00Z
const EPOCH: u64 = 1_735_689_600_000;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);
static LAST_TIMESTAMP: AtomicU64 = AtomicU64::new(0);

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock went backwards")
        .as_millis() as u64
}

/// Generate a monotonically increasing string ID. Record listings rely on
/// this ordering to break same-second `created_at` ties.
pub fn generate() -> String {
    let mut timestamp = now_ms() - EPOCH;
    let last = LAST_TIMESTAMP.load(Ordering::SeqCst);

    if timestamp == last {
        let seq = SEQUENCE.fetch_add(1, Ordering::SeqCst) & 0xFFF;
        if seq == 0 {
            // Sequence overflow, wait for next millisecond
            while timestamp <= last {
                timestamp = now_ms() - EPOCH;
            }
        }
        LAST_TIMESTAMP.store(timestamp, Ordering::SeqCst);
        let id = (timestamp << 22) | seq;
        id.to_string()
    } else {
        LAST_TIMESTAMP.store(timestamp, Ordering::SeqCst);
        SEQUENCE.store(1, Ordering::SeqCst);
        let id = timestamp << 22;
        id.to_string()
    }
}

pub fn timestamp_of(id: &str) -> Option<u64> {
    let num: u64 = id.parse().ok()?;
    Some((num >> 22) + EPOCH)
}
