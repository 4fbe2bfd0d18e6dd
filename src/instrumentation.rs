// Lightweight work counters for comparing strategies in development.
// Thread-local cells keep the hot path free of locking; reset and snapshot
// helpers let the dev binaries collect per-strategy breakdowns.
use std::cell::Cell;

thread_local! {
    static LENGTHS_PROBED: Cell<u64> = Cell::new(0);
    static CANDIDATES_EXAMINED: Cell<u64> = Cell::new(0);
    static CONTAINMENT_CHECKS: Cell<u64> = Cell::new(0);
    static WINDOWS_HASHED: Cell<u64> = Cell::new(0);
    static HASH_COLLISIONS: Cell<u64> = Cell::new(0);
}

/// Values of every counter on the current thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Candidate lengths the search looked at.
    pub lengths_probed: u64,
    /// Needle windows cut out as candidates.
    pub candidates: u64,
    /// Substring searches run against the haystack.
    pub containment_checks: u64,
    /// Haystack windows inserted into a hash table.
    pub windows_hashed: u64,
    /// Hash hits rejected by byte comparison.
    pub hash_collisions: u64,
}

pub fn reset_counters() {
    LENGTHS_PROBED.with(|c| c.set(0));
    CANDIDATES_EXAMINED.with(|c| c.set(0));
    CONTAINMENT_CHECKS.with(|c| c.set(0));
    WINDOWS_HASHED.with(|c| c.set(0));
    HASH_COLLISIONS.with(|c| c.set(0));
}

pub fn counters_snapshot() -> Counters {
    Counters {
        lengths_probed: LENGTHS_PROBED.with(|c| c.get()),
        candidates: CANDIDATES_EXAMINED.with(|c| c.get()),
        containment_checks: CONTAINMENT_CHECKS.with(|c| c.get()),
        windows_hashed: WINDOWS_HASHED.with(|c| c.get()),
        hash_collisions: HASH_COLLISIONS.with(|c| c.get()),
    }
}

pub fn add_lengths_probed(n: u64) {
    LENGTHS_PROBED.with(|c| c.set(c.get().wrapping_add(n)));
}
pub fn add_candidates(n: u64) {
    CANDIDATES_EXAMINED.with(|c| c.set(c.get().wrapping_add(n)));
}
pub fn add_containment_checks(n: u64) {
    CONTAINMENT_CHECKS.with(|c| c.set(c.get().wrapping_add(n)));
}
pub fn add_windows_hashed(n: u64) {
    WINDOWS_HASHED.with(|c| c.set(c.get().wrapping_add(n)));
}
pub fn add_hash_collisions(n: u64) {
    HASH_COLLISIONS.with(|c| c.set(c.get().wrapping_add(n)));
}
