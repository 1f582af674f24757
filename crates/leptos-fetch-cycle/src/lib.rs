//! Leptos Fetch Cycle Utilities
//!
//! Load-state machine for screens that refetch whole collections after
//! every mutation. Each cycle carries a generation number; a response that
//! lost the race against a newer cycle is discarded instead of overwriting
//! fresher data.

use leptos::prelude::*;

/// Load phases of one screen's fetch cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// No fetch started yet
    #[default]
    Idle,
    /// A fetch cycle is in flight
    Loading,
    /// The latest cycle committed its data
    Loaded,
    /// The latest cycle failed; stays here until an explicit refresh
    Failed,
}

impl LoadPhase {
    pub fn is_loading(self) -> bool {
        self == LoadPhase::Loading
    }

    pub fn is_failed(self) -> bool {
        self == LoadPhase::Failed
    }
}

/// Fetch cycle signals for one screen
#[derive(Clone, Copy)]
pub struct FetchCycle {
    phase_read: ReadSignal<LoadPhase>,
    phase_write: WriteSignal<LoadPhase>,
    generation_read: ReadSignal<u64>,
    generation_write: WriteSignal<u64>,
    refresh_read: ReadSignal<u32>,
    refresh_write: WriteSignal<u32>,
}

pub fn create_fetch_cycle() -> FetchCycle {
    let (phase_read, phase_write) = signal(LoadPhase::Idle);
    let (generation_read, generation_write) = signal(0u64);
    let (refresh_read, refresh_write) = signal(0u32);
    FetchCycle {
        phase_read,
        phase_write,
        generation_read,
        generation_write,
        refresh_read,
        refresh_write,
    }
}

impl FetchCycle {
    /// Current phase (reactive read)
    pub fn phase(&self) -> LoadPhase {
        self.phase_read.get()
    }

    pub fn is_loading(&self) -> bool {
        self.phase().is_loading()
    }

    /// Subscribe the calling effect to `refresh()`
    pub fn track(&self) {
        let _ = self.refresh_read.get();
    }

    /// Request a new cycle: effects that called `track()` re-run.
    /// Mutation success callbacks land here, and this is the only way out
    /// of `Failed`.
    pub fn refresh(&self) {
        self.refresh_write.update(|n| *n += 1);
    }

    /// Start a cycle: advance the generation and enter `Loading`.
    /// Data committed by an earlier cycle stays in place until the new one
    /// commits, so re-loading never flashes an empty screen.
    pub fn begin(&self) -> FetchTicket {
        let generation = self.generation_read.get_untracked() + 1;
        self.generation_write.set(generation);
        self.phase_write.set(LoadPhase::Loading);
        FetchTicket {
            cycle: *self,
            generation,
        }
    }
}

/// Handle for one in-flight cycle
#[derive(Clone, Copy)]
pub struct FetchTicket {
    cycle: FetchCycle,
    generation: u64,
}

impl FetchTicket {
    /// Whether no newer cycle has started since this ticket was issued
    pub fn is_current(&self) -> bool {
        self.cycle.generation_read.get_untracked() == self.generation
    }

    /// Commit the cycle: run `apply` (which must assign every collection
    /// the cycle fetched, in one step) and enter `Loaded`. A ticket
    /// superseded by a newer cycle returns false without running `apply`.
    pub fn commit(self, apply: impl FnOnce()) -> bool {
        if !self.is_current() {
            return false;
        }
        apply();
        self.cycle.phase_write.set(LoadPhase::Loaded);
        true
    }

    /// Fail the cycle. A superseded ticket returns false and leaves the
    /// phase to the cycle that replaced it.
    pub fn fail(self) -> bool {
        if !self.is_current() {
            return false;
        }
        self.cycle.phase_write.set(LoadPhase::Failed);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_moves_loading_to_loaded() {
        let cycle = create_fetch_cycle();
        assert_eq!(cycle.phase_read.get_untracked(), LoadPhase::Idle);

        let ticket = cycle.begin();
        assert_eq!(cycle.phase_read.get_untracked(), LoadPhase::Loading);

        let mut applied = false;
        assert!(ticket.commit(|| applied = true));
        assert!(applied);
        assert_eq!(cycle.phase_read.get_untracked(), LoadPhase::Loaded);
    }

    #[test]
    fn stale_commit_is_discarded() {
        let cycle = create_fetch_cycle();
        let stale = cycle.begin();
        let fresh = cycle.begin();

        let mut applied = false;
        assert!(!stale.commit(|| applied = true));
        assert!(!applied);
        assert_eq!(cycle.phase_read.get_untracked(), LoadPhase::Loading);

        assert!(fresh.commit(|| applied = true));
        assert!(applied);
        assert_eq!(cycle.phase_read.get_untracked(), LoadPhase::Loaded);
    }

    #[test]
    fn stale_failure_cannot_mask_fresh_commit() {
        let cycle = create_fetch_cycle();
        let stale = cycle.begin();
        let fresh = cycle.begin();

        assert!(fresh.commit(|| ()));
        assert!(!stale.fail());
        assert_eq!(cycle.phase_read.get_untracked(), LoadPhase::Loaded);
    }

    #[test]
    fn failed_cycle_reloads_only_through_begin() {
        let cycle = create_fetch_cycle();
        assert!(cycle.begin().fail());
        assert_eq!(cycle.phase_read.get_untracked(), LoadPhase::Failed);

        let retry = cycle.begin();
        assert_eq!(cycle.phase_read.get_untracked(), LoadPhase::Loading);
        assert!(retry.commit(|| ()));
        assert_eq!(cycle.phase_read.get_untracked(), LoadPhase::Loaded);
    }

    #[test]
    fn refresh_bumps_the_counter() {
        let cycle = create_fetch_cycle();
        assert_eq!(cycle.refresh_read.get_untracked(), 0);
        cycle.refresh();
        cycle.refresh();
        assert_eq!(cycle.refresh_read.get_untracked(), 2);
    }

    #[test]
    fn tickets_observe_supersession() {
        let cycle = create_fetch_cycle();
        let first = cycle.begin();
        assert!(first.is_current());
        let _second = cycle.begin();
        assert!(!first.is_current());
    }
}
