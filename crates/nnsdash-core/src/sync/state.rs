use derive_more::Display;

///
/// FetchPhase
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum FetchPhase {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl FetchPhase {
    #[must_use]
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

///
/// Delivery
/// What to do with a successful response.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Delivery {
    Deliver,
    DiscardStale,
}

///
/// SyncRound
///
/// The two branches of one reconciliation. Each moves
/// `Idle -> InFlight -> Succeeded | Failed` independently; a query success
/// that lands after the update settled is stale. After a certified success
/// it would overwrite proven data, after a certified failure it would bring
/// back data that was just cleared.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SyncRound {
    query: FetchPhase,
    update: FetchPhase,
}

impl SyncRound {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            query: FetchPhase::Idle,
            update: FetchPhase::Idle,
        }
    }

    #[must_use]
    pub const fn phase(&self, certified: bool) -> FetchPhase {
        if certified { self.update } else { self.query }
    }

    const fn branch_mut(&mut self, certified: bool) -> &mut FetchPhase {
        if certified {
            &mut self.update
        } else {
            &mut self.query
        }
    }

    pub const fn start(&mut self, certified: bool) {
        *self.branch_mut(certified) = FetchPhase::InFlight;
    }

    pub fn succeed(&mut self, certified: bool) -> Delivery {
        debug_assert_eq!(self.phase(certified), FetchPhase::InFlight);
        *self.branch_mut(certified) = FetchPhase::Succeeded;

        if !certified && self.update.is_settled() {
            Delivery::DiscardStale
        } else {
            Delivery::Deliver
        }
    }

    pub fn fail(&mut self, certified: bool) {
        debug_assert_eq!(self.phase(certified), FetchPhase::InFlight);
        *self.branch_mut(certified) = FetchPhase::Failed;
    }

    /// No branch is in flight.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.query != FetchPhase::InFlight && self.update != FetchPhase::InFlight
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_after_update_is_stale() {
        let mut round = SyncRound::new();
        round.start(false);
        round.start(true);
        assert!(!round.is_settled());

        assert_eq!(round.succeed(true), Delivery::Deliver);
        assert_eq!(round.succeed(false), Delivery::DiscardStale);
        assert!(round.is_settled());
    }

    #[test]
    fn update_after_query_is_delivered() {
        let mut round = SyncRound::new();
        round.start(false);
        round.start(true);

        assert_eq!(round.succeed(false), Delivery::Deliver);
        assert_eq!(round.succeed(true), Delivery::Deliver);
    }

    #[test]
    fn query_after_failed_update_is_stale() {
        let mut round = SyncRound::new();
        round.start(false);
        round.start(true);

        round.fail(true);
        assert_eq!(round.phase(true), FetchPhase::Failed);
        assert_eq!(round.succeed(false), Delivery::DiscardStale);
        assert!(round.phase(false).is_settled());
    }

    #[test]
    fn query_only_round_delivers() {
        let mut round = SyncRound::new();
        round.start(false);

        assert_eq!(round.succeed(false), Delivery::Deliver);
        assert_eq!(round.phase(true), FetchPhase::Idle);
    }
}
