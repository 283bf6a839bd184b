multiversx_sc::imports!();

use crate::constants::{SESSION_RETENTION_COUNT, SESSION_RETENTION_PERIOD};
use crate::errors::{NOT_READY_FOR_NEW_SESSION, RETENTION_NOT_REACHED, SESSION_NOT_FOUND};
use crate::types::{Session, SessionRule, SessionState};

/// Session lifecycle: scheduling, derived phases and retention.
#[multiversx_sc::module]
pub trait SessionsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::token_core::TokenCoreModule
{
    // ========================================================
    // ENDPOINT: archiveSession
    // Retires the oldest session once it falls out of retention.
    // ========================================================

    #[endpoint(archiveSession)]
    fn archive_session(&self) {
        let oldest_id = self.oldest_session_id().get();
        let current_id = self.current_session_id().get();
        require!(
            oldest_id <= current_id && !self.sessions(oldest_id).is_empty(),
            SESSION_NOT_FOUND
        );

        let now = self.blockchain().get_block_timestamp();
        let timeline = self.sessions(oldest_id).get().timeline;
        let count_exceeded = current_id >= oldest_id + SESSION_RETENTION_COUNT;
        let period_elapsed = now >= timeline.vote_at + SESSION_RETENTION_PERIOD
            && timeline.state_at(now) == SessionState::Closed;
        require!(count_exceeded || period_elapsed, RETENTION_NOT_REACHED);

        self.archive_oldest_session();
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getSession)]
    fn get_session(&self, session_id: u64) -> Session<Self::Api> {
        require!(!self.sessions(session_id).is_empty(), SESSION_NOT_FOUND);
        self.sessions(session_id).get()
    }

    #[view(getSessionStateAt)]
    fn session_state_at(&self, session_id: u64, time: u64) -> SessionState {
        if session_id == 0 || session_id > self.current_session_id().get() {
            return SessionState::Undefined;
        }
        if session_id < self.oldest_session_id().get() {
            return SessionState::Archived;
        }
        self.sessions(session_id).get().timeline.state_at(time)
    }

    /// Vote start of the session that would be scheduled at `time`.
    #[view(getNextSessionAt)]
    fn next_session_at(&self, time: u64) -> u64 {
        let rule = self.session_rule().get();
        rule.periods.next_vote_at(time, self.current_session_closed_at())
    }

    #[view(getNextProposalThresholdAt)]
    fn next_proposal_threshold_at(&self, session_id: u64, proposals_count: u8) -> BigUint {
        require!(!self.sessions(session_id).is_empty(), SESSION_NOT_FOUND);
        let rule = self.session_rule().get();
        let session = self.sessions(session_id).get();
        self.proposal_threshold(&rule, &session.total_supply, proposals_count)
    }

    // ========================================================
    // INTERNAL: scheduling
    // ========================================================

    /// The current session, if it still accepts proposals.
    fn planned_session_id(&self, now: u64) -> Option<u64> {
        let current_id = self.current_session_id().get();
        if self.session_state_at(current_id, now) == SessionState::Planned {
            Some(current_id)
        } else {
            None
        }
    }

    fn create_next_session(&self, rule: &SessionRule<Self::Api>, now: u64) -> u64 {
        let current_id = self.current_session_id().get();
        let current_state = self.session_state_at(current_id, now);
        require!(
            matches!(
                current_state,
                SessionState::Undefined
                    | SessionState::Grace
                    | SessionState::Closed
                    | SessionState::Archived
            ),
            NOT_READY_FOR_NEW_SESSION
        );

        let vote_at = rule
            .periods
            .next_vote_at(now, self.current_session_closed_at());
        let timeline = rule.periods.timeline_for(vote_at);
        let session_id = current_id + 1;

        let session = Session {
            timeline,
            proposals_count: 0,
            participation: BigUint::zero(),
            total_supply: self.token_total_supply(),
            voting_supply: BigUint::zero(),
        };
        self.sessions(session_id).set(&session);
        self.current_session_id().set(session_id);

        self.lock_token_transfers(timeline.vote_at, timeline.execution_at);
        self.session_scheduled_event(session_id, &timeline);

        if session_id >= self.oldest_session_id().get() + SESSION_RETENTION_COUNT {
            self.archive_oldest_session();
        }

        session_id
    }

    fn current_session_closed_at(&self) -> u64 {
        let current_id = self.current_session_id().get();
        let mapper = self.sessions(current_id);
        if current_id == 0 || mapper.is_empty() {
            0
        } else {
            mapper.get().timeline.closed_at
        }
    }

    fn archive_oldest_session(&self) {
        let oldest_id = self.oldest_session_id().get();
        let proposals_count = self.sessions(oldest_id).get().proposals_count;
        for proposal_id in 1..=proposals_count {
            self.proposals(oldest_id, proposal_id).clear();
        }
        self.sessions(oldest_id).clear();
        self.oldest_session_id().set(oldest_id + 1);

        self.session_archived_event(oldest_id);
    }

    // ========================================================
    // INTERNAL: proposal congestion pricing
    // Flat while "open" slots remain, then rises quadratically
    // toward half the supply as the session fills up.
    // ========================================================

    fn proposal_threshold(
        &self,
        rule: &SessionRule<Self::Api>,
        total_supply: &BigUint,
        proposals_count: u8,
    ) -> BigUint {
        let threshold = &rule.new_proposal_threshold;
        if proposals_count <= rule.open_proposals
            || rule.max_proposals <= rule.open_proposals
            || total_supply <= threshold
        {
            return threshold.clone();
        }

        let half_supply = total_supply / 2u64;
        if half_supply <= *threshold {
            return threshold.clone();
        }

        let progress = (proposals_count - rule.open_proposals) as u64;
        let range = (rule.max_proposals - rule.open_proposals) as u64;
        let surcharge = (half_supply - threshold) * (progress * progress) / (range * range);
        threshold + &surcharge
    }
}
