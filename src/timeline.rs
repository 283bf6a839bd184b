//! Session calendar arithmetic.
//!
//! A session's phase is never stored: it is recomputed from the five
//! timestamps fixed when the session is scheduled. Sessions are anchored on
//! their vote start, which always falls on a slot boundary
//! `period_offset + k * session_length`.

multiversx_sc::derive_imports!();

use crate::constants::{
    DEFAULT_CAMPAIGN_PERIOD, DEFAULT_EXECUTION_PERIOD, DEFAULT_GRACE_PERIOD,
    DEFAULT_PERIOD_OFFSET, DEFAULT_VOTING_PERIOD, MAX_PERIOD_LENGTH, MIN_PERIOD_LENGTH,
};
use crate::errors::{
    INVALID_CAMPAIGN_PERIOD, INVALID_EXECUTION_PERIOD, INVALID_GRACE_PERIOD,
    INVALID_VOTING_PERIOD,
};
use crate::types::SessionState;

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub struct SessionPeriods {
    pub campaign: u64,
    pub voting: u64,
    pub execution: u64,
    pub grace: u64,
    pub offset: u64,
}

impl SessionPeriods {
    pub const DEFAULT: SessionPeriods = SessionPeriods {
        campaign: DEFAULT_CAMPAIGN_PERIOD,
        voting: DEFAULT_VOTING_PERIOD,
        execution: DEFAULT_EXECUTION_PERIOD,
        grace: DEFAULT_GRACE_PERIOD,
        offset: DEFAULT_PERIOD_OFFSET,
    };

    pub fn validate(&self) -> Result<(), &'static str> {
        if !within_bounds(self.campaign) {
            return Err(INVALID_CAMPAIGN_PERIOD);
        }
        if !within_bounds(self.voting) {
            return Err(INVALID_VOTING_PERIOD);
        }
        if !within_bounds(self.execution) {
            return Err(INVALID_EXECUTION_PERIOD);
        }
        if self.grace <= self.campaign || self.grace > MAX_PERIOD_LENGTH {
            return Err(INVALID_GRACE_PERIOD);
        }
        Ok(())
    }

    pub fn session_length(&self) -> u64 {
        self.campaign + self.voting + self.execution + self.grace
    }

    pub fn timeline_for(&self, vote_at: u64) -> SessionTimeline {
        let execution_at = vote_at + self.voting;
        let grace_at = execution_at + self.execution;
        SessionTimeline {
            campaign_at: vote_at - self.campaign,
            vote_at,
            execution_at,
            grace_at,
            closed_at: grace_at + self.grace,
        }
    }

    /// Smallest slot boundary strictly after both `time + campaign` and
    /// `previous_closed_at`. A session scheduled on it is still planned at
    /// `time` and does not overlap the previous session.
    pub fn next_vote_at(&self, time: u64, previous_closed_at: u64) -> u64 {
        let length = self.session_length();
        let floor = core::cmp::max(time.saturating_add(self.campaign), previous_closed_at);

        if floor < self.offset {
            self.offset - ((self.offset - floor - 1) / length) * length
        } else {
            self.offset + ((floor - self.offset) / length + 1) * length
        }
    }
}

fn within_bounds(period: u64) -> bool {
    (MIN_PERIOD_LENGTH..=MAX_PERIOD_LENGTH).contains(&period)
}

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug, Default,
)]
pub struct SessionTimeline {
    pub campaign_at: u64,
    pub vote_at: u64,
    pub execution_at: u64,
    pub grace_at: u64,
    pub closed_at: u64,
}

impl SessionTimeline {
    pub fn state_at(&self, time: u64) -> SessionState {
        if time < self.campaign_at {
            SessionState::Planned
        } else if time < self.vote_at {
            SessionState::Campaign
        } else if time < self.execution_at {
            SessionState::Voting
        } else if time < self.grace_at {
            SessionState::Execution
        } else if time < self.closed_at {
            SessionState::Grace
        } else {
            SessionState::Closed
        }
    }
}
