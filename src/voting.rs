multiversx_sc::imports!();

use crate::constants::PERCENT;
use crate::errors::{
    ALREADY_VOTED, CONFLICTING_ALTERNATIVES, MALFORMED_VOTE, NO_VOTERS, NO_VOTING_WEIGHT,
    SESSION_NOT_VOTING, VOTE_NOT_AUTHORIZED,
};
use crate::proposal_set::ProposalSet;
use crate::types::{Proposal, ProposalState, Session, SessionState};

/// Weighted voting on the proposals of the current session.
#[multiversx_sc::module]
pub trait VotingModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::token_core::TokenCoreModule
    + crate::sessions::SessionsModule
    + crate::sponsors::SponsorsModule
{
    // ========================================================
    // ENDPOINT: submitVote
    // Bit i-1 of `votes` approves proposal i.
    // ========================================================

    #[endpoint(submitVote)]
    fn submit_vote(&self, votes: BigUint) {
        let mut voters = ManagedVec::new();
        voters.push(self.blockchain().get_caller());
        self.cast_votes(&voters, &votes);
    }

    /// Votes for each voter with their own balance. The caller must be a
    /// live sponsor of the voter, or a token operator when the voter is
    /// not self-managed.
    #[endpoint(submitVoteOnBehalf)]
    fn submit_vote_on_behalf(&self, votes: BigUint, voters: MultiValueEncoded<ManagedAddress>) {
        self.cast_votes(&voters.to_vec(), &votes);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposalApproval)]
    fn proposal_approval(&self, session_id: u64, proposal_id: u8) -> bool {
        let session_mapper = self.sessions(session_id);
        let proposal_mapper = self.proposals(session_id, proposal_id);
        if session_mapper.is_empty() || proposal_mapper.is_empty() {
            return false;
        }
        self.is_approved(&session_mapper.get(), &proposal_mapper.get())
    }

    #[view(getProposalStateAt)]
    fn proposal_state_at(&self, session_id: u64, proposal_id: u8, time: u64) -> ProposalState {
        let session_state = self.session_state_at(session_id, time);
        match session_state {
            SessionState::Undefined => return ProposalState::Undefined,
            SessionState::Archived => return ProposalState::Archived,
            _ => {}
        }

        let session = self.sessions(session_id).get();
        if proposal_id == 0 || proposal_id > session.proposals_count {
            return ProposalState::Undefined;
        }

        let proposal = self.proposals(session_id, proposal_id).get();
        if proposal.cancelled {
            return ProposalState::Cancelled;
        }

        match session_state {
            SessionState::Planned => ProposalState::Defined,
            SessionState::Campaign | SessionState::Voting => ProposalState::Locked,
            _ if proposal.resolution_executed => ProposalState::Resolved,
            SessionState::Closed => ProposalState::Closed,
            _ if self.is_approved(&session, &proposal) => ProposalState::Approved,
            _ => ProposalState::Rejected,
        }
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn cast_votes(&self, voters: &ManagedVec<ManagedAddress>, raw_votes: &BigUint) {
        require!(!voters.is_empty(), NO_VOTERS);
        let votes = match ProposalSet::from_big_uint(raw_votes) {
            Some(votes) => votes,
            None => sc_panic!(MALFORMED_VOTE),
        };

        let now = self.blockchain().get_block_timestamp();
        let session_id = self.current_session_id().get();
        require!(
            self.session_state_at(session_id, now) == SessionState::Voting,
            SESSION_NOT_VOTING
        );

        let mut session = self.sessions(session_id).get();
        require!(votes.is_within(session.proposals_count), MALFORMED_VOTE);

        if session.participation == 0u64 {
            session.voting_supply = self.voting_supply_of(&session.total_supply);
        }

        let caller = self.blockchain().get_caller();
        let mut caller_is_operator = None;
        let mut weight = BigUint::zero();
        for voter in voters.iter() {
            self.require_vote_authorization(&caller, &voter, now, &mut caller_is_operator);
            require!(
                self.last_vote_at(&voter).get() < session.timeline.vote_at,
                ALREADY_VOTED
            );

            let voter_weight = self.token_balance_of(&voter);
            require!(voter_weight > 0u64, NO_VOTING_WEIGHT);

            self.last_vote_at(&voter).set(now);
            self.vote_event(session_id, &voter, raw_votes, &voter_weight);
            weight += &voter_weight;
        }

        // Cancelled proposals take no approvals and do not count as a
        // conflicting choice within their group.
        let mut counted = ProposalSet::empty();
        for proposal_id in votes.iter() {
            if !self.proposals(session_id, proposal_id).get().cancelled {
                counted.insert(proposal_id);
            }
        }

        for proposal_id in counted.iter() {
            let mapper = self.proposals(session_id, proposal_id);
            let mut proposal = mapper.get();
            let group = if proposal.alternative_of != 0 {
                self.proposals(session_id, proposal.alternative_of)
                    .get()
                    .alternatives_mask
            } else {
                proposal.alternatives_mask
            };
            require!(
                counted.selects_only_from_group(&group, proposal_id),
                CONFLICTING_ALTERNATIVES
            );

            proposal.approvals += &weight;
            mapper.set(&proposal);
        }

        session.participation += &weight;
        self.sessions(session_id).set(&session);
    }

    fn require_vote_authorization(
        &self,
        caller: &ManagedAddress,
        voter: &ManagedAddress,
        now: u64,
        caller_is_operator: &mut Option<bool>,
    ) {
        if caller == voter || self.is_active_sponsor(voter, caller, now) {
            return;
        }
        let is_operator = *caller_is_operator.get_or_insert_with(|| self.is_token_operator(caller));
        require!(
            is_operator && !self.is_self_managed(voter),
            VOTE_NOT_AUTHORIZED
        );
    }

    /// Total supply minus what the non-voting addresses hold right now.
    fn voting_supply_of(&self, total_supply: &BigUint) -> BigUint {
        let mut voting_supply = total_supply.clone();
        for address in self.non_voting_addresses().iter() {
            let balance = self.token_balance_of(&address);
            if balance >= voting_supply {
                return BigUint::zero();
            }
            voting_supply -= &balance;
        }
        voting_supply
    }

    fn is_approved(&self, session: &Session<Self::Api>, proposal: &Proposal<Self::Api>) -> bool {
        if session.participation == 0u64 || session.voting_supply == 0u64 {
            return false;
        }
        let requirement = &proposal.requirement;
        &proposal.approvals * PERCENT >= &session.participation * requirement.majority
            && &session.participation * PERCENT >= &session.voting_supply * requirement.quorum
    }
}
