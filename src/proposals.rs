multiversx_sc::imports!();

use crate::errors::{
    BELOW_PROPOSAL_THRESHOLD, INVALID_ALTERNATIVE, INVALID_DEPENDENCY, NOT_PROPOSER,
    PROPOSAL_CANCELLED, PROPOSAL_NOT_FOUND, SESSION_NOT_PLANNED, TOO_MANY_PROPOSALS,
};
use crate::proposal_set::ProposalSet;
use crate::types::{Proposal, ResolutionAction, Session, SessionState};

/// Proposal store of the planned session.
#[multiversx_sc::module]
pub trait ProposalsModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::token_core::TokenCoreModule
    + crate::sessions::SessionsModule
    + crate::rule::RuleModule
{
    // ========================================================
    // ENDPOINT: defineProposal
    // Schedules the next session if none is planned yet.
    // ========================================================

    #[endpoint(defineProposal)]
    fn define_proposal(
        &self,
        name: ManagedBuffer,
        url: ManagedBuffer,
        proposal_hash: ManagedBuffer,
        resolution_target: ManagedAddress,
        depends_on: u8,
        alternative_of: u8,
        resolution_endpoint: ManagedBuffer,
        resolution_arguments: MultiValueEncoded<ManagedBuffer>,
    ) -> u8 {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();
        let rule = self.session_rule().get();

        let session_id = match self.planned_session_id(now) {
            Some(session_id) => session_id,
            None => self.create_next_session(&rule, now),
        };
        let mut session = self.sessions(session_id).get();

        if self.is_token_operator(&caller) {
            require!(
                session.proposals_count < rule.max_proposals_operator,
                TOO_MANY_PROPOSALS
            );
        } else {
            require!(
                session.proposals_count < rule.max_proposals,
                TOO_MANY_PROPOSALS
            );
            let threshold =
                self.proposal_threshold(&rule, &session.total_supply, session.proposals_count);
            require!(
                self.token_balance_of(&caller) >= threshold,
                BELOW_PROPOSAL_THRESHOLD
            );
        }

        let proposal_id = session.proposals_count + 1;
        session.proposals_count = proposal_id;
        self.require_valid_links(session_id, &session, proposal_id, depends_on, alternative_of);
        self.sessions(session_id).set(&session);

        let resolution_action = ResolutionAction {
            endpoint: resolution_endpoint,
            arguments: resolution_arguments.to_vec(),
        };
        let requirement = self.resolution_requirement(
            resolution_target.clone(),
            resolution_action.endpoint.clone(),
        );
        let proposal = Proposal {
            name,
            url,
            proposal_hash,
            resolution_target,
            resolution_action,
            depends_on,
            alternative_of,
            alternatives_mask: ProposalSet::empty(),
            approvals: BigUint::zero(),
            proposed_by: caller.clone(),
            cancelled: false,
            resolution_executed: false,
            requirement,
        };
        self.proposals(session_id, proposal_id).set(&proposal);
        self.relink_alternative(session_id, proposal_id, 0, alternative_of);

        self.proposal_defined_event(session_id, proposal_id, &caller);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: updateProposal
    // Proposer only, while the session is still planned.
    // ========================================================

    #[endpoint(updateProposal)]
    fn update_proposal(
        &self,
        proposal_id: u8,
        name: ManagedBuffer,
        url: ManagedBuffer,
        proposal_hash: ManagedBuffer,
        resolution_target: ManagedAddress,
        depends_on: u8,
        alternative_of: u8,
        resolution_endpoint: ManagedBuffer,
        resolution_arguments: MultiValueEncoded<ManagedBuffer>,
    ) {
        let (session_id, session, mut proposal) = self.load_editable_proposal(proposal_id);
        self.require_valid_links(session_id, &session, proposal_id, depends_on, alternative_of);
        require!(
            alternative_of == 0 || proposal.alternatives_mask.is_empty(),
            INVALID_ALTERNATIVE
        );

        self.relink_alternative(
            session_id,
            proposal_id,
            proposal.alternative_of,
            alternative_of,
        );

        let resolution_action = ResolutionAction {
            endpoint: resolution_endpoint,
            arguments: resolution_arguments.to_vec(),
        };
        proposal.requirement = self.resolution_requirement(
            resolution_target.clone(),
            resolution_action.endpoint.clone(),
        );
        proposal.name = name;
        proposal.url = url;
        proposal.proposal_hash = proposal_hash;
        proposal.resolution_target = resolution_target;
        proposal.resolution_action = resolution_action;
        proposal.depends_on = depends_on;
        proposal.alternative_of = alternative_of;
        self.proposals(session_id, proposal_id).set(&proposal);

        self.proposal_updated_event(session_id, proposal_id);
    }

    #[endpoint(cancelProposal)]
    fn cancel_proposal(&self, proposal_id: u8) {
        let (session_id, _, mut proposal) = self.load_editable_proposal(proposal_id);

        proposal.cancelled = true;
        self.proposals(session_id, proposal_id).set(&proposal);

        self.proposal_cancelled_event(session_id, proposal_id);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, session_id: u64, proposal_id: u8) -> Proposal<Self::Api> {
        let mapper = self.proposals(session_id, proposal_id);
        require!(!mapper.is_empty(), PROPOSAL_NOT_FOUND);
        mapper.get()
    }

    /// Bookkeeping fields: proposer, majority, quorum, execution threshold,
    /// dependency, alternative base, alternatives mask and approvals.
    #[view(getProposalData)]
    fn get_proposal_data(
        &self,
        session_id: u64,
        proposal_id: u8,
    ) -> MultiValue8<ManagedAddress, u64, u64, BigUint, u8, u8, BigUint, BigUint> {
        let proposal = self.get_proposal(session_id, proposal_id);
        (
            proposal.proposed_by,
            proposal.requirement.majority,
            proposal.requirement.quorum,
            proposal.requirement.execution_threshold,
            proposal.depends_on,
            proposal.alternative_of,
            proposal.alternatives_mask.to_big_uint(),
            proposal.approvals,
        )
            .into()
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn load_editable_proposal(
        &self,
        proposal_id: u8,
    ) -> (u64, Session<Self::Api>, Proposal<Self::Api>) {
        let now = self.blockchain().get_block_timestamp();
        let session_id = self.current_session_id().get();
        require!(
            self.session_state_at(session_id, now) == SessionState::Planned,
            SESSION_NOT_PLANNED
        );

        let session = self.sessions(session_id).get();
        require!(
            proposal_id != 0 && proposal_id <= session.proposals_count,
            PROPOSAL_NOT_FOUND
        );

        let proposal = self.proposals(session_id, proposal_id).get();
        require!(
            proposal.proposed_by == self.blockchain().get_caller(),
            NOT_PROPOSER
        );
        require!(!proposal.cancelled, PROPOSAL_CANCELLED);

        (session_id, session, proposal)
    }

    /// Dependencies may point anywhere in the session but not to the
    /// proposal itself. Alternatives point back to a lower id that heads
    /// its own group.
    fn require_valid_links(
        &self,
        session_id: u64,
        session: &Session<Self::Api>,
        proposal_id: u8,
        depends_on: u8,
        alternative_of: u8,
    ) {
        require!(
            depends_on != proposal_id && depends_on <= session.proposals_count,
            INVALID_DEPENDENCY
        );
        if alternative_of != 0 {
            require!(alternative_of < proposal_id, INVALID_ALTERNATIVE);
            let base = self.proposals(session_id, alternative_of).get();
            require!(base.alternative_of == 0, INVALID_ALTERNATIVE);
        }
    }

    /// Moves `proposal_id` from the group headed by `previous_base` to the
    /// one headed by `new_base` (0 meaning no group).
    fn relink_alternative(
        &self,
        session_id: u64,
        proposal_id: u8,
        previous_base: u8,
        new_base: u8,
    ) {
        if previous_base == new_base {
            return;
        }

        if previous_base != 0 {
            self.proposals(session_id, previous_base).update(|base| {
                base.alternatives_mask.remove(proposal_id);
                if base.alternatives_mask == ProposalSet::single(previous_base) {
                    base.alternatives_mask = ProposalSet::empty();
                }
            });
        }

        if new_base != 0 {
            self.proposals(session_id, new_base).update(|base| {
                base.alternatives_mask.insert(new_base);
                base.alternatives_mask.insert(proposal_id);
            });
        }
    }
}
