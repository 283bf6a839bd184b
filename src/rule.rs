multiversx_sc::imports!();

use crate::constants::PERCENT;
use crate::errors::{
    DEFAULT_MAJORITY_REQUIRED, DUPLICATE_NON_VOTING_ADDRESS, INVALID_OPERATOR_LIMIT,
    INVALID_PERCENTAGE, INVALID_PROPOSAL_LIMITS, INVALID_PROPOSAL_THRESHOLD, NOT_GOVERNANCE,
    NO_REQUIREMENTS, SESSION_IN_PROGRESS,
};
use crate::timeline::SessionPeriods;
use crate::types::{ResolutionRequirement, SessionRule, SessionState};

/// Session rule and resolution requirement registry.
///
/// Both are owned by the contract owner until governance takes over:
/// a resolution targeting this contract runs with the contract itself
/// as caller.
#[multiversx_sc::module]
pub trait RuleModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::token_core::TokenCoreModule
    + crate::sessions::SessionsModule
{
    #[endpoint(updateSessionRule)]
    fn update_session_rule(
        &self,
        campaign_period: u64,
        voting_period: u64,
        execution_period: u64,
        grace_period: u64,
        period_offset: u64,
        open_proposals: u8,
        max_proposals: u8,
        max_proposals_operator: u8,
        new_proposal_threshold: BigUint,
        non_voting_addresses: MultiValueEncoded<ManagedAddress>,
    ) {
        self.require_governance_caller();
        self.require_between_sessions();

        let periods = SessionPeriods {
            campaign: campaign_period,
            voting: voting_period,
            execution: execution_period,
            grace: grace_period,
            offset: period_offset,
        };
        if let Err(message) = periods.validate() {
            sc_panic!(message);
        }
        require!(open_proposals <= max_proposals, INVALID_PROPOSAL_LIMITS);
        require!(max_proposals_operator > 0, INVALID_OPERATOR_LIMIT);
        require!(new_proposal_threshold > 0u64, INVALID_PROPOSAL_THRESHOLD);

        let mut non_voting = self.non_voting_addresses();
        non_voting.clear();
        for address in non_voting_addresses {
            require!(non_voting.insert(address), DUPLICATE_NON_VOTING_ADDRESS);
        }

        let rule = SessionRule {
            periods,
            open_proposals,
            max_proposals,
            max_proposals_operator,
            new_proposal_threshold,
        };
        self.session_rule().set(&rule);
        self.session_rule_updated_event(&rule);
    }

    /// Each entry is `(target, method, majority, quorum, execution threshold)`.
    /// The zero address and the empty method are wildcards; a zero majority
    /// removes an override.
    #[endpoint(updateResolutionRequirements)]
    fn update_resolution_requirements(
        &self,
        requirements: MultiValueEncoded<
            MultiValue5<ManagedAddress, ManagedBuffer, u64, u64, BigUint>,
        >,
    ) {
        self.require_governance_caller();
        require!(!requirements.is_empty(), NO_REQUIREMENTS);

        for entry in requirements {
            let (target, method, majority, quorum, execution_threshold) = entry.into_tuple();
            require!(majority <= PERCENT && quorum <= PERCENT, INVALID_PERCENTAGE);

            let requirement = ResolutionRequirement {
                majority,
                quorum,
                execution_threshold,
            };
            if majority == 0 {
                require!(
                    !(target.is_zero() && method.is_empty()),
                    DEFAULT_MAJORITY_REQUIRED
                );
                self.resolution_requirements(&target, &method).clear();
            } else {
                self.resolution_requirements(&target, &method)
                    .set(&requirement);
            }

            self.resolution_requirement_updated_event(&target, &method, &requirement);
        }
    }

    /// Exact match, then target with any method, then any target with
    /// this method, then the global default.
    #[view(getResolutionRequirement)]
    fn resolution_requirement(
        &self,
        target: ManagedAddress,
        method: ManagedBuffer,
    ) -> ResolutionRequirement<Self::Api> {
        let any_target = ManagedAddress::zero();
        let any_method = ManagedBuffer::new();

        let candidates = [
            (&target, &method),
            (&target, &any_method),
            (&any_target, &method),
        ];
        for (candidate_target, candidate_method) in candidates {
            let mapper = self.resolution_requirements(candidate_target, candidate_method);
            if !mapper.is_empty() {
                return mapper.get();
            }
        }

        self.resolution_requirements(&any_target, &any_method).get()
    }

    fn require_governance_caller(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address()
                || caller == self.blockchain().get_sc_address(),
            NOT_GOVERNANCE
        );
    }

    /// The rule may only change when no session is campaigning, voting or
    /// executing. A planned session counts as "between sessions" as long
    /// as its predecessor is done with ordinary business.
    fn require_between_sessions(&self) {
        let now = self.blockchain().get_block_timestamp();
        let current_id = self.current_session_id().get();
        let settled = |state: SessionState| {
            matches!(
                state,
                SessionState::Undefined
                    | SessionState::Grace
                    | SessionState::Closed
                    | SessionState::Archived
            )
        };

        let current_state = self.session_state_at(current_id, now);
        if current_state == SessionState::Planned {
            let previous_state = self.session_state_at(current_id - 1, now);
            require!(settled(previous_state), SESSION_IN_PROGRESS);
        } else {
            require!(settled(current_state), SESSION_IN_PROGRESS);
        }
    }
}
