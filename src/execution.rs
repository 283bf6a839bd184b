multiversx_sc::imports!();

use crate::errors::{
    BELOW_EXECUTION_THRESHOLD, DEPENDENCY_APPROVED, NO_EXECUTABLE_SESSION, NO_PROPOSALS,
    PROPOSAL_NOT_APPROVED, PROPOSAL_NOT_FOUND, RESOLUTION_OUTSIDE_EXECUTION,
    SELF_RESOLUTION_OUTSIDE_GRACE,
};
use crate::types::{ProposalState, ResolutionAction, SessionState};

/// Executes approved resolutions.
///
/// Ordinary resolutions run during the execution phase. Resolutions that
/// target this contract (rule or requirement changes) run during grace,
/// possibly after the next session has already been planned.
#[multiversx_sc::module]
pub trait ExecutionModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::token_core::TokenCoreModule
    + crate::sessions::SessionsModule
    + crate::sponsors::SponsorsModule
    + crate::voting::VotingModule
{
    #[endpoint(executeResolutions)]
    fn execute_resolutions(&self, proposal_ids: MultiValueEncoded<u8>) {
        require!(!proposal_ids.is_empty(), NO_PROPOSALS);

        let now = self.blockchain().get_block_timestamp();
        let caller = self.blockchain().get_caller();
        let (session_id, session_state) = self.executable_session(now);
        let proposals_count = self.sessions(session_id).get().proposals_count;
        let own_address = self.blockchain().get_sc_address();

        // Operators execute regardless of their balance.
        let caller_balance = if self.is_token_operator(&caller) {
            None
        } else {
            Some(self.token_balance_of(&caller))
        };

        for proposal_id in proposal_ids {
            require!(
                proposal_id != 0 && proposal_id <= proposals_count,
                PROPOSAL_NOT_FOUND
            );
            let mut proposal = self.proposals(session_id, proposal_id).get();

            if let Some(balance) = &caller_balance {
                require!(
                    *balance >= proposal.requirement.execution_threshold,
                    BELOW_EXECUTION_THRESHOLD
                );
            }

            if proposal.resolution_target == own_address {
                require!(
                    session_state == SessionState::Grace,
                    SELF_RESOLUTION_OUTSIDE_GRACE
                );
            } else {
                require!(
                    session_state == SessionState::Execution,
                    RESOLUTION_OUTSIDE_EXECUTION
                );
            }

            require!(
                self.proposal_state_at(session_id, proposal_id, now) == ProposalState::Approved,
                PROPOSAL_NOT_APPROVED
            );
            // A linked proposal blocks execution while it is itself approved.
            if proposal.depends_on != 0 {
                require!(
                    self.proposal_state_at(session_id, proposal.depends_on, now)
                        != ProposalState::Approved,
                    DEPENDENCY_APPROVED
                );
            }

            proposal.resolution_executed = true;
            self.proposals(session_id, proposal_id).set(&proposal);

            self.invoke_resolution(&proposal.resolution_target, &proposal.resolution_action);
            self.resolution_executed_event(session_id, proposal_id);
        }
    }

    /// The current session while it executes or is in grace, otherwise the
    /// previous one if it is still in grace.
    fn executable_session(&self, now: u64) -> (u64, SessionState) {
        let current_id = self.current_session_id().get();
        let current_state = self.session_state_at(current_id, now);
        if matches!(current_state, SessionState::Execution | SessionState::Grace) {
            return (current_id, current_state);
        }

        require!(current_id > 1, NO_EXECUTABLE_SESSION);
        let previous_id = current_id - 1;
        require!(
            self.session_state_at(previous_id, now) == SessionState::Grace,
            NO_EXECUTABLE_SESSION
        );
        (previous_id, SessionState::Grace)
    }

    /// Performs the resolution call. A failing call reverts the whole
    /// batch. The zero address marks an informational resolution with
    /// nothing to call.
    fn invoke_resolution(&self, target: &ManagedAddress, action: &ResolutionAction<Self::Api>) {
        if target.is_zero() {
            return;
        }
        self.tx()
            .to(target)
            .raw_call(action.endpoint.clone())
            .arguments_raw(action.arguments.clone().into())
            .sync_call();
    }
}
