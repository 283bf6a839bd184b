multiversx_sc::imports!();

use crate::timeline::SessionTimeline;
use crate::types::{ResolutionRequirement, SessionRule};

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("sessionRuleUpdated")]
    fn session_rule_updated_event(&self, rule: &SessionRule<Self::Api>);

    #[event("resolutionRequirementUpdated")]
    fn resolution_requirement_updated_event(
        &self,
        #[indexed] target: &ManagedAddress,
        #[indexed] method: &ManagedBuffer,
        requirement: &ResolutionRequirement<Self::Api>,
    );

    #[event("sponsorDefined")]
    fn sponsor_defined_event(
        &self,
        #[indexed] voter: &ManagedAddress,
        #[indexed] sponsor: &ManagedAddress,
        until: u64,
    );

    #[event("proposalDefined")]
    fn proposal_defined_event(
        &self,
        #[indexed] session_id: u64,
        #[indexed] proposal_id: u8,
        proposed_by: &ManagedAddress,
    );

    #[event("proposalUpdated")]
    fn proposal_updated_event(&self, #[indexed] session_id: u64, #[indexed] proposal_id: u8);

    #[event("proposalCancelled")]
    fn proposal_cancelled_event(&self, #[indexed] session_id: u64, #[indexed] proposal_id: u8);

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] session_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] votes: &BigUint,
        weight: &BigUint,
    );

    #[event("sessionScheduled")]
    fn session_scheduled_event(&self, #[indexed] session_id: u64, timeline: &SessionTimeline);

    #[event("sessionArchived")]
    fn session_archived_event(&self, #[indexed] session_id: u64);

    #[event("resolutionExecuted")]
    fn resolution_executed_event(&self, #[indexed] session_id: u64, #[indexed] proposal_id: u8);
}
