multiversx_sc::imports!();

use crate::types::{Proposal, ResolutionRequirement, Session, SessionRule, Sponsor};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Collaborators ──

    #[view(getToken)]
    #[storage_mapper("token")]
    fn token(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getCore)]
    #[storage_mapper("core")]
    fn core(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Configuration ──

    #[view(getSessionRule)]
    #[storage_mapper("sessionRule")]
    fn session_rule(&self) -> SingleValueMapper<SessionRule<Self::Api>>;

    #[view(getNonVotingAddresses)]
    #[storage_mapper("nonVotingAddresses")]
    fn non_voting_addresses(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Keyed by (target | zero address, endpoint | empty name).
    #[storage_mapper("resolutionRequirements")]
    fn resolution_requirements(
        &self,
        target: &ManagedAddress,
        method: &ManagedBuffer,
    ) -> SingleValueMapper<ResolutionRequirement<Self::Api>>;

    // ── Voters ──

    #[storage_mapper("sponsors")]
    fn sponsors(&self, voter: &ManagedAddress) -> SingleValueMapper<Sponsor<Self::Api>>;

    #[view(getLastVoteOf)]
    #[storage_mapper("lastVoteAt")]
    fn last_vote_at(&self, voter: &ManagedAddress) -> SingleValueMapper<u64>;

    // ── Sessions ──

    #[view(getOldestSessionId)]
    #[storage_mapper("oldestSessionId")]
    fn oldest_session_id(&self) -> SingleValueMapper<u64>;

    #[view(getCurrentSessionId)]
    #[storage_mapper("currentSessionId")]
    fn current_session_id(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("sessions")]
    fn sessions(&self, session_id: u64) -> SingleValueMapper<Session<Self::Api>>;

    #[storage_mapper("proposals")]
    fn proposals(
        &self,
        session_id: u64,
        proposal_id: u8,
    ) -> SingleValueMapper<Proposal<Self::Api>>;
}
