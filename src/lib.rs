#![no_std]

multiversx_sc::imports!();

pub mod constants;
pub mod core_proxy;
pub mod errors;
pub mod events;
pub mod execution;
pub mod ownable_proxy;
pub mod proposal_set;
pub mod proposals;
pub mod rule;
pub mod sessions;
pub mod sponsors;
pub mod storage;
pub mod timeline;
pub mod token_core;
pub mod token_proxy;
pub mod types;
pub mod voting;

use constants::{DEFAULT_EXECUTION_THRESHOLD, DEFAULT_MAJORITY, DEFAULT_QUORUM};
use errors::INVALID_COLLABORATOR;
use types::{ResolutionRequirement, SessionRule};

// ============================================================
// Contract
// ============================================================

/// Voting sessions for a security token.
///
/// Holders define proposals while a session is planned, vote with their
/// balance during the voting phase, and approved resolutions are executed
/// against the token core (or any contract) afterwards. Every phase is
/// derived from the session timestamps at call time.
#[multiversx_sc::contract]
pub trait TokenGovernance:
    storage::StorageModule
    + events::EventsModule
    + token_core::TokenCoreModule
    + sessions::SessionsModule
    + rule::RuleModule
    + sponsors::SponsorsModule
    + proposals::ProposalsModule
    + voting::VotingModule
    + execution::ExecutionModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, token: ManagedAddress, core: ManagedAddress) {
        require!(!token.is_zero() && !core.is_zero(), INVALID_COLLABORATOR);

        self.token().set(&token);
        self.core().set(&core);
        self.oldest_session_id().set(1u64);
        self.current_session_id().set(0u64);
        self.session_rule()
            .set(SessionRule::<Self::Api>::new_default());

        let default_requirement = ResolutionRequirement::<Self::Api> {
            majority: DEFAULT_MAJORITY,
            quorum: DEFAULT_QUORUM,
            execution_threshold: BigUint::from(DEFAULT_EXECUTION_THRESHOLD),
        };
        self.resolution_requirements(&ManagedAddress::zero(), &ManagedBuffer::new())
            .set(&default_requirement);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
