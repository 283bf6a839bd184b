multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::constants::{
    DEFAULT_MAX_PROPOSALS, DEFAULT_MAX_PROPOSALS_OPERATOR, DEFAULT_NEW_PROPOSAL_THRESHOLD,
    DEFAULT_OPEN_PROPOSALS,
};
use crate::proposal_set::ProposalSet;
use crate::timeline::{SessionPeriods, SessionTimeline};

// ============================================================
// Session State: derived from timestamps, never stored
// ============================================================

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug,
)]
pub enum SessionState {
    /// Session id 0 or not created yet.
    Undefined,
    /// Created, campaign not started. Proposals can be defined.
    Planned,
    /// Proposals are frozen, voting not open yet.
    Campaign,
    Voting,
    /// Ordinary resolutions can be executed.
    Execution,
    /// Governance resolutions (targeting this contract) can be executed.
    Grace,
    Closed,
    /// Retired by the retention policy; proposals deleted.
    Archived,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalState {
    Undefined,
    Archived,
    Cancelled,
    /// Session planned, proposal still editable.
    Defined,
    /// Campaign or voting in progress.
    Locked,
    /// Resolution executed.
    Resolved,
    /// Session closed without the resolution being executed.
    Closed,
    Approved,
    Rejected,
}

// ============================================================
// Session Rule: singleton, changed only between sessions
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct SessionRule<M: ManagedTypeApi> {
    pub periods: SessionPeriods,
    /// Proposals that only need the flat threshold.
    pub open_proposals: u8,
    pub max_proposals: u8,
    pub max_proposals_operator: u8,
    pub new_proposal_threshold: BigUint<M>,
}

impl<M: ManagedTypeApi> SessionRule<M> {
    pub fn new_default() -> Self {
        SessionRule {
            periods: SessionPeriods::DEFAULT,
            open_proposals: DEFAULT_OPEN_PROPOSALS,
            max_proposals: DEFAULT_MAX_PROPOSALS,
            max_proposals_operator: DEFAULT_MAX_PROPOSALS_OPERATOR,
            new_proposal_threshold: BigUint::from(DEFAULT_NEW_PROPOSAL_THRESHOLD),
        }
    }
}

// ============================================================
// Resolution Requirement: approval thresholds per (target, method)
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ResolutionRequirement<M: ManagedTypeApi> {
    /// Share of participation that must approve, in basis points.
    pub majority: u64,
    /// Share of voting supply that must participate, in basis points.
    pub quorum: u64,
    /// Balance an executor must hold (operators are exempt).
    pub execution_threshold: BigUint<M>,
}

// ============================================================
// Session: one governance cycle
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Session<M: ManagedTypeApi> {
    pub timeline: SessionTimeline,
    pub proposals_count: u8,
    /// Cumulative weight of every voter, counted once per voter.
    pub participation: BigUint<M>,
    /// Token supply when the session was scheduled.
    pub total_supply: BigUint<M>,
    /// Total supply minus non-voting balances, frozen on the first vote.
    pub voting_supply: BigUint<M>,
}

// ============================================================
// Proposal
// ============================================================

/// Call performed on the resolution target when the proposal is executed.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ResolutionAction<M: ManagedTypeApi> {
    pub endpoint: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub url: ManagedBuffer<M>,
    /// Hash of the off-chain proposal document.
    pub proposal_hash: ManagedBuffer<M>,
    pub resolution_target: ManagedAddress<M>,
    pub resolution_action: ResolutionAction<M>,
    /// Proposal that must NOT be approved for this one to execute (0 if none).
    pub depends_on: u8,
    /// Base proposal of the alternative group (0 if none).
    pub alternative_of: u8,
    /// Members of the alternative group, base included. Only set on the base.
    pub alternatives_mask: ProposalSet,
    pub approvals: BigUint<M>,
    pub proposed_by: ManagedAddress<M>,
    pub cancelled: bool,
    pub resolution_executed: bool,
    pub requirement: ResolutionRequirement<M>,
}

// ============================================================
// Sponsor: delegate allowed to vote for a voter until expiry
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Sponsor<M: ManagedTypeApi> {
    pub address: ManagedAddress<M>,
    pub until: u64,
}
