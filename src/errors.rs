//! Abort messages. The prefix before the colon is the failure category.

// ── configuration-invalid ──

pub const INVALID_CAMPAIGN_PERIOD: &str = "configuration-invalid: campaign period out of bounds";
pub const INVALID_VOTING_PERIOD: &str = "configuration-invalid: voting period out of bounds";
pub const INVALID_EXECUTION_PERIOD: &str = "configuration-invalid: execution period out of bounds";
pub const INVALID_GRACE_PERIOD: &str =
    "configuration-invalid: grace period must exceed campaign period";
pub const INVALID_PROPOSAL_LIMITS: &str =
    "configuration-invalid: open proposals exceed max proposals";
pub const INVALID_OPERATOR_LIMIT: &str =
    "configuration-invalid: operator proposal limit must be positive";
pub const INVALID_PROPOSAL_THRESHOLD: &str =
    "configuration-invalid: new proposal threshold must be positive";
pub const INVALID_PERCENTAGE: &str = "configuration-invalid: percentage above 100%";
pub const DEFAULT_MAJORITY_REQUIRED: &str =
    "configuration-invalid: default requirement needs a majority";
pub const NO_REQUIREMENTS: &str = "configuration-invalid: no requirement given";
pub const INVALID_COLLABORATOR: &str = "configuration-invalid: zero collaborator address";

// ── not-found ──

pub const SESSION_NOT_FOUND: &str = "not-found: session";
pub const PROPOSAL_NOT_FOUND: &str = "not-found: proposal";
pub const NOT_A_CONTRACT: &str = "not-found: address is not a contract";

// ── wrong-phase ──

pub const NOT_READY_FOR_NEW_SESSION: &str = "wrong-phase: not ready for a new session";
pub const SESSION_NOT_PLANNED: &str = "wrong-phase: session is not planned";
pub const SESSION_NOT_VOTING: &str = "wrong-phase: session is not voting";
pub const SESSION_IN_PROGRESS: &str = "wrong-phase: session in progress";
pub const NO_EXECUTABLE_SESSION: &str = "wrong-phase: no session open for execution";
pub const RESOLUTION_OUTSIDE_EXECUTION: &str =
    "wrong-phase: resolution only executable during execution";
pub const SELF_RESOLUTION_OUTSIDE_GRACE: &str =
    "wrong-phase: governance resolution only executable during grace";
pub const PROPOSAL_NOT_APPROVED: &str = "wrong-phase: proposal is not approved";
pub const DEPENDENCY_APPROVED: &str = "wrong-phase: dependency is approved";
pub const PROPOSAL_CANCELLED: &str = "wrong-phase: proposal is cancelled";
pub const RETENTION_NOT_REACHED: &str = "wrong-phase: session retention not reached";

// ── authorization ──

pub const NOT_GOVERNANCE: &str = "authorization: only owner or governance";
pub const NOT_PROPOSER: &str = "authorization: only proposer";
pub const NOT_CONTRACT_OWNER: &str = "authorization: only contract owner";
pub const VOTE_NOT_AUTHORIZED: &str = "authorization: cannot vote for this voter";

// ── insufficient-balance ──

pub const BELOW_PROPOSAL_THRESHOLD: &str = "insufficient-balance: below proposal threshold";
pub const BELOW_EXECUTION_THRESHOLD: &str = "insufficient-balance: below execution threshold";
pub const NO_VOTING_WEIGHT: &str = "insufficient-balance: no voting weight";

// ── structural-conflict ──

pub const TOO_MANY_PROPOSALS: &str = "structural-conflict: too many proposals";
pub const INVALID_DEPENDENCY: &str = "structural-conflict: invalid dependency";
pub const INVALID_ALTERNATIVE: &str = "structural-conflict: invalid alternative";
pub const MALFORMED_VOTE: &str = "structural-conflict: vote selects unknown proposals";
pub const CONFLICTING_ALTERNATIVES: &str =
    "structural-conflict: vote selects several alternatives";
pub const ALREADY_VOTED: &str = "structural-conflict: already voted";
pub const NO_VOTERS: &str = "structural-conflict: no voters";
pub const NO_PROPOSALS: &str = "structural-conflict: no proposals";
pub const DUPLICATE_NON_VOTING_ADDRESS: &str =
    "structural-conflict: duplicate non-voting address";

// ── external-call-failure ──

pub const TRANSFER_LOCK_REJECTED: &str = "external-call-failure: transfer lock rejected";
