// ============================================================
// Percentages: basis points, 10_000 = 100%
// ============================================================

pub const PERCENT: u64 = 10_000;

// ============================================================
// Session periods (seconds)
// ============================================================

const DAY: u64 = 86_400;

pub const MIN_PERIOD_LENGTH: u64 = 10;
pub const MAX_PERIOD_LENGTH: u64 = 3_650 * DAY;

pub const DEFAULT_CAMPAIGN_PERIOD: u64 = 5 * DAY;
pub const DEFAULT_VOTING_PERIOD: u64 = 2 * DAY;
pub const DEFAULT_EXECUTION_PERIOD: u64 = DAY;
pub const DEFAULT_GRACE_PERIOD: u64 = 6 * DAY;
pub const DEFAULT_PERIOD_OFFSET: u64 = 0;

// ============================================================
// Proposal limits
// ============================================================

/// Proposal ids are 8-bit: at most 255 proposals per session.
pub const MAX_PROPOSALS_PER_SESSION: u8 = 255;

pub const DEFAULT_OPEN_PROPOSALS: u8 = 5;
pub const DEFAULT_MAX_PROPOSALS: u8 = 10;
pub const DEFAULT_MAX_PROPOSALS_OPERATOR: u8 = 25;
pub const DEFAULT_NEW_PROPOSAL_THRESHOLD: u64 = 1;

// ============================================================
// Default resolution requirement
// ============================================================

pub const DEFAULT_MAJORITY: u64 = 5_000;
pub const DEFAULT_QUORUM: u64 = 4_000;
pub const DEFAULT_EXECUTION_THRESHOLD: u64 = 1;

// ============================================================
// Retention: old sessions are archived once either limit is hit
// ============================================================

pub const SESSION_RETENTION_COUNT: u64 = 10;
pub const SESSION_RETENTION_PERIOD: u64 = 365 * DAY;

/// Wildcard passed to the core for "any sender" / "any receiver" locks.
pub const ANY_ADDRESSES: [u8; 32] = [0xff; 32];
