//! # tierleague-core
//!
//! The deterministic season engine for tierleague - THE RULES.
//!
//! This crate models a multi-tier competition: leagues with a fixed roster
//! size, seasons of matches, ranked tables and promotion/relegation between
//! adjacent tiers at season end.
//!
//! ## Layers
//!
//! ```text
//! Competition ──start/end season──▶ League ──play_match──▶ Team ──▶ FormHistory
//!      ▲                              │                     │
//!      └──────── read-only tables ────┴─────────────────────┘
//! ```
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Holds all competition state in memory, owned by one `Competition`
//! - Never renders, loads files or logs; callers receive reports instead
//! - Returns a `TierError` for every expected failure and never panics
//! - Has NO async, NO I/O dependencies (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod competition;
pub mod form;
pub mod league;
pub mod primitives;
pub mod ranking;
pub mod team;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{ErrorKind, GoalLimit, MatchResult, SeasonState, TierError};

// =============================================================================
// RE-EXPORTS: Season Engine
// =============================================================================

pub use competition::{
    Competition, EndOfSeasonReport, SeasonReport, SkippedTransfer, TierOutcome, TierStandings,
    Transfer,
};
pub use form::FormHistory;
pub use league::League;
pub use team::{Team, TeamStats};
