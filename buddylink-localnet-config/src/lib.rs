//! Configuration document for the BuddyLink local test validator.
//!
//! The document tells the test harness which endpoints the local validator
//! exposes, how its ledger is handled and which devnet accounts are cloned
//! into it. Everything but the ledger directory is a literal.

pub mod config;
pub mod consts;
mod document;
pub mod errors;
pub mod ledger;
pub mod types;
mod validation;

pub use config::{
    AccountDescriptor, ProgramDescriptor, Programs, RelayConfig, RootConfig,
    StorageConfig, ValidatorConfig,
};
pub use document::load;
pub use errors::{ConfigError, ConfigResult};
pub use types::{Commitment, MatchFeatures};
