use serde::{Serialize, Serializer};
use solana_pubkey::Pubkey;
use strum::{Display, EnumString};

use crate::consts;

// -----------------
// Commitment
// -----------------
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

// -----------------
// MatchFeatures
// -----------------
/// The reference cluster whose feature set the local validator mirrors.
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum MatchFeatures {
    #[default]
    Devnet,
    Testnet,
    MainnetBeta,
}

impl MatchFeatures {
    /// Public RPC endpoint of the cluster.
    pub fn cluster_url(&self) -> &'static str {
        match self {
            Self::Devnet => consts::DEVNET_URL,
            Self::Testnet => consts::TESTNET_URL,
            Self::MainnetBeta => consts::MAINNET_URL,
        }
    }

    /// The BuddyLink program deployment reachable on this cluster.
    pub fn buddylink_program_id(&self) -> Pubkey {
        match self {
            Self::Devnet | Self::Testnet => consts::BUDDYLINK_PROGRAM_ID,
            Self::MainnetBeta => consts::BUDDYLINK_MAINNET_PROGRAM_ID,
        }
    }
}

pub(crate) fn pubkey_serialize<S>(
    key: &Pubkey,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    key.to_string().serialize(serializer)
}
