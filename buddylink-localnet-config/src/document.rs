use std::{path::PathBuf, sync::Arc};

use log::*;
use solana_pubkey::Pubkey;

use crate::{
    config::{
        AccountDescriptor, Programs, RelayConfig, RootConfig, StorageConfig,
        ValidatorConfig,
    },
    consts,
    errors::ConfigResult,
    ledger::tmp_ledger_dir,
    types::{Commitment, MatchFeatures},
};

/// Accounts cloned from the reference cluster: the programs first, followed
/// by the organization and the referrer/referee state they operate on.
const ACCOUNTS: [(&str, Pubkey, bool); 15] = [
    ("Metadata Program", consts::METADATA_PROGRAM_ID, true),
    ("BuddyLink", consts::BUDDYLINK_PROGRAM_ID, true),
    (
        "Master Organization",
        Pubkey::from_str_const("CRY1kbdXSDkK2fHP8aPMCH3dtwtWBpdc81tyt8XVVunH"),
        false,
    ),
    (
        "Organization",
        Pubkey::from_str_const("Vygga65LjTWs7kJR9Z7JbCpBpcuc7Tn8LkjXoxHomRQ"),
        false,
    ),
    (
        "Mint",
        Pubkey::from_str_const("3Q6dz8cLd4BW1kyuGyUaS7qhTtFP7tGS55Y7fybCUfNy"),
        false,
    ),
    (
        "Referrer Authority",
        Pubkey::from_str_const("DK1FtDDy2RkydDuhprUNKmsyVv8JQb5YDrUZe3GB8ZFc"),
        false,
    ),
    (
        "Referrer GB",
        Pubkey::from_str_const("4jHbHkwjJoZgDBsx774LAmmqxPuGwk65SVdV6yr5Xjsm"),
        false,
    ),
    (
        "Referrer Treasury",
        Pubkey::from_str_const("AsY9QzsVwu6KX9N5Yy85M5jaMYitPYrAC7vuCY6A3YKf"),
        false,
    ),
    (
        "Referrer ATA",
        Pubkey::from_str_const("C4yA9kJKohWhmGKAMGhJWRB827UdR6aVRUu82mGnmNwV"),
        false,
    ),
    (
        "Referrer Member",
        Pubkey::from_str_const("GZ3oVbxW1LY26LsbZKJEqbv7AXiJGsMtW9emm4wdexN9"),
        false,
    ),
    (
        "Referee Authority",
        Pubkey::from_str_const("HFnGHHTEKdggiHVFYEs1VAKKmjPvoD31HQsApkZqHqEx"),
        false,
    ),
    (
        "Referee GB",
        Pubkey::from_str_const("DLCAgJho2Fm3g2SEWHzfiuJdLMRhqUVDWtssqhCeCdYr"),
        false,
    ),
    (
        "Referee Treasury",
        Pubkey::from_str_const("CMLckMKGfa5MTeovcfr9Rhgg31rFcAGS9ZKMXigaHMWJ"),
        false,
    ),
    (
        "Referee ATA",
        Pubkey::from_str_const("C2LZp5DNf6JsjEWoiQiS1jXQPopi3y4K2H7zN6App7mH"),
        false,
    ),
    (
        "Referee Member",
        Pubkey::from_str_const("9xNqfpwRUEyqpURcgNZWFUrurrSRtdQTYpUQGbpJXWpp"),
        false,
    ),
];

/// Builds the localnet document.
///
/// The ledger directory is the only value that is not a literal, it is
/// resolved before anything else so a failure never yields a partial
/// document.
pub fn load() -> ConfigResult<RootConfig> {
    let ledger_dir = tmp_ledger_dir()?;
    let config = document(ledger_dir);
    debug!(
        "Loaded localnet config with {} accounts cloned from {}",
        config.validator.accounts.len(),
        config.validator.accounts_cluster
    );
    Ok(config)
}

fn document(ledger_dir: PathBuf) -> RootConfig {
    let programs: Programs = Arc::from(Vec::new());
    let accounts = ACCOUNTS
        .iter()
        .map(|(label, account_id, executable)| AccountDescriptor {
            label: label.to_string(),
            account_id: *account_id,
            executable: *executable,
        })
        .collect();

    let validator = ValidatorConfig {
        kill_running_validators: true,
        verify_fees: false,
        commitment: Commitment::Confirmed,
        programs,
        json_rpc_url: consts::DEFAULT_JSON_RPC_URL.to_string(),
        websocket_url: consts::DEFAULT_WEBSOCKET_URL.to_string(),
        reset_ledger: true,
        ledger_dir,
        match_features: MatchFeatures::Devnet,
        accounts_cluster: consts::ACCOUNTS_CLUSTER_URL.to_string(),
        accounts,
    };

    RootConfig::new(
        validator,
        StorageConfig {
            storage_id: consts::STORAGE_ID.to_string(),
            clear_on_start: true,
        },
        RelayConfig { enabled: true },
    )
}
