use solana_pubkey::Pubkey;

// Local Validator Endpoints
pub const DEFAULT_JSON_RPC_URL: &str = "http://127.0.0.1:8899/";
pub const DEFAULT_WEBSOCKET_URL: &str = "";

// Reference Clusters
pub const MAINNET_URL: &str = "https://api.mainnet-beta.solana.com/";
pub const DEVNET_URL: &str = "https://api.devnet.solana.com/";
pub const TESTNET_URL: &str = "https://api.testnet.solana.com/";

/// Cluster the accounts are cloned from, written without the trailing slash
/// the harness was originally configured with.
pub const ACCOUNTS_CLUSTER_URL: &str = "https://api.devnet.solana.com";

// Ledger
pub const LEDGER_DIR_NAME: &str = "amman-ledger";

// Storage & Relay
pub const STORAGE_ID: &str = "js-next-sdk";

// Programs
pub const METADATA_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

/// BuddyLink deployment on devnet (also used against testnet).
pub const BUDDYLINK_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("9zE4EQ5tJbEeMYwtS2w8KrSHTtTW4UPqwfbBSEkUrNCA");

pub const BUDDYLINK_MAINNET_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("BUDDYtQp7Di1xfojiCSVDksiYLQx511DPdj2nbtG9Yu5");
