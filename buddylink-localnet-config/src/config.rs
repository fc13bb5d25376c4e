use std::{fmt::Display, path::PathBuf, sync::Arc};

use serde::Serialize;
use solana_pubkey::Pubkey;
use url::Url;

use crate::{
    errors::{ConfigError, ConfigResult},
    types::{pubkey_serialize, Commitment, MatchFeatures},
};

/// Shared, read-only handle to the programs deployed into the validator.
/// The top-level document and the validator section hold the same handle.
pub type Programs = Arc<[ProgramDescriptor]>;

// -----------------
// AccountDescriptor
// -----------------
/// An on-chain account cloned from the reference cluster.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountDescriptor {
    /// Human readable name, unique within the document.
    pub label: String,
    #[serde(serialize_with = "pubkey_serialize")]
    pub account_id: Pubkey,
    /// `true` if the account holds loadable program code.
    pub executable: bool,
}

// -----------------
// ProgramDescriptor
// -----------------
/// A compiled program deployed into the validator at genesis.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProgramDescriptor {
    pub label: String,
    #[serde(serialize_with = "pubkey_serialize")]
    pub program_id: Pubkey,
    /// File system path to the compiled program (.so file).
    pub deploy_path: PathBuf,
}

// -----------------
// ValidatorConfig
// -----------------
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorConfig {
    pub kill_running_validators: bool,
    pub verify_fees: bool,
    pub commitment: Commitment,
    pub programs: Programs,
    pub json_rpc_url: String,
    /// Empty when the harness should derive it from [Self::json_rpc_url].
    pub websocket_url: String,
    pub reset_ledger: bool,
    pub ledger_dir: PathBuf,
    pub match_features: MatchFeatures,
    pub accounts_cluster: String,
    pub accounts: Vec<AccountDescriptor>,
}

impl ValidatorConfig {
    pub fn rpc_url(&self) -> ConfigResult<Url> {
        parse_url(&self.json_rpc_url)
    }

    /// Port the local RPC service listens on, falling back to the default
    /// port of the URL scheme.
    pub fn rpc_port(&self) -> ConfigResult<u16> {
        self.rpc_url()?
            .port_or_known_default()
            .ok_or_else(|| {
                ConfigError::MissingPort(self.json_rpc_url.clone())
            })
    }

    /// The subscription endpoint, either configured explicitly or derived
    /// from the RPC endpoint.
    pub fn effective_websocket_url(&self) -> ConfigResult<Url> {
        if !self.websocket_url.is_empty() {
            return parse_url(&self.websocket_url);
        }
        let mut url = self.rpc_url()?;
        let scheme = match url.scheme() {
            "http" => "ws",
            "https" => "wss",
            other => {
                return Err(ConfigError::UnsupportedScheme {
                    url: self.json_rpc_url.clone(),
                    scheme: other.to_string(),
                })
            }
        };
        // http(s) -> ws(s) is always accepted
        let _ = url.set_scheme(scheme);
        // By solana convention, websocket listens on rpc port + 1
        if let Some(port) = url.port().and_then(|port| port.checked_add(1)) {
            let _ = url.set_port(Some(port));
        }
        Ok(url)
    }

    pub fn accounts_cluster_url(&self) -> ConfigResult<Url> {
        parse_url(&self.accounts_cluster)
    }

    pub fn program_accounts(
        &self,
    ) -> impl Iterator<Item = &AccountDescriptor> + '_ {
        self.accounts.iter().filter(|account| account.executable)
    }

    pub fn data_accounts(
        &self,
    ) -> impl Iterator<Item = &AccountDescriptor> + '_ {
        self.accounts.iter().filter(|account| !account.executable)
    }

    /// Launch arguments for `solana-test-validator`.
    ///
    /// Accounts are cloned from [Self::accounts_cluster] in the order they
    /// are listed, executable accounts are cloned together with their
    /// program data account.
    pub fn test_validator_args(&self) -> ConfigResult<Vec<String>> {
        let mut args = vec![
            "--ledger".to_string(),
            self.ledger_dir.display().to_string(),
            "--rpc-port".to_string(),
            self.rpc_port()?.to_string(),
        ];
        if self.reset_ledger {
            args.push("--reset".to_string());
        }

        for program in self.programs.iter() {
            args.push("--bpf-program".to_string());
            args.push(program.program_id.to_string());
            args.push(program.deploy_path.display().to_string());
        }

        if !self.accounts.is_empty() {
            args.push("--url".to_string());
            args.push(self.accounts_cluster.clone());
        }
        for account in &self.accounts {
            let flag = if account.executable {
                "--clone-upgradeable-program"
            } else {
                "--clone"
            };
            args.push(flag.to_string());
            args.push(account.account_id.to_string());
        }

        Ok(args)
    }
}

fn parse_url(url: &str) -> ConfigResult<Url> {
    Url::parse(url).map_err(|source| ConfigError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

// -----------------
// StorageConfig
// -----------------
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StorageConfig {
    pub storage_id: String,
    pub clear_on_start: bool,
}

// -----------------
// RelayConfig
// -----------------
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelayConfig {
    pub enabled: bool,
}

// -----------------
// RootConfig
// -----------------
/// The document read by the test harness before it launches a validator.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RootConfig {
    /// Same handle as `validator.programs`.
    pub programs: Programs,
    pub validator: ValidatorConfig,
    pub storage: StorageConfig,
    pub relay: RelayConfig,
}

impl RootConfig {
    pub fn new(
        validator: ValidatorConfig,
        storage: StorageConfig,
        relay: RelayConfig,
    ) -> Self {
        Self {
            programs: Arc::clone(&validator.programs),
            validator,
            storage,
            relay,
        }
    }

    /// Renders the document in the shape the harness consumes.
    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Display for RootConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match toml::to_string_pretty(self) {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}
