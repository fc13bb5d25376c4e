use std::{collections::BTreeSet, env, ffi::OsString, sync::Arc};

use buddylink_localnet_config::{load, Commitment, ConfigError, MatchFeatures};
use serde_json::Value;
use serial_test::serial;
use tempfile::TempDir;

const BASE58_ALPHABET: &str =
    "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Restores the previous value of an environment variable on drop.
/// NOTE: only use it from `#[serial]` tests
struct EnvVarGuard {
    var: &'static str,
    previous: Option<OsString>,
}

impl EnvVarGuard {
    fn new(var: &'static str, val: impl Into<OsString>) -> Self {
        let previous = env::var_os(var);
        env::set_var(var, val.into());
        Self { var, previous }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match self.previous.take() {
            Some(val) => env::set_var(self.var, val),
            None => env::remove_var(self.var),
        }
    }
}

fn keys(value: &Value) -> BTreeSet<&str> {
    value
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect()
}

#[test]
#[serial]
fn test_document_has_exact_field_set() {
    init_logger();
    let config = load().unwrap();
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(
        keys(&json),
        BTreeSet::from(["programs", "validator", "storage", "relay"])
    );
    assert_eq!(
        keys(&json["validator"]),
        BTreeSet::from([
            "killRunningValidators",
            "verifyFees",
            "commitment",
            "programs",
            "jsonRpcUrl",
            "websocketUrl",
            "resetLedger",
            "ledgerDir",
            "matchFeatures",
            "accountsCluster",
            "accounts",
        ])
    );
    assert_eq!(
        keys(&json["storage"]),
        BTreeSet::from(["storageId", "clearOnStart"])
    );
    assert_eq!(keys(&json["relay"]), BTreeSet::from(["enabled"]));
    for account in json["validator"]["accounts"].as_array().unwrap() {
        assert_eq!(
            keys(account),
            BTreeSet::from(["label", "accountId", "executable"])
        );
    }
}

#[test]
#[serial]
fn test_document_renders_literal_strings() {
    init_logger();
    let json = serde_json::to_value(load().unwrap()).unwrap();
    let validator = &json["validator"];

    assert_eq!(validator["commitment"], "confirmed");
    assert_eq!(validator["matchFeatures"], "devnet");
    assert_eq!(validator["jsonRpcUrl"], "http://127.0.0.1:8899/");
    assert_eq!(validator["websocketUrl"], "");
    assert_eq!(validator["accountsCluster"], "https://api.devnet.solana.com");
    assert_eq!(json["programs"], Value::Array(vec![]));
    assert_eq!(validator["programs"], Value::Array(vec![]));
    assert_eq!(
        validator["accounts"][1]["accountId"],
        "9zE4EQ5tJbEeMYwtS2w8KrSHTtTW4UPqwfbBSEkUrNCA"
    );
}

#[test]
#[serial]
fn test_load_scenario() {
    init_logger();
    let config = load().unwrap();

    assert_eq!(config.validator.json_rpc_url, "http://127.0.0.1:8899/");
    assert!(config.validator.reset_ledger);
    assert_eq!(config.storage.storage_id, "js-next-sdk");
    assert!(config.relay.enabled);
    assert_eq!(config.validator.commitment, Commitment::Confirmed);
    assert_eq!(config.validator.match_features, MatchFeatures::Devnet);
    assert!(Arc::ptr_eq(&config.programs, &config.validator.programs));
}

#[test]
#[serial]
fn test_account_ids_are_base58_keys() {
    init_logger();
    let config = load().unwrap();
    let accounts = &config.validator.accounts;

    assert_eq!(accounts.len(), 15);
    assert_eq!(accounts[0].label, "Metadata Program");
    assert_eq!(accounts[1].label, "BuddyLink");
    assert_eq!(config.validator.program_accounts().count(), 2);
    assert_eq!(config.validator.data_accounts().count(), 13);

    for account in accounts {
        let encoded = account.account_id.to_string();
        assert!(
            encoded.chars().all(|c| BASE58_ALPHABET.contains(c)),
            "{} has a non base58 id: {}",
            account.label,
            encoded
        );
        let decoded = bs58::decode(&encoded).into_vec().unwrap();
        assert_eq!(decoded.len(), 32, "{} id length", account.label);
        assert_eq!(decoded, account.account_id.to_bytes());
    }
}

#[test]
#[serial]
#[cfg(unix)]
fn test_ledger_dir_follows_tmpdir() {
    init_logger();
    let dir = TempDir::new().unwrap();
    let _env = EnvVarGuard::new("TMPDIR", dir.path());

    let config = load().unwrap();

    assert_eq!(
        config.validator.ledger_dir,
        dir.path().canonicalize().unwrap().join("amman-ledger")
    );
    let args = config.validator.test_validator_args().unwrap();
    assert_eq!(args[0], "--ledger");
    assert_eq!(args[1], config.validator.ledger_dir.display().to_string());
}

#[test]
#[serial]
#[cfg(unix)]
fn test_unresolvable_tmpdir_fails_whole_load() {
    init_logger();
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone");
    let _env = EnvVarGuard::new("TMPDIR", &missing);

    let err = load().unwrap_err();

    assert!(
        matches!(&err, ConfigError::LedgerDir { path, .. } if *path == missing),
        "unexpected error: {err}"
    );
}

#[test]
#[serial]
fn test_display_renders_toml() {
    init_logger();
    let rendered = load().unwrap().to_string();

    assert!(rendered.contains(r#"storageId = "js-next-sdk""#));
    assert!(rendered.contains("[[validator.accounts]]"));
    assert!(rendered.contains(r#"label = "Referee Member""#));
}

#[test]
#[serial]
fn test_json_rendering_matches_serialized_value() {
    init_logger();
    let config = load().unwrap();
    let rendered = config.to_json_pretty().unwrap();
    let parsed: Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(parsed, serde_json::to_value(&config).unwrap());
}
