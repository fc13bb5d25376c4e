use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::*;

use crate::{
    consts,
    errors::{ConfigError, ConfigResult},
};

/// Resolves the ledger directory the test harness uses by default:
/// `<os temp dir>/amman-ledger`.
///
/// The temp dir is canonicalized so that the validator and the harness agree
/// on the same path even when it is reached through a symlink. The ledger
/// directory itself is not created, the validator owns it.
pub fn tmp_ledger_dir() -> ConfigResult<PathBuf> {
    ledger_dir_in(&std::env::temp_dir())
}

pub(crate) fn ledger_dir_in(base: &Path) -> ConfigResult<PathBuf> {
    let base =
        fs::canonicalize(base).map_err(|source| ConfigError::LedgerDir {
            path: base.to_path_buf(),
            source,
        })?;
    let ledger_dir = base.join(consts::LEDGER_DIR_NAME);
    // The harness receives the ledger dir as a string
    if ledger_dir.to_str().is_none() {
        return Err(ConfigError::LedgerDir {
            path: base,
            source: io::Error::new(
                io::ErrorKind::InvalidData,
                "path is not valid UTF-8",
            ),
        });
    }
    debug!("Resolved ledger directory: {}", ledger_dir.display());
    Ok(ledger_dir)
}
