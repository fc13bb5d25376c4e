use std::collections::HashSet;

use crate::{
    config::RootConfig,
    errors::{ConfigError, ConfigResult},
};

impl RootConfig {
    /// Checks that account labels and account ids are unique.
    ///
    /// Not run by [crate::load], callers opt in.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut labels = HashSet::new();
        let mut ids = HashSet::new();
        for account in &self.validator.accounts {
            if !labels.insert(account.label.as_str()) {
                return Err(ConfigError::DuplicateAccountLabel(
                    account.label.clone(),
                ));
            }
            if !ids.insert(account.account_id) {
                return Err(ConfigError::DuplicateAccountId(
                    account.account_id,
                ));
            }
        }
        Ok(())
    }
}
