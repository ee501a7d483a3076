use std::{fs, path::Path};

use crate::{domain::Account, errors::WalletError};

/// Writes the account snapshot to disk atomically by staging to a temporary file.
pub fn save_account_to_file(account: &Account, path: &Path) -> Result<(), WalletError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(account)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads an account snapshot from disk, returning structured errors on failure.
pub fn load_account_from_file(path: &Path) -> Result<Account, WalletError> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}
