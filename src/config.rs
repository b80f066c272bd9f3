//! Configuration management for txflood
//!
//! Loads configuration from TOML files with environment variable substitution.

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub node: NodeConfig,
    pub accounts: AccountsConfig,
    pub flood: FloodConfig,
    pub funding: FundingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeConfig {
    pub rpc_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccountsConfig {
    /// Hex-encoded private keys of the source accounts
    pub private_keys: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FloodConfig {
    /// Destination address for every value transfer
    pub destination: String,
    /// Human-readable amount per transfer, e.g. "1 ston"
    pub value: String,
    pub gas_limit: u64,
    /// Transactions built per source account
    pub txs_per_account: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FundingConfig {
    /// Hex-encoded private key of the funder account
    pub funder_key: String,
    /// Human-readable amount per funded account, e.g. "100 klay"
    pub amount: String,
    pub gas_limit: u64,
}

impl Settings {
    /// Load settings from the default location or `TXFLOOD_CONFIG`
    pub fn load() -> Result<Self> {
        let config_path = env::var("TXFLOOD_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config/default.toml"));

        Self::load_from(&config_path)
    }

    /// Load settings from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        // Substitute environment variables
        let config_str = substitute_env_vars(&config_str);

        let settings: Settings =
            toml::from_str(&config_str).with_context(|| "Failed to parse configuration")?;

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        if self.node.rpc_url.is_empty() {
            anyhow::bail!("node.rpc_url must be set");
        }

        if self.accounts.private_keys.is_empty() {
            anyhow::bail!("At least one source account private key must be configured");
        }

        if self.flood.destination.is_empty() {
            anyhow::bail!("flood.destination must be set");
        }

        if self.funding.funder_key.is_empty() {
            anyhow::bail!("funding.funder_key must be set");
        }

        if self.flood.gas_limit == 0 || self.funding.gas_limit == 0 {
            anyhow::bail!("Gas limits must be non-zero");
        }

        Ok(())
    }
}

lazy_static! {
    static ref ENV_VAR_RE: Regex = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
}

/// Substitute environment variables in the format ${VAR_NAME}
fn substitute_env_vars(input: &str) -> String {
    let mut result = input.to_string();

    for cap in ENV_VAR_RE.captures_iter(input) {
        let var_name = &cap[1];
        let var_value = env::var(var_name).unwrap_or_default();
        result = result.replace(&cap[0], &var_value);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_env_var_substitution() {
        env::set_var("TEST_VAR", "test_value");
        let input = "url = \"https://api.example.com/${TEST_VAR}/endpoint\"";
        let result = substitute_env_vars(input);
        assert_eq!(
            result,
            "url = \"https://api.example.com/test_value/endpoint\""
        );
    }

    fn sample_config() -> &'static str {
        r#"
[node]
rpc_url = "http://127.0.0.1:8551"

[accounts]
private_keys = [
    "0x50e57534f668886dc6742912169a4bebf497cad69ab74eca4b4e1392268c42cb",
]

[flood]
destination = "0x8084fed6b1847448c24692470fc3b2ed87f9eb47"
value = "1 ston"
gas_limit = 25000
txs_per_account = 5

[funding]
funder_key = "${TXFLOOD_FUNDER_KEY}"
amount = "100 klay"
gas_limit = 25000
"#
    }

    #[test]
    fn test_load_from_file() {
        env::set_var(
            "TXFLOOD_FUNDER_KEY",
            "0xacd28c553ada54b9266b7fa022cf351c19387f42d1fd2d171a3acae8baaafead",
        );

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_config().as_bytes()).unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.node.rpc_url, "http://127.0.0.1:8551");
        assert_eq!(settings.accounts.private_keys.len(), 1);
        assert_eq!(settings.flood.txs_per_account, 5);
        assert!(settings.funding.funder_key.starts_with("0xacd28c"));
    }

    #[test]
    fn test_rejects_empty_funder_key() {
        // an unset ${VAR} substitutes to the empty string
        let config = sample_config().replace(
            "funder_key = \"${TXFLOOD_FUNDER_KEY}\"",
            "funder_key = \"\"",
        );
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.as_bytes()).unwrap();

        let err = Settings::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("funding.funder_key"));
    }

    #[test]
    fn test_rejects_empty_accounts() {
        let config = sample_config().replace(
            "private_keys = [\n    \"0x50e57534f668886dc6742912169a4bebf497cad69ab74eca4b4e1392268c42cb\",\n]",
            "private_keys = []",
        );
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(config.as_bytes()).unwrap();

        assert!(Settings::load_from(file.path()).is_err());
    }
}
