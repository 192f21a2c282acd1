use anyhow::Context;
use dotfield_core::UserConfig;

/// Parse the host's JSON configuration. Absent or blank input means the stock
/// defaults; unknown values are left for normalization to reject.
pub fn parse_user_config(raw: Option<&str>) -> anyhow::Result<UserConfig> {
    match raw.map(str::trim) {
        None | Some("") => Ok(UserConfig::default()),
        Some(json) => serde_json::from_str(json).context("invalid dotfield config JSON"),
    }
}
