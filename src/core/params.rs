use serde::{Deserialize, Serialize};

/// Environment variable consulted for the registry token when
/// [`LookupParams::token`] is not set.
pub const TOKEN_ENV: &str = "RECEITAWS_API_TOKEN";

/// Lookup parameters suitable for config files and GUI presets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupParams {
    /// Status-change window, in days, requested from the registry
    pub days: u32,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Registry API token; when `None`, `RECEITAWS_API_TOKEN` is consulted
    pub token: Option<String>,
}

impl Default for LookupParams {
    fn default() -> Self {
        Self {
            days: 30,
            timeout_secs: 10,
            token: None,
        }
    }
}

impl LookupParams {
    /// The token to send, if any: the explicit one, else the environment.
    ///
    /// Blank values count as unset, so an empty `RECEITAWS_API_TOKEN`
    /// does not produce an empty Authorization header.
    pub fn resolved_token(&self) -> Option<String> {
        self.token
            .clone()
            .or_else(|| std::env::var(TOKEN_ENV).ok())
            .filter(|t| !t.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = LookupParams::default();
        assert_eq!(params.days, 30);
        assert_eq!(params.timeout_secs, 10);
        assert!(params.token.is_none());
    }

    #[test]
    fn explicit_token_wins() {
        let params = LookupParams {
            token: Some("abc".to_string()),
            ..Default::default()
        };
        assert_eq!(params.resolved_token().as_deref(), Some("abc"));
    }

    #[test]
    fn blank_token_counts_as_unset() {
        let params = LookupParams {
            token: Some("   ".to_string()),
            ..Default::default()
        };
        // Falls through to the environment, which stays untouched here.
        if std::env::var(TOKEN_ENV).is_err() {
            assert!(params.resolved_token().is_none());
        }
    }

    #[test]
    fn serde_round_trip() {
        let params = LookupParams {
            days: 7,
            timeout_secs: 5,
            token: Some("tok".to_string()),
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: LookupParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back.days, 7);
        assert_eq!(back.timeout_secs, 5);
        assert_eq!(back.token.as_deref(), Some("tok"));
    }
}
