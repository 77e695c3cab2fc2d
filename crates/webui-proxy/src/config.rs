//! The proxy rule table: an ordered list of `{prefix, target}` pairs,
//! loaded once at startup and never mutated afterwards.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Origin the built-in rules point at.
pub const DEFAULT_UPSTREAM: &str = "http://127.0.0.1:8000";

/// Path prefixes the backend serves; everything else belongs to the UI.
const API_PREFIXES: [&str; 8] = [
    "/auth", "/users", "/me", "/projects", "/drawings", "/static", "/health", "/debug",
];

/// One forwarding rule. The recognized options are exactly the prefix and
/// the target origin, nothing else.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxyRule {
    pub prefix: String,
    pub target: String,
}

/// Ordered rule table.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxyConfig {
    pub rules: Vec<ProxyRule>,
}

impl Default for ProxyConfig {
    fn default() -> ProxyConfig {
        ProxyConfig {
            rules: API_PREFIXES
                .iter()
                .map(|prefix| ProxyRule {
                    prefix: (*prefix).to_string(),
                    target: DEFAULT_UPSTREAM.to_string(),
                })
                .collect(),
        }
    }
}

impl ProxyConfig {
    pub fn load(path: &Path) -> anyhow::Result<ProxyConfig> {
        let raw = std::fs::read_to_string(path)?;
        let config: ProxyConfig = toml::from_str(&raw).context("invalid proxy config")?;
        anyhow::ensure!(!config.rules.is_empty(), "proxy config declares no rules");
        Ok(config)
    }

    /// Points every rule at one origin.
    pub fn retarget(&mut self, upstream: String) {
        for rule in &mut self.rules {
            rule.target.clone_from(&upstream);
        }
    }

    /// First rule whose prefix starts `path`, in declared order. A path
    /// containing the prefix somewhere else does not match.
    pub fn matching_rule(&self, path: &str) -> Option<&ProxyRule> {
        self.rules
            .iter()
            .find(|rule| path.starts_with(&rule.prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_table_covers_the_api_prefixes() {
        let config = ProxyConfig::default();
        let prefixes: Vec<&str> = config.rules.iter().map(|rule| rule.prefix.as_str()).collect();
        assert_eq!(
            prefixes,
            ["/auth", "/users", "/me", "/projects", "/drawings", "/static", "/health", "/debug"]
        );
        assert!(
            config
                .rules
                .iter()
                .all(|rule| rule.target == DEFAULT_UPSTREAM)
        );
    }

    #[test]
    fn matching_is_prefix_only() {
        let config = ProxyConfig::default();
        assert_eq!(config.matching_rule("/users").unwrap().prefix, "/users");
        assert_eq!(config.matching_rule("/users/7").unwrap().prefix, "/users");
        assert_eq!(
            config.matching_rule("/static/drawings/a.png").unwrap().prefix,
            "/static"
        );
        assert!(config.matching_rule("/").is_none());
        assert!(config.matching_rule("/image-viewer/7").is_none());
        // Contains "/static", but not at the start.
        assert!(config.matching_rule("/app/static").is_none());
    }

    #[test]
    fn declared_order_wins() {
        let config = ProxyConfig {
            rules: vec![
                ProxyRule {
                    prefix: "/api/v2".to_string(),
                    target: "http://127.0.0.1:9000".to_string(),
                },
                ProxyRule {
                    prefix: "/api".to_string(),
                    target: "http://127.0.0.1:8000".to_string(),
                },
            ],
        };
        assert_eq!(
            config.matching_rule("/api/v2/users").unwrap().target,
            "http://127.0.0.1:9000"
        );
        assert_eq!(
            config.matching_rule("/api/users").unwrap().target,
            "http://127.0.0.1:8000"
        );
    }

    #[test]
    fn retarget_rewrites_every_rule() {
        let mut config = ProxyConfig::default();
        config.retarget("http://10.0.0.5:8000".to_string());
        assert!(
            config
                .rules
                .iter()
                .all(|rule| rule.target == "http://10.0.0.5:8000")
        );
    }

    #[test]
    fn config_file_replaces_the_table() {
        let config: ProxyConfig = toml::from_str(
            r#"
            [[rules]]
            prefix = "/api"
            target = "http://127.0.0.1:9000"
            "#,
        )
        .unwrap();
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].prefix, "/api");
    }

    #[test]
    fn unknown_options_are_rejected() {
        let result: Result<ProxyConfig, _> = toml::from_str(
            r#"
            [[rules]]
            prefix = "/api"
            target = "http://127.0.0.1:9000"
            rewrite = "/v1"
            "#,
        );
        assert!(result.is_err());
    }
}
