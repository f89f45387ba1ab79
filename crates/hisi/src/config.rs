//! Flag-aware profile resolution on top of `hisi-config`.
//!
//! The config crate knows profiles and the keyring; this module layers the
//! global CLI flags over them and hands core a finished `ClientConfig`.

use std::time::Duration;

use secrecy::SecretString;

use hisi_config::Config;
use hisi_core::ClientConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Everything a command needs to talk to the store.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub profile: String,
    pub client: ClientConfig,
    pub per_page: u32,
}

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .unwrap_or_else(|| config.default_profile_name().to_owned())
}

/// Comma-separated profile names for help text.
pub fn available_profiles(config: &Config) -> String {
    let mut names: Vec<_> = config.profiles.keys().cloned().collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort();
    names.join(", ")
}

/// Load the config file and resolve it against the global flags.
pub fn resolve(global: &GlobalOpts) -> Result<Resolved, CliError> {
    let config = hisi_config::load_config()?;
    resolve_with(global, &config)
}

/// Flag > environment > profile > defaults, for URL, token and timeout.
pub fn resolve_with(global: &GlobalOpts, config: &Config) -> Result<Resolved, CliError> {
    let name = active_profile_name(global, config);
    let (name, profile) = config
        .profile(Some(&name))
        .map_err(|_| CliError::ProfileNotFound {
            name: name.clone(),
            available: available_profiles(config),
        })?;

    // 1. Backend URL (flag / HISI_API_URL > profile)
    let url_str = global
        .api_url
        .clone()
        .filter(|u| !u.trim().is_empty())
        .unwrap_or_else(|| hisi_config::effective_api_url(&profile));
    let url = hisi_config::parse_api_url(&url_str)?;

    // 2. Timeout
    let seconds = global
        .timeout
        .or(profile.timeout)
        .unwrap_or(config.defaults.timeout);

    let mut client = ClientConfig::new(url);
    client.timeout = Duration::from_secs(seconds);

    // 3. Bearer token (flag / HISI_TOKEN > keyring > token_env > plaintext)
    let token = global
        .token
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| SecretString::from(t.to_owned()))
        .or_else(|| hisi_config::resolve_token(&profile, &name));
    if let Some(token) = token {
        client = client.with_token(token);
    }

    Ok(Resolved {
        profile: name,
        client,
        per_page: config.defaults.per_page,
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use hisi_config::Profile;

    use super::*;
    use crate::cli::Cli;

    fn global(args: &[&str]) -> GlobalOpts {
        let mut argv = vec!["hisi"];
        argv.extend_from_slice(args);
        argv.push("dashboard");
        Cli::try_parse_from(argv)
            .unwrap_or_else(|e| panic!("{e}"))
            .global
    }

    fn config_with(name: &str, profile: Profile) -> Config {
        let mut config = Config::default();
        config.profiles.insert(name.into(), profile);
        config
    }

    #[test]
    fn flags_override_profile() {
        let config = config_with(
            "shop",
            Profile {
                api_url: "https://api.hisistudio.com".into(),
                timeout: Some(5),
                ..Profile::default()
            },
        );
        let resolved = resolve_with(
            &global(&[
                "--profile",
                "shop",
                "--api-url",
                "http://localhost:9999",
                "--timeout",
                "60",
                "--token",
                "abc",
            ]),
            &config,
        )
        .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(resolved.profile, "shop");
        assert_eq!(resolved.client.api_url.as_str(), "http://localhost:9999/");
        assert_eq!(resolved.client.timeout, Duration::from_secs(60));
        assert!(resolved.client.token.is_some());
        assert_eq!(resolved.per_page, 20);
    }

    #[test]
    fn profile_timeout_beats_default() {
        let config = config_with(
            "default",
            Profile {
                timeout: Some(7),
                ..Profile::default()
            },
        );
        let resolved = resolve_with(&global(&["--api-url", "http://127.0.0.1:1"]), &config)
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(resolved.client.timeout, Duration::from_secs(7));
    }

    #[test]
    fn unknown_profile_lists_available() {
        let mut config = config_with("prod", Profile::default());
        config.profiles.insert("local".into(), Profile::default());
        let err = resolve_with(&global(&["--profile", "staging"]), &config)
            .err()
            .unwrap_or_else(|| panic!("expected an error"));
        let CliError::ProfileNotFound { name, available } = err else {
            panic!("expected ProfileNotFound");
        };
        assert_eq!(name, "staging");
        assert_eq!(available, "local, prod");
    }

    #[test]
    fn non_http_url_is_rejected() {
        let err = resolve_with(&global(&["--api-url", "ftp://files"]), &Config::default())
            .err()
            .unwrap_or_else(|| panic!("expected an error"));
        assert!(matches!(err, CliError::Validation { .. }));
    }
}
