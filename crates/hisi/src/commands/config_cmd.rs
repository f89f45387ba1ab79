//! Config subcommand handlers.

use dialoguer::{Input, Select};
use secrecy::SecretString;

use hisi_config::{Config, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{active_profile_name, available_profiles};
use crate::error::CliError;
use crate::output;

// ── Helpers ─────────────────────────────────────────────────────────

/// Map a dialoguer / interactive I/O failure into CliError.
fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// Copy of the config safe to print: plaintext tokens are masked.
fn redacted(cfg: &Config) -> Config {
    let mut cfg = cfg.clone();
    for profile in cfg.profiles.values_mut() {
        if profile.token.is_some() {
            profile.token = Some("********".into());
        }
    }
    cfg
}

fn summary(cfg: &Config) -> String {
    let mut names: Vec<_> = cfg.profiles.keys().collect();
    names.sort();
    let mut lines = vec![
        format!("Config file:     {}", hisi_config::config_path().display()),
        format!("Default profile: {}", cfg.default_profile_name()),
        format!(
            "Defaults:        output={} color={} timeout={}s per_page={}",
            cfg.defaults.output, cfg.defaults.color, cfg.defaults.timeout, cfg.defaults.per_page
        ),
    ];
    for name in names {
        let Some(profile) = cfg.profiles.get(name) else {
            continue;
        };
        let token = match (&profile.token, &profile.token_env) {
            (Some(_), _) => "plaintext".to_owned(),
            (None, Some(env)) => format!("${env}"),
            (None, None) => "keyring".to_owned(),
        };
        lines.push(format!(
            "  {name}: {} (token: {token}{})",
            profile.api_url,
            profile
                .timeout
                .map(|t| format!(", timeout {t}s"))
                .unwrap_or_default()
        ));
    }
    lines.join("\n")
}

fn read_token() -> Result<SecretString, CliError> {
    let token = rpassword::prompt_password("Bearer token: ").map_err(prompt_err)?;
    if token.trim().is_empty() {
        return Err(CliError::Validation {
            field: "token".into(),
            reason: "token cannot be empty".into(),
        });
    }
    Ok(SecretString::from(token.trim().to_owned()))
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = hisi_config::config_path();
            eprintln!("hisi configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            let mut cfg = hisi_config::load_config_or_default();

            // 1. Profile name
            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            // 2. Backend URL
            let api_url: String = Input::new()
                .with_prompt("Store API URL")
                .default(hisi_config::DEFAULT_API_URL.into())
                .validate_with(|input: &String| {
                    hisi_config::parse_api_url(input)
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(prompt_err)?;

            // 3. Token (admin only)
            let choices = &[
                "Store in system keyring (recommended)",
                "Save to config file (plaintext)",
                "Skip (storefront only)",
            ];
            let selection = Select::new()
                .with_prompt("Admin bearer token")
                .items(choices)
                .default(0)
                .interact()
                .map_err(prompt_err)?;

            let token = match selection {
                0 => {
                    let token = read_token()?;
                    hisi_config::store_token(&profile_name, &token)?;
                    eprintln!("   ✓ Token stored in system keyring");
                    None
                }
                1 => {
                    use secrecy::ExposeSecret;
                    Some(read_token()?.expose_secret().to_owned())
                }
                _ => None,
            };

            // 4. Build profile and write
            cfg.profiles.insert(
                profile_name.clone(),
                Profile {
                    api_url,
                    token,
                    ..Profile::default()
                },
            );
            cfg.default_profile = Some(profile_name.clone());
            hisi_config::save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: hisi products featured");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = redacted(&hisi_config::load_config()?);
            let out = output::render_single(global.output, &cfg, summary, |c| {
                c.default_profile_name().to_owned()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Set <key> <value> ───────────────────────────────────────
        ConfigCommand::Set { key, value } => {
            let mut cfg = hisi_config::load_config_or_default();
            let profile_name = active_profile_name(global, &cfg);
            set_profile_value(&mut cfg, &profile_name, &key, value)?;
            hisi_config::save_config(&cfg)?;
            output::print_success(&format!("Set {key} on profile '{profile_name}'"), global);
            Ok(())
        }

        // ── SetToken ────────────────────────────────────────────────
        ConfigCommand::SetToken { profile } => {
            let cfg = hisi_config::load_config_or_default();
            let profile_name = profile.unwrap_or_else(|| active_profile_name(global, &cfg));
            if cfg.profile(Some(&profile_name)).is_err() {
                return Err(CliError::ProfileNotFound {
                    name: profile_name,
                    available: available_profiles(&cfg),
                });
            }
            let token = read_token()?;
            hisi_config::store_token(&profile_name, &token)?;
            output::print_success(
                &format!("Token stored in system keyring for profile '{profile_name}'"),
                global,
            );
            Ok(())
        }

        // ── ClearToken ──────────────────────────────────────────────
        ConfigCommand::ClearToken { profile } => {
            let cfg = hisi_config::load_config_or_default();
            let profile_name = profile.unwrap_or_else(|| active_profile_name(global, &cfg));
            hisi_config::clear_token(&profile_name)?;
            output::print_success(
                &format!("Token removed from system keyring for profile '{profile_name}'"),
                global,
            );
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            output::print_output(&hisi_config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}

/// Assign one profile key, creating the profile if needed.
fn set_profile_value(
    cfg: &mut Config,
    profile_name: &str,
    key: &str,
    value: String,
) -> Result<(), CliError> {
    let profile = cfg.profiles.entry(profile_name.to_owned()).or_default();
    match key {
        "api_url" | "api-url" => {
            hisi_config::parse_api_url(&value)?;
            profile.api_url = value;
        }
        "token_env" | "token-env" => profile.token_env = Some(value),
        "timeout" => {
            profile.timeout = Some(value.parse().map_err(|_| CliError::Validation {
                field: "timeout".into(),
                reason: "must be a number (seconds)".into(),
            })?);
        }
        other => {
            return Err(CliError::Validation {
                field: other.into(),
                reason: format!(
                    "unknown config key '{other}'. Valid keys: api_url, token_env, timeout"
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_creates_profile_and_validates() {
        let mut cfg = Config::default();
        set_profile_value(&mut cfg, "shop", "api-url", "https://api.hisistudio.com".into())
            .unwrap_or_else(|e| panic!("{e}"));
        set_profile_value(&mut cfg, "shop", "timeout", "45".into())
            .unwrap_or_else(|e| panic!("{e}"));
        let shop = &cfg.profiles["shop"];
        assert_eq!(shop.api_url, "https://api.hisistudio.com");
        assert_eq!(shop.timeout, Some(45));

        assert!(set_profile_value(&mut cfg, "shop", "timeout", "soon".into()).is_err());
        assert!(set_profile_value(&mut cfg, "shop", "api_url", "not a url".into()).is_err());
        assert!(set_profile_value(&mut cfg, "shop", "colour", "red".into()).is_err());
    }

    #[test]
    fn show_masks_plaintext_tokens() {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "shop".into(),
            Profile {
                token: Some("s3cret".into()),
                ..Profile::default()
            },
        );
        let shown = redacted(&cfg);
        assert_eq!(shown.profiles["shop"].token.as_deref(), Some("********"));
        assert!(summary(&shown).contains("token: plaintext"));
    }
}
