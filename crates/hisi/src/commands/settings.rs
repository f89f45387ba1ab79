//! Admin preference handlers.
//!
//! Saves go through the same `SettingsEditor` the TUI uses, so font scale
//! and contrast are applied before the backend is asked to persist them.

use tabled::Tabled;

use hisi_core::{AdminConsole, AdminSettings, PreferencesContext, SettingKey, SettingsEditor};

use crate::cli::{GlobalOpts, SettingsArgs, SettingsCommand};
use crate::error::CliError;
use crate::output;

use super::{Context, util};

#[derive(Tabled)]
struct SettingRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Setting")]
    label: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn rows(settings: &AdminSettings) -> Vec<SettingRow> {
    SettingKey::all()
        .map(|key| SettingRow {
            key: key.to_string(),
            label: key.label(),
            value: key.get(settings),
        })
        .collect()
}

fn table(settings: &AdminSettings) -> String {
    tabled::Table::new(rows(settings))
        .with(tabled::settings::Style::rounded())
        .to_string()
}

fn plain(settings: &AdminSettings) -> String {
    SettingKey::all()
        .map(|key| format!("{key}={}", key.get(settings)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Persist through the editor's single-save gate.
async fn save(admin: &AdminConsole, editor: &SettingsEditor) -> Result<AdminSettings, CliError> {
    let pending = editor.begin_save()?;
    let settings = pending.settings().clone();
    pending.finish(admin.save_settings(&settings)).await?;
    Ok(settings)
}

fn editor_for(settings: AdminSettings) -> SettingsEditor {
    let context = PreferencesContext::new(settings.presentation());
    SettingsEditor::new(settings, context)
}

pub async fn handle(ctx: &Context, args: SettingsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let admin = ctx.admin()?;
    let settings = match args.command {
        SettingsCommand::Show => admin.settings().await?,

        SettingsCommand::Set { key, value } => {
            let mut editor = editor_for(admin.settings().await?);
            editor.set(key, &value)?;
            let saved = save(&admin, &editor).await?;
            output::print_success(&format!("{} set to {}", key.label(), key.get(&saved)), global);
            saved
        }

        SettingsCommand::Save { from_file } => {
            let value = util::read_json_file(&from_file)?;
            let serde_json::Value::Object(map) = value else {
                return Err(CliError::Validation {
                    field: "from-file".into(),
                    reason: "expected a JSON object of settings".into(),
                });
            };
            let editor = editor_for(AdminSettings::merged(&map));
            let saved = save(&admin, &editor).await?;
            output::print_success("Settings saved", global);
            saved
        }
    };

    let out = output::render_single(global.output, &settings, table, plain)?;
    output::print_output(&out, global.quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lists_every_key() {
        let out = plain(&AdminSettings::default());
        assert_eq!(out.lines().count(), SettingKey::all().count());
        assert!(out.contains("high-contrast=false"));
        assert!(out.contains("font-size=medium"));
    }
}
