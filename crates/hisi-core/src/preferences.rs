// ── Admin preferences ──
//
// `AdminSettings` is the typed view of the backend's settings object.
// `PreferencesContext` carries the two settings that change how every
// surface renders (font scale and contrast); `SettingsEditor` owns the
// edit/save cycle of the settings screen.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::{info, warn};

use hisi_api::types::SettingsMap;

use crate::error::CoreError;

// ── Presentation ─────────────────────────────────────────────────────

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    /// Root font size in pixels.
    pub fn root_px(self) -> u8 {
        match self {
            Self::Small => 14,
            Self::Medium => 16,
            Self::Large => 18,
        }
    }

    fn cycle(self) -> Self {
        match self {
            Self::Small => Self::Medium,
            Self::Medium => Self::Large,
            Self::Large => Self::Small,
        }
    }
}

/// Settings every surface reads when rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Presentation {
    pub font_size: FontSize,
    pub high_contrast: bool,
}

/// Process-wide presentation state. Clones share one channel.
#[derive(Debug, Clone)]
pub struct PreferencesContext {
    tx: Arc<watch::Sender<Presentation>>,
}

impl Default for PreferencesContext {
    fn default() -> Self {
        Self::new(Presentation::default())
    }
}

impl PreferencesContext {
    pub fn new(initial: Presentation) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn current(&self) -> Presentation {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Presentation> {
        self.tx.subscribe()
    }

    pub fn stream(&self) -> WatchStream<Presentation> {
        WatchStream::new(self.subscribe())
    }

    /// Replace both values; subscribers are only woken on a change.
    pub fn apply(&self, presentation: Presentation) {
        self.tx.send_if_modified(|current| {
            let changed = *current != presentation;
            *current = presentation;
            changed
        });
    }

    pub fn set_font_size(&self, font_size: FontSize) {
        self.apply(Presentation {
            font_size,
            ..self.current()
        });
    }

    pub fn set_high_contrast(&self, high_contrast: bool) {
        self.apply(Presentation {
            high_contrast,
            ..self.current()
        });
    }
}

// ── Settings ─────────────────────────────────────────────────────────

/// Admin preferences. Keys the client does not know about are kept in
/// `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSettings {
    pub font_size: FontSize,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub order_notifications: bool,
    pub inquiry_notifications: bool,
    pub low_stock_alerts: bool,
    pub high_contrast: bool,
    pub keyboard_shortcuts: bool,
    #[serde(flatten)]
    pub extra: SettingsMap,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            font_size: FontSize::Medium,
            email_notifications: true,
            push_notifications: true,
            order_notifications: true,
            inquiry_notifications: true,
            low_stock_alerts: true,
            high_contrast: false,
            keyboard_shortcuts: true,
            extra: SettingsMap::new(),
        }
    }
}

impl AdminSettings {
    /// Overlay a backend settings object on the defaults. Values of the
    /// wrong type are skipped and keep their default.
    pub fn merged(data: &SettingsMap) -> Self {
        let Ok(defaults) = Self::default().to_map() else {
            return Self::default();
        };

        let mut merged = defaults.clone();
        merged.extend(data.iter().map(|(k, v)| (k.clone(), v.clone())));
        if let Ok(settings) = serde_json::from_value(Value::Object(merged)) {
            return settings;
        }

        let mut accepted = defaults;
        for (key, value) in data {
            let mut candidate = accepted.clone();
            candidate.insert(key.clone(), value.clone());
            if serde_json::from_value::<Self>(Value::Object(candidate.clone())).is_ok() {
                accepted = candidate;
            } else {
                warn!(key = %key, %value, "ignoring invalid setting");
            }
        }
        serde_json::from_value(Value::Object(accepted)).unwrap_or_default()
    }

    pub fn presentation(&self) -> Presentation {
        Presentation {
            font_size: self.font_size,
            high_contrast: self.high_contrast,
        }
    }

    /// The full object as sent back to the backend.
    pub fn to_map(&self) -> Result<SettingsMap, CoreError> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(CoreError::Internal(format!(
                "settings serialized to {other}"
            ))),
            Err(e) => Err(CoreError::Internal(e.to_string())),
        }
    }
}

/// One editable preference, named as on the command line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SettingKey {
    FontSize,
    EmailNotifications,
    PushNotifications,
    OrderNotifications,
    InquiryNotifications,
    LowStockAlerts,
    HighContrast,
    KeyboardShortcuts,
}

impl SettingKey {
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FontSize => "Font size",
            Self::EmailNotifications => "Email notifications",
            Self::PushNotifications => "Push notifications",
            Self::OrderNotifications => "Order notifications",
            Self::InquiryNotifications => "Inquiry notifications",
            Self::LowStockAlerts => "Low stock alerts",
            Self::HighContrast => "High contrast",
            Self::KeyboardShortcuts => "Keyboard shortcuts",
        }
    }

    fn flag(self, settings: &mut AdminSettings) -> Option<&mut bool> {
        match self {
            Self::FontSize => None,
            Self::EmailNotifications => Some(&mut settings.email_notifications),
            Self::PushNotifications => Some(&mut settings.push_notifications),
            Self::OrderNotifications => Some(&mut settings.order_notifications),
            Self::InquiryNotifications => Some(&mut settings.inquiry_notifications),
            Self::LowStockAlerts => Some(&mut settings.low_stock_alerts),
            Self::HighContrast => Some(&mut settings.high_contrast),
            Self::KeyboardShortcuts => Some(&mut settings.keyboard_shortcuts),
        }
    }

    /// Current value, rendered for display.
    pub fn get(self, settings: &AdminSettings) -> String {
        let flag = match self {
            Self::FontSize => return settings.font_size.to_string(),
            Self::EmailNotifications => settings.email_notifications,
            Self::PushNotifications => settings.push_notifications,
            Self::OrderNotifications => settings.order_notifications,
            Self::InquiryNotifications => settings.inquiry_notifications,
            Self::LowStockAlerts => settings.low_stock_alerts,
            Self::HighContrast => settings.high_contrast,
            Self::KeyboardShortcuts => settings.keyboard_shortcuts,
        };
        flag.to_string()
    }

    /// Parse and assign `raw`. Booleans accept true/false, on/off, yes/no.
    pub fn set(self, settings: &mut AdminSettings, raw: &str) -> Result<(), CoreError> {
        if self == Self::FontSize {
            settings.font_size = raw.trim().parse().map_err(|_| {
                CoreError::validation(format!(
                    "invalid font size '{raw}' (expected small, medium or large)"
                ))
            })?;
            return Ok(());
        }
        let value = match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "yes" | "1" => true,
            "false" | "off" | "no" | "0" => false,
            _ => {
                return Err(CoreError::validation(format!(
                    "invalid value '{raw}' for {self} (expected true or false)"
                )));
            }
        };
        if let Some(flag) = self.flag(settings) {
            *flag = value;
        }
        Ok(())
    }

    /// Flip a boolean, or step the font size.
    pub fn toggle(self, settings: &mut AdminSettings) {
        match self.flag(settings) {
            Some(flag) => *flag = !*flag,
            None => settings.font_size = settings.font_size.cycle(),
        }
    }
}

// ── Editor ───────────────────────────────────────────────────────────

/// Settings screen state: local edits plus the single-save gate.
#[derive(Debug)]
pub struct SettingsEditor {
    settings: AdminSettings,
    saving: Arc<AtomicBool>,
    context: PreferencesContext,
}

impl SettingsEditor {
    pub fn new(settings: AdminSettings, context: PreferencesContext) -> Self {
        Self {
            settings,
            saving: Arc::new(AtomicBool::new(false)),
            context,
        }
    }

    pub fn settings(&self) -> &AdminSettings {
        &self.settings
    }

    /// Replace local state with freshly loaded settings.
    pub fn load(&mut self, settings: AdminSettings) {
        self.settings = settings;
    }

    pub fn toggle(&mut self, key: SettingKey) {
        key.toggle(&mut self.settings);
    }

    pub fn set(&mut self, key: SettingKey, raw: &str) -> Result<(), CoreError> {
        key.set(&mut self.settings, raw)
    }

    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::SeqCst)
    }

    /// Start a save: refuse if one is in flight, then apply font scale and
    /// contrast to the context before anything is persisted.
    pub fn begin_save(&self) -> Result<PendingSave, CoreError> {
        if self
            .saving
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(CoreError::Busy {
                operation: "Saving settings",
            });
        }
        let guard = SavingGuard(Arc::clone(&self.saving));

        let presentation = self.settings.presentation();
        self.context.apply(presentation);
        info!(
            font_size = %presentation.font_size,
            high_contrast = presentation.high_contrast,
            "applied presentation settings"
        );

        Ok(PendingSave {
            settings: self.settings.clone(),
            _guard: guard,
        })
    }
}

struct SavingGuard(Arc<AtomicBool>);

impl Drop for SavingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for SavingGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SavingGuard")
    }
}

/// A save that has been accepted and applied locally. The editor accepts
/// a new save once this is dropped.
#[derive(Debug)]
pub struct PendingSave {
    settings: AdminSettings,
    _guard: SavingGuard,
}

impl PendingSave {
    pub fn settings(&self) -> &AdminSettings {
        &self.settings
    }

    /// Await the persist call and release the save gate.
    pub async fn finish<Fut, E>(self, persist: Fut) -> Result<(), CoreError>
    where
        Fut: Future<Output = Result<(), E>>,
        CoreError: From<E>,
    {
        let result = persist.await.map_err(CoreError::from);
        match &result {
            Ok(()) => info!("settings saved"),
            Err(e) => warn!(error = %e, "saving settings failed"),
        }
        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;
    use tokio::sync::oneshot;

    use super::*;

    fn map(value: Value) -> SettingsMap {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn merge_overlays_defaults() {
        let settings = AdminSettings::merged(&map(json!({
            "highContrast": true,
            "fontSize": "large",
            "storeName": "Hisi Studio"
        })));
        assert!(settings.high_contrast);
        assert_eq!(settings.font_size, FontSize::Large);
        assert!(settings.email_notifications);
        assert_eq!(settings.extra.get("storeName"), Some(&json!("Hisi Studio")));
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let settings = AdminSettings::merged(&map(json!({
            "fontSize": "huge",
            "pushNotifications": false
        })));
        assert_eq!(settings.font_size, FontSize::Medium);
        assert!(!settings.push_notifications);
    }

    #[test]
    fn round_trips_camel_case_keys() {
        let map = AdminSettings::default().to_map().unwrap();
        assert_eq!(map.get("lowStockAlerts"), Some(&json!(true)));
        assert_eq!(map.get("fontSize"), Some(&json!("medium")));
        assert_eq!(map.len(), 8);
    }

    #[test]
    fn keys_parse_and_set() {
        let mut settings = AdminSettings::default();
        let key: SettingKey = "high-contrast".parse().unwrap();
        key.set(&mut settings, "on").unwrap();
        assert!(settings.high_contrast);
        assert_eq!(key.get(&settings), "true");

        SettingKey::FontSize.set(&mut settings, "Small").unwrap();
        assert_eq!(settings.font_size.root_px(), 14);
        assert!(SettingKey::FontSize.set(&mut settings, "huge").is_err());
        assert!(SettingKey::LowStockAlerts.set(&mut settings, "maybe").is_err());
    }

    #[test]
    fn toggle_flips_and_cycles() {
        let mut settings = AdminSettings::default();
        SettingKey::KeyboardShortcuts.toggle(&mut settings);
        assert!(!settings.keyboard_shortcuts);
        SettingKey::FontSize.toggle(&mut settings);
        assert_eq!(settings.font_size, FontSize::Large);
        SettingKey::FontSize.toggle(&mut settings);
        assert_eq!(settings.font_size, FontSize::Small);
    }

    #[tokio::test]
    async fn contrast_applies_even_when_persist_fails() {
        let context = PreferencesContext::default();
        let mut rx = context.subscribe();
        let mut editor = SettingsEditor::new(AdminSettings::default(), context.clone());
        editor.toggle(SettingKey::HighContrast);

        let pending = editor.begin_save().unwrap();
        let result = pending
            .finish(async { Err::<(), _>(CoreError::Timeout) })
            .await;

        assert!(result.is_err());
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().high_contrast);
        assert!(!editor.is_saving());
    }

    #[tokio::test]
    async fn second_save_is_refused_while_in_flight() {
        let editor = SettingsEditor::new(AdminSettings::default(), PreferencesContext::default());
        let (done_tx, done_rx) = oneshot::channel::<()>();

        let first = editor.begin_save().unwrap();
        let in_flight = tokio::spawn(first.finish(async move {
            done_rx.await.ok();
            Ok::<_, CoreError>(())
        }));

        assert!(matches!(editor.begin_save(), Err(CoreError::Busy { .. })));
        done_tx.send(()).unwrap();
        in_flight.await.unwrap().unwrap();
        assert!(editor.begin_save().is_ok());
    }

    #[test]
    fn context_setters_notify_on_change_only() {
        let context = PreferencesContext::default();
        let mut rx = context.subscribe();
        context.set_font_size(FontSize::Medium);
        assert!(!rx.has_changed().unwrap());
        context.set_font_size(FontSize::Large);
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().font_size.root_px(), 18);
    }
}
