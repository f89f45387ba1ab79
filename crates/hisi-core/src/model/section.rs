// ── Editable page sections ──

use serde::Serialize;

/// A page the section editor can change, with its section names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditablePage {
    pub key: String,
    pub name: String,
    pub sections: Vec<String>,
}

/// One stored field of a page section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionField {
    pub id: String,
    pub page: String,
    pub section: String,
    pub key: String,
    pub value: serde_json::Value,
    /// `text`, `image`, `richtext`, `json` or `array`.
    pub kind: String,
    pub label: String,
}

impl SectionField {
    pub fn holds_json(&self) -> bool {
        matches!(self.kind.as_str(), "json" | "array")
    }

    /// The value as shown in an editor: strings verbatim, JSON compact.
    pub fn display_value(&self) -> String {
        match &self.value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// A new value for `section.key` on the page being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEdit {
    pub section: String,
    pub key: String,
    pub value: String,
}

impl SectionEdit {
    /// Parse `section.key=value`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (path, value) = raw.split_once('=')?;
        let (section, key) = path.trim().split_once('.')?;
        let (section, key) = (section.trim(), key.trim());
        if section.is_empty() || key.is_empty() {
            return None;
        }
        Some(Self {
            section: section.to_owned(),
            key: key.to_owned(),
            value: value.to_owned(),
        })
    }
}

/// How a batch of edits landed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SectionSaveReport {
    pub updated: u32,
    pub created: u32,
}
