//! Application catalog records.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// One row of the remote application table.
///
/// The store owns this shape; Portal only reads it. `url` is expected to be
/// an absolute URL (the store's contract), `icon` is a key into the fixed
/// icon catalog (misses fall back to the default icon), and `color` is a
/// free-form CSS color value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub icon: String,
    pub url: String,
    pub color: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl ApplicationRecord {
    /// The record's accent color, with the default accent substituted for
    /// unparseable values.
    pub fn accent_color(&self) -> Color {
        Color::parse_css_or_accent(&self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r##"{
            "id": "a6c0f1b2-5a1e-4a77-9a43-000000000001",
            "name": "Time Tracking",
            "description": "Log hours against projects",
            "icon": "Clock",
            "url": "https://time.example.com/",
            "color": "#10b981",
            "is_active": true,
            "created_at": "2024-11-02T09:30:00Z",
            "updated_at": "2025-01-15T12:00:00Z"
        }"##
    }

    #[test]
    fn deserialize_full_row() {
        let rec: ApplicationRecord = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(rec.name, "Time Tracking");
        assert_eq!(rec.description.as_deref(), Some("Log hours against projects"));
        assert_eq!(rec.icon, "Clock");
        assert!(rec.is_active);
    }

    #[test]
    fn deserialize_null_description() {
        let json = r##"{
            "id": "x",
            "name": "CRM",
            "description": null,
            "icon": "Users",
            "url": "https://crm.example.com/",
            "color": "#f59e0b",
            "is_active": true,
            "created_at": "2024-11-02T09:30:00Z",
            "updated_at": "2024-11-02T09:30:00Z"
        }"##;
        let rec: ApplicationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.description, None);
    }

    #[test]
    fn deserialize_missing_description() {
        let json = r##"{
            "id": "x",
            "name": "CRM",
            "icon": "Users",
            "url": "https://crm.example.com/",
            "color": "#f59e0b",
            "is_active": false,
            "created_at": "2024-11-02T09:30:00Z",
            "updated_at": "2024-11-02T09:30:00Z"
        }"##;
        let rec: ApplicationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.description, None);
        assert!(!rec.is_active);
    }

    #[test]
    fn accent_color_parses() {
        let rec: ApplicationRecord = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(rec.accent_color(), Color::rgb(0x10, 0xb9, 0x81));
    }

    #[test]
    fn accent_color_falls_back() {
        let mut rec: ApplicationRecord = serde_json::from_str(sample_json()).unwrap();
        rec.color = "chartreuse".to_string();
        assert_eq!(rec.accent_color(), Color::DEFAULT_ACCENT);
    }

    #[test]
    fn row_array_deserializes() {
        let json = format!("[{},{}]", sample_json(), sample_json());
        let rows: Vec<ApplicationRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(rows.len(), 2);
    }
}
