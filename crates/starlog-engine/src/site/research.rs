//! Research log entries and panel navigation.

use serde::{Deserialize, Serialize};

/// One research log entry. Loaded from JSON; static for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// Detail page the entry's panel opens.
    pub href: String,
    /// Text shown by the scanner tooltip over the panel.
    #[serde(default)]
    pub scan_info: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResearchCatalog {
    #[serde(default)]
    pub entries: Vec<ResearchEntry>,
}

impl ResearchCatalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn get(&self, id: &str) -> Option<&ResearchEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Where the panel with element id `id` goes. A listed entry wins over
    /// the panel's own `data-href`.
    pub fn destination<'a>(&'a self, id: &str, data_href: Option<&'a str>) -> Option<&'a str> {
        panel_destination(self.get(id).map(|e| e.href.as_str())).or_else(|| panel_destination(data_href))
    }

    /// Scanner text for the element with id `id`: the entry's `scan_info`,
    /// else the element's `data-scan-info`.
    pub fn scan_info<'a>(&'a self, id: &str, data_scan_info: Option<&'a str>) -> Option<&'a str> {
        self.get(id)
            .and_then(|e| e.scan_info.as_deref())
            .or(data_scan_info)
    }
}

/// Where clicking a research panel goes: its `data-href`, if it has a
/// non-empty one.
pub fn panel_destination(data_href: Option<&str>) -> Option<&str> {
    data_href.map(str::trim).filter(|href| !href.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_catalog() {
        let json = r#"{
            "entries": [
                { "id": "pulsar", "title": "Pulsar timing", "href": "research-pulsar.html",
                  "scan_info": "PSR B1919+21" },
                { "id": "lensing", "title": "Weak lensing", "summary": "Shear maps",
                  "href": "research-lensing.html" }
            ]
        }"#;
        let catalog = ResearchCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("pulsar").unwrap().scan_info.as_deref(), Some("PSR B1919+21"));
        assert_eq!(catalog.get("lensing").unwrap().summary, "Shear maps");
        assert!(catalog.get("quasar").is_none());
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(ResearchCatalog::from_json("{ \"entries\": [ { \"id\": 1 } ] }").is_err());
    }

    #[test]
    fn catalog_overrides_data_attributes() {
        let catalog = ResearchCatalog::from_json(
            r#"{ "entries": [
                { "id": "pulsar", "title": "Pulsar timing", "href": "research-pulsar.html",
                  "scan_info": "PSR B1919+21" },
                { "id": "draft", "title": "Draft", "href": "" }
            ] }"#,
        )
        .unwrap();

        assert_eq!(catalog.destination("pulsar", Some("old.html")), Some("research-pulsar.html"));
        assert_eq!(catalog.destination("quasar", Some("research-quasar.html")), Some("research-quasar.html"));
        // A blank catalog href falls back to the panel's own.
        assert_eq!(catalog.destination("draft", Some("draft.html")), Some("draft.html"));
        assert_eq!(catalog.destination("quasar", None), None);

        assert_eq!(catalog.scan_info("pulsar", Some("fallback")), Some("PSR B1919+21"));
        assert_eq!(catalog.scan_info("draft", Some("fallback")), Some("fallback"));
        assert_eq!(catalog.scan_info("quasar", None), None);
    }

    #[test]
    fn empty_catalog_uses_data_attributes() {
        let catalog = ResearchCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.destination("", Some(" research-a.html ")), Some("research-a.html"));
        assert_eq!(catalog.scan_info("", Some("ION TRAP")), Some("ION TRAP"));
    }

    #[test]
    fn panel_without_href_goes_nowhere() {
        assert_eq!(panel_destination(Some("research-a.html")), Some("research-a.html"));
        assert_eq!(panel_destination(Some("  ")), None);
        assert_eq!(panel_destination(None), None);
    }
}
