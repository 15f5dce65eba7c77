use serde::ser::{Serialize, SerializeMap, Serializer};

/// A parsed section's fields, in the order they were extracted.
///
/// The output JSON mirrors the order the portal presents the data, so this is
/// a flat `(key, value)` list with map semantics rather than a `HashMap`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldRecord {
    entries: Vec<(String, FieldValue)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Record(FieldRecord),
}

impl FieldRecord {
    pub fn new() -> Self {
        FieldRecord::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    #[allow(dead_code)]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[allow(dead_code)]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(FieldValue::Text(t)) => Some(t),
            _ => None,
        }
    }

    /// Insert `value` under `key`, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Insert only when `key` has not been filled yet (first match wins).
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        if !self.contains_key(&key) {
            self.entries.push((key, value.into()));
        }
    }

    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<FieldRecord> for FieldValue {
    fn from(r: FieldRecord) -> Self {
        FieldValue::Record(r)
    }
}

impl Serialize for FieldRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(t) => serializer.serialize_str(t),
            FieldValue::Record(r) => r.serialize(serializer),
        }
    }
}

/// What one section extractor produced: a single record, or a list of them
/// (the benefits summary is the only repeating-record section).
#[derive(Debug, Clone, PartialEq)]
pub enum SectionValue {
    Record(FieldRecord),
    Records(Vec<FieldRecord>),
}

impl SectionValue {
    pub fn is_empty(&self) -> bool {
        match self {
            SectionValue::Record(r) => r.is_empty(),
            SectionValue::Records(rs) => rs.is_empty(),
        }
    }
}

impl Serialize for SectionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SectionValue::Record(r) => r.serialize(serializer),
            SectionValue::Records(rs) => rs.serialize(serializer),
        }
    }
}

/// The structured output for one contract: its number plus one entry per
/// section that yielded data. A missing section key means "not found", never
/// an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAnnuity {
    pub annuity_number: String,
    sections: Vec<(String, SectionValue)>,
}

impl ParsedAnnuity {
    pub fn new(annuity_number: impl Into<String>) -> Self {
        ParsedAnnuity {
            annuity_number: annuity_number.into(),
            sections: Vec::new(),
        }
    }

    pub fn push_section(&mut self, name: impl Into<String>, value: SectionValue) {
        self.sections.push((name.into(), value));
    }

    #[allow(dead_code)]
    pub fn section(&self, name: &str) -> Option<&SectionValue> {
        self.sections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    #[allow(dead_code)]
    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(|(n, _)| n.as_str()).collect()
    }
}

impl Serialize for ParsedAnnuity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len() + 1))?;
        map.serialize_entry("Annuity Number", &self.annuity_number)?;
        for (name, value) in &self.sections {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ── Tests ──
