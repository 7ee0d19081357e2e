//! The 16-field record that drives the table, and its intake from the JSON
//! the analysis service returns.
//!
//! [`FIELD_ORDER`] is the one place the field order lives. The table renderer
//! and any form editing the record both read it; bump [`FIELD_SCHEMA_VERSION`]
//! when fields are added, removed or reordered.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

pub const FIELD_SCHEMA_VERSION: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Purpose,
    Subject,
    Situation,
    AgeRange,
    Gender,
    Nationality,
    Style,
    ShotDistance,
    CameraAngle,
    LightingColor,
    Background,
    City,
    LocationType,
    OutputFormat,
    AspectRatio,
    AdditionalWords,
}

pub const FIELD_COUNT: usize = 16;

/// Presentation order of the table rows: purpose before subject before situation, and so on.
pub const FIELD_ORDER: [FieldKey; FIELD_COUNT] = [
    FieldKey::Purpose,
    FieldKey::Subject,
    FieldKey::Situation,
    FieldKey::AgeRange,
    FieldKey::Gender,
    FieldKey::Nationality,
    FieldKey::Style,
    FieldKey::ShotDistance,
    FieldKey::CameraAngle,
    FieldKey::LightingColor,
    FieldKey::Background,
    FieldKey::City,
    FieldKey::LocationType,
    FieldKey::OutputFormat,
    FieldKey::AspectRatio,
    FieldKey::AdditionalWords,
];

impl FieldKey {
    /// Wire key used by the analysis JSON.
    pub fn key(self) -> &'static str {
        match self {
            FieldKey::Purpose => "purpose",
            FieldKey::Subject => "subject",
            FieldKey::Situation => "situation",
            FieldKey::AgeRange => "age_range",
            FieldKey::Gender => "gender",
            FieldKey::Nationality => "nationality",
            FieldKey::Style => "style",
            FieldKey::ShotDistance => "shot_distance",
            FieldKey::CameraAngle => "camera_angle",
            FieldKey::LightingColor => "lighting_color",
            FieldKey::Background => "background",
            FieldKey::City => "city",
            FieldKey::LocationType => "location_type",
            FieldKey::OutputFormat => "output_format",
            FieldKey::AspectRatio => "aspect_ratio",
            FieldKey::AdditionalWords => "additional_words",
        }
    }

    /// Label printed in the table's first column.
    pub fn label(self) -> &'static str {
        match self {
            FieldKey::Purpose => "Purpose",
            FieldKey::Subject => "Subject",
            FieldKey::Situation => "Situation",
            FieldKey::AgeRange => "Age Range",
            FieldKey::Gender => "Gender",
            FieldKey::Nationality => "Nationality",
            FieldKey::Style => "Style",
            FieldKey::ShotDistance => "Shot Distance",
            FieldKey::CameraAngle => "Camera Angle",
            FieldKey::LightingColor => "Lighting/Color",
            FieldKey::Background => "Background",
            FieldKey::City => "City",
            FieldKey::LocationType => "Location Type",
            FieldKey::OutputFormat => "Output Format",
            FieldKey::AspectRatio => "Aspect Ratio",
            FieldKey::AdditionalWords => "Additional Words",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        FIELD_ORDER.into_iter().find(|f| f.key() == key)
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// One table row as handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRow<'a> {
    pub key: FieldKey,
    pub label: &'static str,
    pub value: &'a str,
}

/// Every field holds exactly one value; unset fields are the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldRecord {
    values: [String; FIELD_COUNT],
}

impl FieldRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: FieldKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: FieldKey, value: impl Into<String>) {
        self.values[key.slot()] = value.into();
    }

    pub fn get(&self, key: FieldKey) -> &str {
        &self.values[key.slot()]
    }

    pub fn aspect_ratio(&self) -> &str {
        self.get(FieldKey::AspectRatio)
    }

    /// Rows in [`FIELD_ORDER`].
    pub fn rows(&self) -> impl Iterator<Item = FieldRow<'_>> {
        FIELD_ORDER.into_iter().map(|key| FieldRow {
            key,
            label: key.label(),
            value: self.get(key),
        })
    }

    /// Build from the analysis JSON. Accepts the bare field object, the
    /// `{"analysis": {...}}` response envelope, and either wrapped in a
    /// markdown code fence. Missing or null fields become "".
    pub fn from_json_str(input: &str) -> Result<Self> {
        let body = extract_json_object(input)
            .ok_or_else(|| Error::InvalidRecord("no JSON object found".to_string()))?;
        let value: Value = serde_json::from_str(body)?;
        let obj = match &value {
            Value::Object(map) => match map.get("analysis") {
                Some(Value::Object(inner)) => inner,
                _ => map,
            },
            _ => return Err(Error::InvalidRecord("record is not a JSON object".to_string())),
        };
        Ok(Self::from_map(obj))
    }

    pub fn from_map(map: &Map<String, Value>) -> Self {
        let mut record = Self::new();
        for (k, v) in map {
            let Some(key) = FieldKey::from_key(k) else {
                log::debug!("ignoring unknown record key '{k}'");
                continue;
            };
            let text = match v {
                Value::String(s) => s.trim().to_string(),
                Value::Null => String::new(),
                Value::Bool(_) | Value::Number(_) => v.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    log::warn!("record key '{k}' holds a non-scalar value, leaving it empty");
                    String::new()
                }
            };
            record.set(key, text);
        }
        record
    }
}

/// Strip markdown fences and return the span from the first `{` to the last `}`.
fn extract_json_object(input: &str) -> Option<&str> {
    let start = input.find('{')?;
    let end = input.rfind('}')?;
    (end > start).then(|| &input[start..=end])
}
