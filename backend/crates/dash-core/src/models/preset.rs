//! Custom map locations ("presets") that users pin on the map view.

use crate::models::field::deserialize_present;
use crate::{Attributes, FieldValue, Record, RecordId, merge_attributes, merge_field};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetFields {
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<FieldValue<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub lat: Option<FieldValue<f64>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub lng: Option<FieldValue<f64>>,
    /// Location category, e.g. "landmark", "airport", "port"
    #[serde(
        rename = "type",
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<FieldValue<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<FieldValue<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub project: Option<FieldValue<String>>,
    #[serde(flatten)]
    pub extra: Attributes,
}

impl PresetFields {
    pub fn merge(&mut self, patch: PresetFields) {
        merge_field(&mut self.name, patch.name);
        merge_field(&mut self.lat, patch.lat);
        merge_field(&mut self.lng, patch.lng);
        merge_field(&mut self.kind, patch.kind);
        merge_field(&mut self.description, patch.description);
        merge_field(&mut self.project, patch.project);
        merge_attributes(&mut self.extra, patch.extra);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetRecord {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: PresetFields,
}

impl Record for PresetRecord {
    const ENTITY: &'static str = "Preset";

    type Draft = PresetFields;
    type Patch = PresetFields;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: PresetFields) -> Self {
        let mut fields = PresetFields::default();
        fields.merge(draft);
        Self { id, fields }
    }

    fn apply_patch(&mut self, patch: PresetFields) {
        self.fields.merge(patch);
    }
}
