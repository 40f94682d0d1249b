//! Shapes drawn by users on the map view.
//!
//! Geometry is client-defined (circles, polygons, polylines, ...) and is kept
//! verbatim in `extra`.

use crate::models::field::deserialize_present;
use crate::{Attributes, FieldValue, Record, RecordId, merge_attributes, merge_field};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeFields {
    /// Shape kind as reported by the drawing tool
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
    pub name: Option<FieldValue<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<FieldValue<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub project: Option<FieldValue<String>>,
    #[serde(flatten)]
    pub extra: Attributes,
}

impl ShapeFields {
    pub fn merge(&mut self, patch: ShapeFields) {
        merge_field(&mut self.kind, patch.kind);
        merge_field(&mut self.name, patch.name);
        merge_field(&mut self.color, patch.color);
        merge_field(&mut self.project, patch.project);
        merge_attributes(&mut self.extra, patch.extra);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: ShapeFields,
}

impl Record for ShapeRecord {
    const ENTITY: &'static str = "Shape";

    type Draft = ShapeFields;
    type Patch = ShapeFields;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: ShapeFields) -> Self {
        let mut fields = ShapeFields::default();
        fields.merge(draft);
        Self { id, fields }
    }

    fn apply_patch(&mut self, patch: ShapeFields) {
        self.fields.merge(patch);
    }
}
