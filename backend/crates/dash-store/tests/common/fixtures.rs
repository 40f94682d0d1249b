use dash_core::{FieldValue, FileUpload, PresetFields, Role, ShapeFields, UserFields};

pub fn user_draft(name: &str) -> UserFields {
    UserFields {
        name: Some(name.to_string().into()),
        email: Some(format!("{}@example.com", name.to_lowercase().replace(' ', ".")).into()),
        role: Some(Role::Viewer.into()),
        ..Default::default()
    }
}

pub fn upload(name: &str) -> FileUpload {
    FileUpload {
        name: name.to_string(),
        mime_type: "text/plain".to_string(),
        size: 5,
        description: "test upload".to_string(),
        tags: vec!["test".to_string()],
        uploaded: "2026-02-01".to_string(),
        content_base64: "aGVsbG8=".to_string(),
    }
}

pub fn preset_draft(name: &str) -> PresetFields {
    PresetFields {
        name: Some(name.to_string().into()),
        lat: Some(FieldValue::Known(50.0)),
        lng: Some(FieldValue::Known(4.0)),
        kind: Some("landmark".to_string().into()),
        ..Default::default()
    }
}

pub fn shape_draft(kind: &str) -> ShapeFields {
    ShapeFields {
        kind: Some(kind.to_string().into()),
        name: Some(format!("{kind} shape").into()),
        ..Default::default()
    }
}

/// Text value of a string field, if it holds one
pub fn text(field: &Option<FieldValue<String>>) -> Option<&str> {
    field.as_ref().and_then(|value| value.as_str())
}
