use crate::{FileRecord, FileSummary, FileUpdate, FileUpload, Record};

use serde_json::json;

fn upload() -> FileUpload {
    serde_json::from_value(json!({
        "name": "notes.txt",
        "mime_type": "text/plain",
        "size": 5,
        "uploaded": "2026-02-01",
        "content_base64": "aGVsbG8=",
    }))
    .unwrap()
}

#[test]
fn test_upload_defaults_description_and_tags() {
    let file = FileRecord::from_draft(4, upload());

    assert_eq!(file.id, 4);
    assert_eq!(file.description, "");
    assert!(file.tags.is_empty());
    assert_eq!(file.content_base64, "aGVsbG8=");
}

#[test]
fn test_summary_omits_payload() {
    let file = FileRecord::from_draft(4, upload());

    let value = serde_json::to_value(FileSummary::from(&file)).unwrap();

    assert!(value.get("content_base64").is_none());
    assert_eq!(value["name"], "notes.txt");
    assert_eq!(value["size"], 5);
}

#[test]
fn given_update_with_tags_only_when_applied_then_description_kept() {
    let mut file = FileRecord::from_draft(4, upload());
    file.description = "Meeting notes".to_string();

    file.apply_patch(FileUpdate {
        description: None,
        tags: Some(vec!["meeting".to_string()]),
    });

    assert_eq!(file.description, "Meeting notes");
    assert_eq!(file.tags, vec!["meeting".to_string()]);
}

#[test]
fn given_update_with_other_fields_when_decoded_then_they_are_ignored() {
    let mut file = FileRecord::from_draft(4, upload());
    let update: FileUpdate = serde_json::from_value(json!({
        "name": "renamed.txt",
        "description": "Renamed?",
    }))
    .unwrap();

    file.apply_patch(update);

    assert_eq!(file.name, "notes.txt");
    assert_eq!(file.description, "Renamed?");
}
