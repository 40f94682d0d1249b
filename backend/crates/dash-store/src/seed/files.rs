use dash_core::FileRecord;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const README_TEXT: &str = "Hello, this is a sample text file.\n\n\
It contains multiple lines of plain text.\n\
Use the File Manager viewer to read the full content.\n\n\
- Line four\n- Line five\n- Line six\n";

const EMPLOYEES_CSV: &str = "Name,Email,Department,Salary\n\
Alice,alice@example.com,Engineering,95000\n\
Bob,bob@example.com,Marketing,75000\n\
Carol,carol@example.com,Sales,80000\n\
Dave,dave@example.com,Engineering,102000\n\
Eva,eva@example.com,HR,68000\n";

/// 8x8 placeholder image, already encoded
const LOGO_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAgAAAAICAYAAADED76LAAAAS0lEQVQoU2NkIIDQ/////wz/GQiAAKg4sQoYGBgYGBiIVcGAgYGBgYGBiJUMDAwMDAwMJCsgBhYWFhYWFhawABUmVgUjAgAYLBEJ0QIKRAAAAABJRU5ErkJggg==";

#[allow(clippy::too_many_arguments)]
fn file(
    id: i64,
    name: &str,
    mime_type: &str,
    size: u64,
    description: &str,
    tags: &[&str],
    uploaded: &str,
    content_base64: String,
) -> FileRecord {
    FileRecord {
        id,
        name: name.to_string(),
        mime_type: mime_type.to_string(),
        size,
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        uploaded: uploaded.to_string(),
        content_base64,
    }
}

pub fn files() -> Vec<FileRecord> {
    vec![
        file(
            1,
            "readme.txt",
            "text/plain",
            142,
            "Project readme and notes",
            &["docs", "readme"],
            "2025-11-01",
            STANDARD.encode(README_TEXT),
        ),
        file(
            2,
            "employees.csv",
            "text/csv",
            185,
            "Employee list export",
            &["hr", "data", "export"],
            "2025-12-15",
            STANDARD.encode(EMPLOYEES_CSV),
        ),
        file(
            3,
            "logo.png",
            "image/png",
            256,
            "Company logo placeholder",
            &["image", "brand"],
            "2026-01-10",
            LOGO_PNG_BASE64.to_string(),
        ),
    ]
}
