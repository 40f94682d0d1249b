#![allow(dead_code)]

mod fixtures;

pub use fixtures::{preset_draft, shape_draft, text, upload, user_draft};
