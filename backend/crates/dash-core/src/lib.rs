pub mod models;
pub mod record;

pub use models::attributes::{Attributes, merge_attributes};
pub use models::avatar_mode::AvatarMode;
pub use models::field::{FieldValue, merge_field};
pub use models::file::{FileRecord, FileSummary, FileUpdate, FileUpload};
pub use models::history_marker::HistoryMarker;
pub use models::identity::Identity;
pub use models::preset::{PresetFields, PresetRecord};
pub use models::profile::{Profile, ProfileOverride, ProfileUpdate};
pub use models::region::{PolygonGeometry, RegionFeature, RegionFeatureCollection, RegionProperties};
pub use models::role::Role;
pub use models::shape::{ShapeFields, ShapeRecord};
pub use models::user::{UserFields, UserRecord};
pub use models::user_status::UserStatus;
pub use record::{Record, RecordId};

#[cfg(test)]
mod tests;
