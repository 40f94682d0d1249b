//! Built-in fixture data loaded at startup.

mod credentials;
mod files;
mod history;
mod presets;
mod regions;
mod users;

pub use credentials::credentials;
pub use files::files;
pub use history::history_markers;
pub use presets::presets;
pub use regions::regions;
pub use users::users;
