pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::contributors::{Contributors, ContributorsField};
pub use models::identity::{Identity, Role};
pub use models::project_record::{ExpandedProject, NewProject, ProjectRecord};
pub use models::uploader::Uploader;
pub use models::user_profile::UserProfile;
