pub mod contributors;
pub mod identity;
pub mod project_record;
pub mod uploader;
pub mod user_profile;
