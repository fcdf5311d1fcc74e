//! Delete permission for project records.

use sc_core::{Identity, ProjectRecord};

/// The uploader may delete their own project; admins may delete any project.
/// Form submissions have no account uploader, so only admins can remove them.
pub fn can_delete(identity: &Identity, record: &ProjectRecord) -> bool {
    identity.is_admin() || record.is_uploaded_by(&identity.id)
}
