pub mod metadata;
pub mod relations;

pub use metadata::fetch_attributes;
pub use relations::{Candidate, fetch_collaborators, fetch_related, merge_collaborators};
