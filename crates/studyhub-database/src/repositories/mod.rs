//! PostgreSQL repository implementations of the store traits.

pub mod resource;
pub mod subtopic;
pub mod topic;
pub mod user;

pub use resource::ResourceRepository;
pub use subtopic::SubtopicRepository;
pub use topic::TopicRepository;
pub use user::UserRepository;

/// Wrap a raw search string in a `%…%` ILIKE pattern.
///
/// LIKE metacharacters in the query are escaped so the match stays a
/// literal substring, the same semantics the in-memory backend's
/// `contains` gives.
pub(crate) fn substring_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
