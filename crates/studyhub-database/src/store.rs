//! Store trait seams between services and the persistence backends.
//!
//! Each trait has two implementations: the PostgreSQL repositories in
//! [`crate::repositories`] and the in-memory backend in [`crate::memory`].
//! Services hold `Arc<dyn …Store>` and never see the concrete backend.

use async_trait::async_trait;
use uuid::Uuid;

use studyhub_core::result::AppResult;
use studyhub_entity::{
    CreateResource, CreateSubtopic, CreateTopic, CreateUser, Resource, Subtopic, Topic, User,
};

/// User persistence operations.
///
/// `insert` is the single point where username/email uniqueness is
/// enforced: the backend must reject duplicates atomically (unique
/// constraint or single critical section), so concurrent registrations
/// cannot both succeed.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new user, failing with a Duplicate error on collision.
    async fn insert(&self, data: &CreateUser) -> AppResult<User>;

    /// Find a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

/// Topic persistence operations.
#[async_trait]
pub trait TopicStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new topic.
    async fn insert(&self, data: &CreateTopic) -> AppResult<Topic>;

    /// Find a topic by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Topic>>;

    /// List all topics owned by a user, oldest first.
    async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Topic>>;

    /// Case-insensitive substring search over an owner's topic names.
    async fn search_by_owner(&self, owner_id: Uuid, query: &str) -> AppResult<Vec<Topic>>;

    /// Delete a topic. Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// Subtopic persistence operations.
#[async_trait]
pub trait SubtopicStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new subtopic.
    async fn insert(&self, data: &CreateSubtopic) -> AppResult<Subtopic>;

    /// Find a subtopic by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Subtopic>>;

    /// List all subtopics under a topic, oldest first.
    async fn list_by_topic(&self, topic_id: Uuid) -> AppResult<Vec<Subtopic>>;

    /// Case-insensitive substring search over a topic's subtopic names.
    async fn search_by_topic(&self, topic_id: Uuid, query: &str) -> AppResult<Vec<Subtopic>>;

    /// List the IDs of all subtopics under a topic (for cascade deletes).
    async fn ids_by_topic(&self, topic_id: Uuid) -> AppResult<Vec<Uuid>>;

    /// Delete a subtopic. Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Delete all subtopics under a topic. Returns the number removed.
    async fn delete_by_topic(&self, topic_id: Uuid) -> AppResult<u64>;
}

/// Resource persistence operations.
#[async_trait]
pub trait ResourceStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new resource.
    async fn insert(&self, data: &CreateResource) -> AppResult<Resource>;

    /// Find a resource by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Resource>>;

    /// List resources under a subtopic, optionally filtered by exact tag.
    async fn list_by_subtopic(
        &self,
        subtopic_id: Uuid,
        tag: Option<&str>,
    ) -> AppResult<Vec<Resource>>;

    /// Delete a resource. Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Delete all resources under the given subtopics. Returns the number removed.
    async fn delete_by_subtopics(&self, subtopic_ids: &[Uuid]) -> AppResult<u64>;

    /// List distinct non-null tags across all resources, system-wide.
    async fn distinct_tags(&self) -> AppResult<Vec<String>>;
}
