//! Topic operations, including the top of the cascading delete.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use studyhub_core::error::AppError;
use studyhub_core::result::AppResult;
use studyhub_database::store::{ResourceStore, SubtopicStore, TopicStore};
use studyhub_entity::{CreateTopic, Topic};

use crate::context::RequestContext;
use crate::ownership::OwnershipResolver;

/// Topic operations scoped to the authenticated owner.
#[derive(Debug, Clone)]
pub struct TopicService {
    topics: Arc<dyn TopicStore>,
    subtopics: Arc<dyn SubtopicStore>,
    resources: Arc<dyn ResourceStore>,
    resolver: OwnershipResolver,
}

impl TopicService {
    /// Creates a new topic service.
    pub fn new(
        topics: Arc<dyn TopicStore>,
        subtopics: Arc<dyn SubtopicStore>,
        resources: Arc<dyn ResourceStore>,
        resolver: OwnershipResolver,
    ) -> Self {
        Self {
            topics,
            subtopics,
            resources,
            resolver,
        }
    }

    /// Lists all topics owned by the caller, oldest first.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Topic>> {
        self.topics.list_by_owner(ctx.user_id).await
    }

    /// Creates a topic owned by the caller.
    pub async fn create(&self, ctx: &RequestContext, name: &str) -> AppResult<Topic> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Topic name is required"));
        }

        let topic = self
            .topics
            .insert(&CreateTopic {
                name: name.to_string(),
                owner_id: ctx.user_id,
            })
            .await?;

        info!(topic_id = %topic.id, owner_id = %ctx.user_id, "Created topic");

        Ok(topic)
    }

    /// Case-insensitive substring search over the caller's own topics.
    ///
    /// An empty query matches everything.
    pub async fn search(&self, ctx: &RequestContext, query: &str) -> AppResult<Vec<Topic>> {
        self.topics.search_by_owner(ctx.user_id, query).await
    }

    /// Deletes a topic and everything beneath it, children first.
    ///
    /// The store has no referential integrity, so the cascade is ordered
    /// to never leave reachable orphans: resources go first, then
    /// subtopics, then the topic itself.
    pub async fn delete(&self, ctx: &RequestContext, topic_id: Uuid) -> AppResult<()> {
        self.resolver.resolve_topic(ctx, topic_id).await?;

        let subtopic_ids = self.subtopics.ids_by_topic(topic_id).await?;
        let resources_removed = self.resources.delete_by_subtopics(&subtopic_ids).await?;
        let subtopics_removed = self.subtopics.delete_by_topic(topic_id).await?;

        if !self.topics.delete(topic_id).await? {
            return Err(AppError::not_found("Topic not found"));
        }

        info!(
            topic_id = %topic_id,
            subtopics_removed,
            resources_removed,
            "Deleted topic cascade"
        );

        Ok(())
    }
}
