//! Subtopic operations. Every method resolves the ownership chain
//! through the parent topic before touching the store.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use studyhub_core::error::AppError;
use studyhub_core::result::AppResult;
use studyhub_database::store::{ResourceStore, SubtopicStore};
use studyhub_entity::{CreateSubtopic, Subtopic};

use crate::context::RequestContext;
use crate::ownership::OwnershipResolver;

/// Subtopic operations addressed through their parent topic.
#[derive(Debug, Clone)]
pub struct SubtopicService {
    subtopics: Arc<dyn SubtopicStore>,
    resources: Arc<dyn ResourceStore>,
    resolver: OwnershipResolver,
}

impl SubtopicService {
    /// Creates a new subtopic service.
    pub fn new(
        subtopics: Arc<dyn SubtopicStore>,
        resources: Arc<dyn ResourceStore>,
        resolver: OwnershipResolver,
    ) -> Self {
        Self {
            subtopics,
            resources,
            resolver,
        }
    }

    /// Lists the subtopics of a topic the caller owns, oldest first.
    pub async fn list(&self, ctx: &RequestContext, topic_id: Uuid) -> AppResult<Vec<Subtopic>> {
        self.resolver.resolve_topic(ctx, topic_id).await?;
        self.subtopics.list_by_topic(topic_id).await
    }

    /// Creates a subtopic under a topic the caller owns.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        topic_id: Uuid,
        name: &str,
    ) -> AppResult<Subtopic> {
        self.resolver.resolve_topic(ctx, topic_id).await?;

        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Subtopic name is required"));
        }

        let subtopic = self
            .subtopics
            .insert(&CreateSubtopic {
                name: name.to_string(),
                topic_id,
            })
            .await?;

        info!(subtopic_id = %subtopic.id, topic_id = %topic_id, "Created subtopic");

        Ok(subtopic)
    }

    /// Case-insensitive substring search within one owned topic.
    pub async fn search(
        &self,
        ctx: &RequestContext,
        topic_id: Uuid,
        query: &str,
    ) -> AppResult<Vec<Subtopic>> {
        self.resolver.resolve_topic(ctx, topic_id).await?;
        self.subtopics.search_by_topic(topic_id, query).await
    }

    /// Deletes a subtopic and its resources, children first.
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        topic_id: Uuid,
        subtopic_id: Uuid,
    ) -> AppResult<()> {
        self.resolver
            .resolve_subtopic(ctx, topic_id, subtopic_id)
            .await?;

        let resources_removed = self.resources.delete_by_subtopics(&[subtopic_id]).await?;

        if !self.subtopics.delete(subtopic_id).await? {
            return Err(AppError::not_found("Subtopic not found"));
        }

        info!(
            subtopic_id = %subtopic_id,
            topic_id = %topic_id,
            resources_removed,
            "Deleted subtopic cascade"
        );

        Ok(())
    }
}
