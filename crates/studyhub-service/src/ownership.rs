//! Ownership chain resolution for the Topic → Subtopic → Resource hierarchy.
//!
//! Ownership lives only on topics; everything below derives it through
//! parent links that carry no referential integrity in the store. The
//! resolver re-walks the chain on every request and applies one rule at
//! every level: existence is checked before ownership, so a missing
//! entity, an orphaned parent, or a mismatched parent link all read as
//! NotFound, and only a live chain owned by someone else reads as
//! Authorization.

use std::sync::Arc;

use uuid::Uuid;

use studyhub_core::error::AppError;
use studyhub_core::result::AppResult;
use studyhub_database::store::{ResourceStore, SubtopicStore, TopicStore};
use studyhub_entity::{Resource, Subtopic, Topic};

use crate::context::RequestContext;

/// Resolves and authorizes the ownership chain for hierarchy entities.
#[derive(Debug, Clone)]
pub struct OwnershipResolver {
    topics: Arc<dyn TopicStore>,
    subtopics: Arc<dyn SubtopicStore>,
    resources: Arc<dyn ResourceStore>,
}

impl OwnershipResolver {
    /// Creates a new resolver over the given stores.
    pub fn new(
        topics: Arc<dyn TopicStore>,
        subtopics: Arc<dyn SubtopicStore>,
        resources: Arc<dyn ResourceStore>,
    ) -> Self {
        Self {
            topics,
            subtopics,
            resources,
        }
    }

    /// Resolve a topic and verify the caller owns it.
    pub async fn resolve_topic(&self, ctx: &RequestContext, topic_id: Uuid) -> AppResult<Topic> {
        let topic = self
            .topics
            .find_by_id(topic_id)
            .await?
            .ok_or_else(|| AppError::not_found("Topic not found"))?;

        if topic.owner_id != ctx.user_id {
            return Err(AppError::authorization("Access denied"));
        }

        Ok(topic)
    }

    /// Resolve a subtopic addressed through its parent topic.
    ///
    /// The subtopic must exist and actually belong to the topic named in
    /// the path; a mismatch reads as NotFound.
    pub async fn resolve_subtopic(
        &self,
        ctx: &RequestContext,
        topic_id: Uuid,
        subtopic_id: Uuid,
    ) -> AppResult<(Topic, Subtopic)> {
        let topic = self.resolve_topic(ctx, topic_id).await?;

        let subtopic = self
            .subtopics
            .find_by_id(subtopic_id)
            .await?
            .filter(|s| s.topic_id == topic_id)
            .ok_or_else(|| AppError::not_found("Subtopic not found"))?;

        Ok((topic, subtopic))
    }

    /// Resolve a subtopic addressed directly, deriving the owning topic.
    ///
    /// An orphaned subtopic (parent topic deleted underneath it) reads as
    /// NotFound rather than leaking its existence.
    pub async fn resolve_subtopic_by_id(
        &self,
        ctx: &RequestContext,
        subtopic_id: Uuid,
    ) -> AppResult<(Topic, Subtopic)> {
        let subtopic = self
            .subtopics
            .find_by_id(subtopic_id)
            .await?
            .ok_or_else(|| AppError::not_found("Subtopic not found"))?;

        let topic = self
            .topics
            .find_by_id(subtopic.topic_id)
            .await?
            .ok_or_else(|| AppError::not_found("Subtopic not found"))?;

        if topic.owner_id != ctx.user_id {
            return Err(AppError::authorization("Access denied"));
        }

        Ok((topic, subtopic))
    }

    /// Resolve a resource addressed through its parent subtopic.
    pub async fn resolve_resource(
        &self,
        ctx: &RequestContext,
        subtopic_id: Uuid,
        resource_id: Uuid,
    ) -> AppResult<(Topic, Subtopic, Resource)> {
        let (topic, subtopic) = self.resolve_subtopic_by_id(ctx, subtopic_id).await?;

        let resource = self
            .resources
            .find_by_id(resource_id)
            .await?
            .filter(|r| r.subtopic_id == subtopic_id)
            .ok_or_else(|| AppError::not_found("Resource not found"))?;

        Ok((topic, subtopic, resource))
    }
}
