//! In-memory document store backend.
//!
//! Used when `database.provider = "memory"`: local development and the
//! test suite run against this backend. All four collections live behind
//! a single `RwLock` so that user uniqueness checks and the insert happen
//! inside one write critical section, giving the same guarantee the
//! PostgreSQL unique constraints give.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use studyhub_core::error::AppError;
use studyhub_core::result::AppResult;
use studyhub_entity::{
    CreateResource, CreateSubtopic, CreateTopic, CreateUser, Resource, Subtopic, Topic, User,
};

use crate::store::{ResourceStore, SubtopicStore, TopicStore, UserStore};

#[derive(Debug, Default)]
struct Collections {
    users: HashMap<Uuid, User>,
    topics: HashMap<Uuid, Topic>,
    subtopics: HashMap<Uuid, Subtopic>,
    resources: HashMap<Uuid, Resource>,
}

/// In-memory implementation of all four store traits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Sort by creation time so listings match the repositories' ORDER BY.
fn sorted_by_created_at<T, F>(mut items: Vec<T>, created_at: F) -> Vec<T>
where
    F: Fn(&T) -> chrono::DateTime<Utc>,
{
    items.sort_by_key(|item| created_at(item));
    items
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert(&self, data: &CreateUser) -> AppResult<User> {
        let mut inner = self.inner.write().await;

        if inner.users.values().any(|u| u.username == data.username) {
            return Err(AppError::duplicate(format!(
                "Username '{}' already exists",
                data.username
            )));
        }
        if inner.users.values().any(|u| u.email == data.email) {
            return Err(AppError::duplicate("Email already in use"));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: data.username.clone(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }
}

#[async_trait]
impl TopicStore for MemoryStore {
    async fn insert(&self, data: &CreateTopic) -> AppResult<Topic> {
        let mut inner = self.inner.write().await;
        let topic = Topic {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            owner_id: data.owner_id,
            created_at: Utc::now(),
        };
        inner.topics.insert(topic.id, topic.clone());
        Ok(topic)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Topic>> {
        Ok(self.inner.read().await.topics.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Topic>> {
        let inner = self.inner.read().await;
        let topics: Vec<Topic> = inner
            .topics
            .values()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect();
        Ok(sorted_by_created_at(topics, |t| t.created_at))
    }

    async fn search_by_owner(&self, owner_id: Uuid, query: &str) -> AppResult<Vec<Topic>> {
        let needle = query.to_lowercase();
        let inner = self.inner.read().await;
        let topics: Vec<Topic> = inner
            .topics
            .values()
            .filter(|t| t.owner_id == owner_id && t.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(sorted_by_created_at(topics, |t| t.created_at))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.inner.write().await.topics.remove(&id).is_some())
    }
}

#[async_trait]
impl SubtopicStore for MemoryStore {
    async fn insert(&self, data: &CreateSubtopic) -> AppResult<Subtopic> {
        let mut inner = self.inner.write().await;
        let subtopic = Subtopic {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            topic_id: data.topic_id,
            created_at: Utc::now(),
        };
        inner.subtopics.insert(subtopic.id, subtopic.clone());
        Ok(subtopic)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Subtopic>> {
        Ok(self.inner.read().await.subtopics.get(&id).cloned())
    }

    async fn list_by_topic(&self, topic_id: Uuid) -> AppResult<Vec<Subtopic>> {
        let inner = self.inner.read().await;
        let subtopics: Vec<Subtopic> = inner
            .subtopics
            .values()
            .filter(|s| s.topic_id == topic_id)
            .cloned()
            .collect();
        Ok(sorted_by_created_at(subtopics, |s| s.created_at))
    }

    async fn search_by_topic(&self, topic_id: Uuid, query: &str) -> AppResult<Vec<Subtopic>> {
        let needle = query.to_lowercase();
        let inner = self.inner.read().await;
        let subtopics: Vec<Subtopic> = inner
            .subtopics
            .values()
            .filter(|s| s.topic_id == topic_id && s.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Ok(sorted_by_created_at(subtopics, |s| s.created_at))
    }

    async fn ids_by_topic(&self, topic_id: Uuid) -> AppResult<Vec<Uuid>> {
        Ok(self
            .inner
            .read()
            .await
            .subtopics
            .values()
            .filter(|s| s.topic_id == topic_id)
            .map(|s| s.id)
            .collect())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.inner.write().await.subtopics.remove(&id).is_some())
    }

    async fn delete_by_topic(&self, topic_id: Uuid) -> AppResult<u64> {
        let mut inner = self.inner.write().await;
        let before = inner.subtopics.len();
        inner.subtopics.retain(|_, s| s.topic_id != topic_id);
        Ok((before - inner.subtopics.len()) as u64)
    }
}

#[async_trait]
impl ResourceStore for MemoryStore {
    async fn insert(&self, data: &CreateResource) -> AppResult<Resource> {
        let mut inner = self.inner.write().await;
        let resource = Resource {
            id: Uuid::new_v4(),
            title: data.title.clone(),
            url: data.url.clone(),
            tag: data.tag.clone(),
            subtopic_id: data.subtopic_id,
            file_type: data.file_type.clone(),
            file_name: data.file_name.clone(),
            created_at: Utc::now(),
        };
        inner.resources.insert(resource.id, resource.clone());
        Ok(resource)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Resource>> {
        Ok(self.inner.read().await.resources.get(&id).cloned())
    }

    async fn list_by_subtopic(
        &self,
        subtopic_id: Uuid,
        tag: Option<&str>,
    ) -> AppResult<Vec<Resource>> {
        let inner = self.inner.read().await;
        let resources: Vec<Resource> = inner
            .resources
            .values()
            .filter(|r| r.subtopic_id == subtopic_id)
            .filter(|r| match tag {
                Some(tag) => r.tag.as_deref() == Some(tag),
                None => true,
            })
            .cloned()
            .collect();
        Ok(sorted_by_created_at(resources, |r| r.created_at))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.inner.write().await.resources.remove(&id).is_some())
    }

    async fn delete_by_subtopics(&self, subtopic_ids: &[Uuid]) -> AppResult<u64> {
        let mut inner = self.inner.write().await;
        let before = inner.resources.len();
        inner
            .resources
            .retain(|_, r| !subtopic_ids.contains(&r.subtopic_id));
        Ok((before - inner.resources.len()) as u64)
    }

    async fn distinct_tags(&self) -> AppResult<Vec<String>> {
        let inner = self.inner.read().await;
        let mut tags: Vec<String> = inner
            .resources
            .values()
            .filter_map(|r| r.tag.clone())
            .collect();
        tags.sort();
        tags.dedup();
        Ok(tags)
    }
}
