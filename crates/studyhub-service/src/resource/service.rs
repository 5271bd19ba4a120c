//! Resource operations under subtopics, including file uploads through
//! the injected blob store.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use studyhub_core::error::AppError;
use studyhub_core::result::AppResult;
use studyhub_core::traits::BlobStore;
use studyhub_database::store::ResourceStore;
use studyhub_entity::{CreateResource, Resource};
use studyhub_storage::filename::sanitize_file_name;

use crate::context::RequestContext;
use crate::ownership::OwnershipResolver;

/// An incoming file upload, already pulled out of the request body.
#[derive(Debug, Clone)]
pub struct ResourceUpload {
    /// Resource title; falls back to the file name when blank.
    pub title: String,
    /// Optional tag.
    pub tag: Option<String>,
    /// File name as sent by the client, sanitized before storage.
    pub file_name: String,
    /// MIME type as sent by the client.
    pub content_type: String,
    /// Raw file bytes.
    pub data: Bytes,
}

/// Resource operations addressed through their parent subtopic.
#[derive(Debug, Clone)]
pub struct ResourceService {
    resources: Arc<dyn ResourceStore>,
    blobs: Arc<dyn BlobStore>,
    resolver: OwnershipResolver,
    max_upload_size_bytes: u64,
}

impl ResourceService {
    /// Creates a new resource service.
    pub fn new(
        resources: Arc<dyn ResourceStore>,
        blobs: Arc<dyn BlobStore>,
        resolver: OwnershipResolver,
        max_upload_size_bytes: u64,
    ) -> Self {
        Self {
            resources,
            blobs,
            resolver,
            max_upload_size_bytes,
        }
    }

    /// Lists resources under an owned subtopic, optionally filtered by
    /// exact tag match.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        subtopic_id: Uuid,
        tag: Option<&str>,
    ) -> AppResult<Vec<Resource>> {
        self.resolver.resolve_subtopic_by_id(ctx, subtopic_id).await?;
        self.resources.list_by_subtopic(subtopic_id, tag).await
    }

    /// Creates a link resource under an owned subtopic.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        subtopic_id: Uuid,
        title: &str,
        url: &str,
        tag: Option<&str>,
    ) -> AppResult<Resource> {
        self.resolver.resolve_subtopic_by_id(ctx, subtopic_id).await?;

        let title = title.trim();
        let url = url.trim();
        if title.is_empty() || url.is_empty() {
            return Err(AppError::validation("Title and URL are required"));
        }

        let resource = self
            .resources
            .insert(&CreateResource {
                title: title.to_string(),
                url: url.to_string(),
                tag: normalize_tag(tag),
                subtopic_id,
                file_type: None,
                file_name: None,
            })
            .await?;

        info!(resource_id = %resource.id, subtopic_id = %subtopic_id, "Created resource");

        Ok(resource)
    }

    /// Uploads a file and records it as a resource.
    ///
    /// The ownership chain and size limit are checked before any bytes
    /// leave the process; the blob upload is the last fallible step
    /// before the insert, so a failed upload records nothing.
    pub async fn upload(
        &self,
        ctx: &RequestContext,
        subtopic_id: Uuid,
        upload: ResourceUpload,
    ) -> AppResult<Resource> {
        self.resolver.resolve_subtopic_by_id(ctx, subtopic_id).await?;

        if upload.data.is_empty() {
            return Err(AppError::validation("Uploaded file is empty"));
        }
        if upload.data.len() as u64 > self.max_upload_size_bytes {
            return Err(AppError::validation(format!(
                "File exceeds the maximum upload size of {} bytes",
                self.max_upload_size_bytes
            )));
        }

        let file_name = sanitize_file_name(&upload.file_name);
        let title = if upload.title.trim().is_empty() {
            file_name.clone()
        } else {
            upload.title.trim().to_string()
        };

        let blob = self
            .blobs
            .upload(&file_name, &upload.content_type, upload.data)
            .await?;

        let resource = self
            .resources
            .insert(&CreateResource {
                title,
                url: blob.url,
                tag: normalize_tag(upload.tag.as_deref()),
                subtopic_id,
                file_type: Some(blob.file_type),
                file_name: Some(blob.file_name),
            })
            .await?;

        info!(
            resource_id = %resource.id,
            subtopic_id = %subtopic_id,
            bytes = blob.size_bytes,
            "Uploaded resource file"
        );

        Ok(resource)
    }

    /// Deletes a resource under an owned subtopic.
    ///
    /// Uploaded blobs are left in place; the blob store keeps no index
    /// back to resources and stale blobs are unreachable once the row
    /// is gone.
    pub async fn delete(
        &self,
        ctx: &RequestContext,
        subtopic_id: Uuid,
        resource_id: Uuid,
    ) -> AppResult<()> {
        self.resolver
            .resolve_resource(ctx, subtopic_id, resource_id)
            .await?;

        if !self.resources.delete(resource_id).await? {
            return Err(AppError::not_found("Resource not found"));
        }

        info!(resource_id = %resource_id, "Deleted resource");

        Ok(())
    }

    /// Lists every distinct tag in the system, across all users.
    pub async fn tags(&self) -> AppResult<Vec<String>> {
        self.resources.distinct_tags().await
    }
}

fn normalize_tag(tag: Option<&str>) -> Option<String> {
    tag.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
