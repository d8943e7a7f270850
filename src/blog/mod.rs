//! # Blog Module
//!
//! Blog records, the repository seam in front of the store, summary
//! statistics, and the service the HTTP layer delegates to.
//!
//! ## Invariants
//! - BLOG-1: A stored blog always has a non-empty title and url
//! - BLOG-2: `likes` defaults to 0 when absent on creation
//! - BLOG-3: The owner is recorded at creation time and never reassigned

pub mod errors;
pub mod service;
pub mod stats;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::Owned;

pub use errors::{BlogError, BlogResult};
pub use service::{BlogService, BlogWithOwner, OwnerRef, OwnerSummary};
pub use stats::{favorite_blog, most_blogs, total_likes, AuthorBlogCount, FavoriteBlog};

/// A single blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    /// Unique blog identifier (store-assigned)
    pub id: Uuid,

    /// Post title (non-empty)
    pub title: String,

    /// Author byline; not every post carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Link to the post (non-empty)
    pub url: String,

    /// Like counter
    pub likes: u64,

    /// Owner (the user who created the post)
    pub user: Uuid,
}

impl Owned for Blog {
    fn owner_id(&self) -> Uuid {
        self.user
    }
}

/// Creation request body.
///
/// Required fields are optional here so their absence surfaces as a
/// validation error from the service rather than a body-parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

/// Partial update request body; absent fields keep their stored value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<u64>,
}

/// Blog repository trait
///
/// Abstracts the durable blog collection. Implementations are injected as
/// explicit dependencies.
pub trait BlogRepository: Send + Sync {
    /// All blogs, in insertion order
    fn all(&self) -> BlogResult<Vec<Blog>>;

    /// Find a blog by its ID
    fn find_by_id(&self, id: Uuid) -> BlogResult<Option<Blog>>;

    /// Insert a new blog
    fn insert(&self, blog: &Blog) -> BlogResult<()>;

    /// Replace an existing blog
    fn update(&self, blog: &Blog) -> BlogResult<()>;

    /// Delete a blog by ID; returns whether a record was removed
    fn delete(&self, id: Uuid) -> BlogResult<bool>;
}

/// In-memory blog repository
#[derive(Debug, Default)]
pub struct InMemoryBlogRepository {
    blogs: std::sync::RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlogRepository for InMemoryBlogRepository {
    fn all(&self) -> BlogResult<Vec<Blog>> {
        let blogs = self
            .blogs
            .read()
            .map_err(|_| BlogError::Storage("Lock poisoned".to_string()))?;
        Ok(blogs.clone())
    }

    fn find_by_id(&self, id: Uuid) -> BlogResult<Option<Blog>> {
        let blogs = self
            .blogs
            .read()
            .map_err(|_| BlogError::Storage("Lock poisoned".to_string()))?;
        Ok(blogs.iter().find(|b| b.id == id).cloned())
    }

    fn insert(&self, blog: &Blog) -> BlogResult<()> {
        let mut blogs = self
            .blogs
            .write()
            .map_err(|_| BlogError::Storage("Lock poisoned".to_string()))?;
        blogs.push(blog.clone());
        Ok(())
    }

    fn update(&self, blog: &Blog) -> BlogResult<()> {
        let mut blogs = self
            .blogs
            .write()
            .map_err(|_| BlogError::Storage("Lock poisoned".to_string()))?;

        if let Some(existing) = blogs.iter_mut().find(|b| b.id == blog.id) {
            *existing = blog.clone();
            Ok(())
        } else {
            Err(BlogError::NotFound)
        }
    }

    fn delete(&self, id: Uuid) -> BlogResult<bool> {
        let mut blogs = self
            .blogs
            .write()
            .map_err(|_| BlogError::Storage("Lock poisoned".to_string()))?;

        let len_before = blogs.len();
        blogs.retain(|b| b.id != id);
        Ok(blogs.len() != len_before)
    }
}
