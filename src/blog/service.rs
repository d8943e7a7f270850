//! # Blog Service
//!
//! CRUD operations over injected blog and user repositories. The HTTP layer
//! translates requests into these calls and the results back into status
//! codes; everything the route handlers must guarantee lives here.
//!
//! ## Invariants
//! - BLOG-S1: Ownership is checked before the store mutation, never after
//! - BLOG-S2: A malformed id is a validation failure, distinct from not-found
//! - BLOG-S3: Creation appends the new id to the owner's blog list

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::auth::{can_modify, UserRepository};

use super::errors::{BlogError, BlogResult};
use super::{Blog, BlogRepository, CreateBlogRequest, UpdateBlogRequest};

/// Owner identity resolved for display
#[derive(Debug, Clone, Serialize)]
pub struct OwnerSummary {
    pub id: Uuid,
    pub username: String,
    pub name: String,
}

/// Owner field of a listed blog: the resolved identity, or the raw id when
/// the owner record is gone (the owner list is not reconciled on deletion)
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OwnerRef {
    Resolved(OwnerSummary),
    Raw(Uuid),
}

/// A blog joined with its owner's display identity
#[derive(Debug, Clone, Serialize)]
pub struct BlogWithOwner {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    pub likes: u64,
    pub user: OwnerRef,
}

impl BlogWithOwner {
    fn new(blog: Blog, owner: Option<OwnerSummary>) -> Self {
        let user = match owner {
            Some(summary) => OwnerRef::Resolved(summary),
            None => OwnerRef::Raw(blog.user),
        };

        Self {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user,
        }
    }
}

/// Blog service over injected repositories
pub struct BlogService<B: BlogRepository, U: UserRepository> {
    blogs: Arc<B>,
    users: Arc<U>,
}

impl<B: BlogRepository, U: UserRepository> BlogService<B, U> {
    /// Create a new service over the given repositories
    pub fn new(blogs: Arc<B>, users: Arc<U>) -> Self {
        Self { blogs, users }
    }

    /// All blogs with the owner resolved to `{id, username, name}`.
    ///
    /// Read-only join; the stored records are not touched.
    pub fn list(&self) -> BlogResult<Vec<BlogWithOwner>> {
        let blogs = self.blogs.all()?;
        let mut listed = Vec::with_capacity(blogs.len());

        for blog in blogs {
            let owner = self.users.find_by_id(blog.user)?.map(|user| OwnerSummary {
                id: user.id,
                username: user.username,
                name: user.name,
            });
            listed.push(BlogWithOwner::new(blog, owner));
        }

        Ok(listed)
    }

    /// Snapshot of the raw records, for aggregation
    pub fn snapshot(&self) -> BlogResult<Vec<Blog>> {
        self.blogs.all()
    }

    /// Create a blog owned by the authenticated requester.
    ///
    /// Missing or empty title/url is a validation failure and nothing is
    /// stored. `likes` defaults to 0. The new id is appended to the owner's
    /// blog list.
    pub fn create(&self, owner_id: Uuid, request: CreateBlogRequest) -> BlogResult<Blog> {
        let title = request
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or(BlogError::MissingTitle)?;
        let url = request
            .url
            .filter(|u| !u.trim().is_empty())
            .ok_or(BlogError::MissingUrl)?;

        let mut owner = self
            .users
            .find_by_id(owner_id)?
            .ok_or(BlogError::UnknownUser)?;

        let blog = Blog {
            id: Uuid::new_v4(),
            title,
            author: request.author,
            url,
            likes: request.likes.unwrap_or(0),
            user: owner.id,
        };

        self.blogs.insert(&blog)?;

        owner.blogs.push(blog.id);
        self.users.update(&owner)?;

        Ok(blog)
    }

    /// Fetch a single blog by its id string
    pub fn get(&self, id: &str) -> BlogResult<Blog> {
        let id = parse_id(id)?;
        self.blogs.find_by_id(id)?.ok_or(BlogError::NotFound)
    }

    /// Partially update a blog; absent fields keep their stored value.
    ///
    /// Deliberately does not check ownership: the observed API allows any
    /// requester to update any blog, and delete is the only owner-gated
    /// mutation.
    pub fn update(&self, id: &str, request: UpdateBlogRequest) -> BlogResult<Blog> {
        let id = parse_id(id)?;
        let mut blog = self.blogs.find_by_id(id)?.ok_or(BlogError::NotFound)?;

        if let Some(title) = request.title {
            blog.title = title;
        }
        if let Some(author) = request.author {
            blog.author = Some(author);
        }
        if let Some(url) = request.url {
            blog.url = url;
        }
        if let Some(likes) = request.likes {
            blog.likes = likes;
        }

        self.blogs.update(&blog)?;
        Ok(blog)
    }

    /// Delete a blog as the given requester.
    ///
    /// Check-then-act: the ownership check runs before the store call, and a
    /// failed check leaves the record untouched. The owner's blog list is
    /// not pruned; see the module docs in `auth::user`.
    pub fn delete(&self, requester_id: Uuid, id: &str) -> BlogResult<()> {
        let id = parse_id(id)?;
        let blog = self.blogs.find_by_id(id)?.ok_or(BlogError::NotFound)?;

        if !can_modify(requester_id, &blog) {
            return Err(BlogError::NotOwner);
        }

        if self.blogs.delete(id)? {
            Ok(())
        } else {
            Err(BlogError::NotFound)
        }
    }
}

/// Parse an id path segment, distinguishing malformed ids from unknown ones
fn parse_id(id: &str) -> BlogResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| BlogError::MalformedId(id.to_string()))
}
