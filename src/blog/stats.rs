//! # Blog Statistics
//!
//! Pure summary aggregations over an in-memory snapshot of blogs. These run
//! independently of the HTTP layer, on a sequence already loaded from the
//! store.
//!
//! ## Invariants
//! - STAT-1: No I/O, no mutation; input slices are only read
//! - STAT-2: Empty input yields 0 / `None`, never an error
//! - STAT-3: Tie-breaks are deterministic (first in input order / first-seen
//!   author order)

use serde::Serialize;

use super::Blog;

/// Projection of the most-liked blog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteBlog {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub likes: u64,
}

/// Projection of the most prolific author
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorBlogCount {
    pub author: String,
    pub blogs: u64,
}

/// Sum of likes across all blogs; 0 for an empty slice.
pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs.iter().map(|blog| blog.likes).sum()
}

/// The blog with the most likes, projected to title/author/likes.
///
/// Ties keep the first maximal blog in input order. `None` when the slice
/// is empty.
pub fn favorite_blog(blogs: &[Blog]) -> Option<FavoriteBlog> {
    let mut best: Option<&Blog> = None;

    for blog in blogs {
        match best {
            Some(current) if blog.likes <= current.likes => {}
            _ => best = Some(blog),
        }
    }

    best.map(|blog| FavoriteBlog {
        title: blog.title.clone(),
        author: blog.author.clone(),
        likes: blog.likes,
    })
}

/// The author with the most blogs, with the count.
///
/// Authors are tallied in first-seen order and ties keep the earliest-seen
/// author, so repeated runs over the same input agree. Blogs without an
/// author byline are not attributed to anyone; `None` when no blog carries
/// an author.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogCount> {
    // Vec keeps first-seen order; author counts stay small in practice
    let mut tallies: Vec<(&str, u64)> = Vec::new();

    for author in blogs.iter().filter_map(|blog| blog.author.as_deref()) {
        match tallies.iter_mut().find(|(name, _)| *name == author) {
            Some((_, count)) => *count += 1,
            None => tallies.push((author, 1)),
        }
    }

    let mut best: Option<(&str, u64)> = None;

    for (author, count) in tallies {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((author, count)),
        }
    }

    best.map(|(author, count)| AuthorBlogCount {
        author: author.to_string(),
        blogs: count,
    })
}
