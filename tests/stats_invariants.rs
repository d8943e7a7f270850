//! Blog Statistics Invariant Tests
//!
//! Aggregations are pure and deterministic:
//! - Empty input yields 0 / None, never an error
//! - Tie-breaks are stable (first in input order / first-seen author)
//! - Repeated runs over the same input agree

use uuid::Uuid;

use bloglist::blog::{favorite_blog, most_blogs, total_likes, Blog};

// =============================================================================
// Helper Functions
// =============================================================================

fn blog(title: &str, author: &str, likes: u64) -> Blog {
    Blog {
        id: Uuid::new_v4(),
        title: title.to_string(),
        author: Some(author.to_string()),
        url: format!("https://example.com/{}", title.replace(' ', "-")),
        likes,
        user: Uuid::new_v4(),
    }
}

/// A fixed list of blogs with a unique favorite and a unique top author
fn blog_list() -> Vec<Blog> {
    vec![
        blog("React patterns", "Michael Chan", 7),
        blog("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
        blog("Canonical string reduction", "Edsger W. Dijkstra", 12),
        blog("First class tests", "Robert C. Martin", 10),
        blog("TDD harms architecture", "Robert C. Martin", 0),
        blog("Type wars", "Robert C. Martin", 2),
    ]
}

// =============================================================================
// Total Likes
// =============================================================================

#[test]
fn total_likes_of_empty_list_is_zero() {
    assert_eq!(total_likes(&[]), 0);
}

#[test]
fn total_likes_of_one_blog_equals_its_likes() {
    let blogs = vec![blog("First class tests", "Robert C. Martin", 10)];
    assert_eq!(total_likes(&blogs), 10);
}

#[test]
fn total_likes_of_a_bigger_list_is_calculated_right() {
    assert_eq!(total_likes(&blog_list()), 36);
}

// =============================================================================
// Favorite Blog
// =============================================================================

#[test]
fn favorite_of_empty_list_is_none() {
    assert_eq!(favorite_blog(&[]), None);
}

#[test]
fn favorite_is_the_blog_with_most_likes() {
    let favorite = favorite_blog(&blog_list()).unwrap();

    assert_eq!(favorite.title, "Canonical string reduction");
    assert_eq!(favorite.author.as_deref(), Some("Edsger W. Dijkstra"));
    assert_eq!(favorite.likes, 12);
}

#[test]
fn favorite_tie_resolves_to_first_in_input_order() {
    let blogs = vec![
        blog("first", "A", 12),
        blog("second", "B", 12),
        blog("third", "C", 3),
    ];

    assert_eq!(favorite_blog(&blogs).unwrap().title, "first");
}

// =============================================================================
// Most Blogs
// =============================================================================

#[test]
fn most_blogs_of_empty_list_is_none() {
    assert_eq!(most_blogs(&[]), None);
}

#[test]
fn author_with_most_blogs_is_found() {
    let top = most_blogs(&blog_list()).unwrap();

    assert_eq!(top.author, "Robert C. Martin");
    assert_eq!(top.blogs, 3);
}

#[test]
fn most_blogs_tie_resolves_to_first_seen_author() {
    // A and B both have two blogs; A was seen first
    let blogs = vec![
        blog("one", "A", 0),
        blog("two", "B", 0),
        blog("three", "A", 0),
        blog("four", "B", 0),
    ];

    let top = most_blogs(&blogs).unwrap();
    assert_eq!(top.author, "A");
    assert_eq!(top.blogs, 2);
}

// =============================================================================
// Determinism
// =============================================================================

/// Same input gives the same answers every time.
#[test]
fn aggregations_are_deterministic() {
    let blogs = blog_list();

    let likes = total_likes(&blogs);
    let favorite = favorite_blog(&blogs);
    let top = most_blogs(&blogs);

    for _ in 0..100 {
        assert_eq!(total_likes(&blogs), likes);
        assert_eq!(favorite_blog(&blogs), favorite);
        assert_eq!(most_blogs(&blogs), top);
    }
}

/// Aggregations never mutate their input.
#[test]
fn aggregations_leave_input_untouched() {
    let blogs = blog_list();
    let titles_before: Vec<_> = blogs.iter().map(|b| b.title.clone()).collect();
    let likes_before: Vec<_> = blogs.iter().map(|b| b.likes).collect();

    total_likes(&blogs);
    favorite_blog(&blogs);
    most_blogs(&blogs);

    let titles_after: Vec<_> = blogs.iter().map(|b| b.title.clone()).collect();
    let likes_after: Vec<_> = blogs.iter().map(|b| b.likes).collect();

    assert_eq!(titles_before, titles_after);
    assert_eq!(likes_before, likes_after);
}
