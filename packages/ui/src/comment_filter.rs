//! Author and post selectors over the dashboard comment list.
//!
//! The displayed subset is the intersection of both selectors. A selection
//! that would leave nothing to show is dropped back to its "All" sentinel, so
//! the list never goes empty because of a filter alone. Callers reset the page
//! to 0 whenever a selector changes.

use api::Comment;

pub const ALL_AUTHORS: &str = "All Authors";
pub const ALL_POSTS: &str = "All Posts";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selector {
    Author,
    Post,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentFilter {
    author: Option<String>,
    post: Option<String>,
}

impl CommentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn post(&self) -> Option<&str> {
        self.post.as_deref()
    }

    /// Value to show in the author `<select>`.
    pub fn author_label(&self) -> &str {
        self.author().unwrap_or(ALL_AUTHORS)
    }

    pub fn post_label(&self) -> &str {
        self.post().unwrap_or(ALL_POSTS)
    }

    /// Select an author by name; the sentinel clears the selector.
    pub fn select_author(&mut self, value: &str, comments: &[Comment]) {
        self.author = selection(value, ALL_AUTHORS);
        self.reconcile_after(comments, Some(Selector::Author));
    }

    pub fn select_post(&mut self, value: &str, comments: &[Comment]) {
        self.post = selection(value, ALL_POSTS);
        self.reconcile_after(comments, Some(Selector::Post));
    }

    /// Re-check both selectors after the comment list itself changed.
    pub fn reconcile(&mut self, comments: &[Comment]) {
        self.reconcile_after(comments, None);
    }

    fn reconcile_after(&mut self, comments: &[Comment], changed: Option<Selector>) {
        if let Some(author) = &self.author {
            if !comments.iter().any(|c| &c.author.name == author) {
                tracing::debug!("No comments by {}, clearing author filter", author);
                self.author = None;
            }
        }
        if let Some(post) = &self.post {
            if !comments.iter().any(|c| c.post_title() == post) {
                tracing::debug!("No comments on {}, clearing post filter", post);
                self.post = None;
            }
        }
        if self.author.is_some() && self.post.is_some() && self.apply(comments).is_empty() {
            match changed {
                Some(Selector::Author) => self.post = None,
                Some(Selector::Post) => self.author = None,
                None => {
                    self.author = None;
                    self.post = None;
                }
            }
        }
    }

    fn matches(&self, comment: &Comment) -> bool {
        let author_ok = self
            .author
            .as_ref()
            .is_none_or(|a| &comment.author.name == a);
        let post_ok = self.post.as_ref().is_none_or(|p| comment.post_title() == p);
        author_ok && post_ok
    }

    /// Comments passing both selectors, in list order.
    pub fn apply<'a>(&self, comments: &'a [Comment]) -> Vec<&'a Comment> {
        comments.iter().filter(|c| self.matches(c)).collect()
    }
}

fn selection(value: &str, sentinel: &str) -> Option<String> {
    if value == sentinel || value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Distinct author names in first-seen order.
pub fn author_options(comments: &[Comment]) -> Vec<String> {
    distinct(comments.iter().map(|c| c.author.name.as_str()))
}

/// Distinct post titles in first-seen order.
pub fn post_options(comments: &[Comment]) -> Vec<String> {
    distinct(comments.iter().map(|c| c.post_title()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{AuthorRef, Id, PostRef};

    fn comment(id: &str, author: &str, post: &str) -> Comment {
        let at = "2024-01-01T00:00:00Z".parse().unwrap();
        Comment {
            id: Id::new(id),
            text: format!("{author} on {post}"),
            author: AuthorRef {
                id: None,
                name: author.into(),
            },
            post: Some(PostRef {
                id: None,
                title: post.into(),
            }),
            created_at: at,
            updated_at: at,
        }
    }

    fn sample() -> Vec<Comment> {
        vec![
            comment("1", "ana", "Lisbon"),
            comment("2", "bo", "Kyoto"),
            comment("3", "ana", "Kyoto"),
            comment("4", "cy", "Lima"),
        ]
    }

    fn ids(comments: Vec<&Comment>) -> Vec<&str> {
        comments.into_iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_no_selection_shows_everything() {
        let comments = sample();
        let filter = CommentFilter::new();
        assert_eq!(filter.apply(&comments).len(), 4);
        assert_eq!(filter.author_label(), ALL_AUTHORS);
        assert_eq!(filter.post_label(), ALL_POSTS);
    }

    #[test]
    fn test_intersection_of_both_selectors() {
        let comments = sample();
        let mut filter = CommentFilter::new();
        filter.select_author("ana", &comments);
        assert_eq!(ids(filter.apply(&comments)), ["1", "3"]);
        filter.select_post("Kyoto", &comments);
        assert_eq!(ids(filter.apply(&comments)), ["3"]);
    }

    #[test]
    fn test_author_change_resets_post_when_empty() {
        let comments = sample();
        let mut filter = CommentFilter::new();
        filter.select_post("Lima", &comments);
        filter.select_author("ana", &comments);

        assert_eq!(filter.author(), Some("ana"));
        assert_eq!(filter.post_label(), ALL_POSTS);
        assert_eq!(ids(filter.apply(&comments)), ["1", "3"]);
    }

    #[test]
    fn test_post_change_resets_author_when_empty() {
        let comments = sample();
        let mut filter = CommentFilter::new();
        filter.select_author("bo", &comments);
        filter.select_post("Lisbon", &comments);

        assert_eq!(filter.author(), None);
        assert_eq!(filter.post(), Some("Lisbon"));
    }

    #[test]
    fn test_sentinel_clears_selector() {
        let comments = sample();
        let mut filter = CommentFilter::new();
        filter.select_author("cy", &comments);
        assert_eq!(filter.author(), Some("cy"));
        filter.select_author(ALL_AUTHORS, &comments);
        assert_eq!(filter.author(), None);
        assert_eq!(filter.author_label(), ALL_AUTHORS);
    }

    #[test]
    fn test_reconcile_after_last_match_deleted() {
        let mut comments = sample();
        let mut filter = CommentFilter::new();
        filter.select_author("cy", &comments);
        comments.retain(|c| c.id.as_str() != "4");

        filter.reconcile(&comments);
        assert_eq!(filter.author(), None);
        assert_eq!(filter.apply(&comments).len(), 3);
    }

    #[test]
    fn test_options_are_distinct_in_first_seen_order() {
        let comments = sample();
        assert_eq!(author_options(&comments), ["ana", "bo", "cy"]);
        assert_eq!(post_options(&comments), ["Lisbon", "Kyoto", "Lima"]);
        assert!(author_options(&[]).is_empty());
    }
}
