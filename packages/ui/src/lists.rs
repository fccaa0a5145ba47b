//! Local list patches applied after a mutation succeeded.
//!
//! Views never refetch after create/update/delete; they apply the server's
//! answer to the collection they already hold. These helpers operate on the
//! whole collection, never on a page window.

use api::{Comment, HasId, Id};

use crate::session::SessionUser;

/// Drop the item with `id`. Returns whether anything was removed.
pub fn remove_by_id<T: HasId>(items: &mut Vec<T>, id: &Id) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// Apply `patch` to the item with `id`. Returns whether it was found.
pub fn patch_by_id<T: HasId>(items: &mut [T], id: &Id, patch: impl FnOnce(&mut T)) -> bool {
    match items.iter_mut().find(|item| item.id() == id) {
        Some(item) => {
            patch(item);
            true
        }
        None => false,
    }
}

/// New items go first, as the newest comment is shown on top.
pub fn prepend<T>(items: &mut Vec<T>, item: T) {
    items.insert(0, item);
}

/// Everything except the item with `id`.
pub fn without<T: HasId>(items: Vec<T>, id: &Id) -> Vec<T> {
    items.into_iter().filter(|item| item.id() != id).collect()
}

/// Comments rendered under a post: a preview of `preview` items unless the
/// reader asked for all of them.
pub fn visible_comments(comments: &[Comment], preview: usize, show_all: bool) -> &[Comment] {
    if show_all {
        comments
    } else {
        &comments[..comments.len().min(preview)]
    }
}

/// Whether to offer "Show All Comments". Offered as soon as the preview is
/// full, even when nothing beyond it is hidden.
pub fn offers_show_all(comments: &[Comment], preview: usize, show_all: bool) -> bool {
    !show_all && comments.len() >= preview
}

/// Whether `viewer` wrote `comment`.
///
/// A listing fetched by author (`by_author`) holds only the viewer's own
/// comments. Elsewhere the author id decides, and the display name stands in
/// when the listing left the id out.
pub fn is_own_comment(viewer: Option<&SessionUser>, comment: &Comment, by_author: bool) -> bool {
    let Some(viewer) = viewer else {
        return false;
    };
    if by_author {
        return true;
    }
    match &comment.author.id {
        Some(author) => &viewer.id == author,
        None => viewer.name == comment.author.name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{AuthorRef, User};

    fn users(n: usize) -> Vec<User> {
        (0..n)
            .map(|i| User {
                id: Id::new(i.to_string()),
                name: format!("user{i}"),
                email: format!("user{i}@example.com"),
                is_admin: false,
            })
            .collect()
    }

    fn comments(n: usize) -> Vec<Comment> {
        let at = "2024-01-01T00:00:00Z".parse().unwrap();
        (0..n)
            .map(|i| Comment {
                id: Id::new(i.to_string()),
                text: format!("comment {i}"),
                author: AuthorRef {
                    id: None,
                    name: "ana".into(),
                },
                post: None,
                created_at: at,
                updated_at: at,
            })
            .collect()
    }

    #[test]
    fn test_remove_by_id() {
        let mut list = users(3);
        assert!(remove_by_id(&mut list, &Id::new("1")));
        assert_eq!(list.len(), 2);
        assert!(!remove_by_id(&mut list, &Id::new("1")));
    }

    #[test]
    fn test_patch_by_id() {
        let mut list = users(3);
        let found = patch_by_id(&mut list, &Id::new("2"), |u| u.is_admin = true);
        assert!(found);
        assert!(list[2].is_admin);
        assert!(!patch_by_id(&mut list, &Id::new("9"), |u| u.is_admin = true));
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut list = users(2);
        let newest = users(5).pop().unwrap();
        prepend(&mut list, newest);
        assert_eq!(list[0].id.as_str(), "4");
    }

    #[test]
    fn test_without_excludes_self() {
        let list = without(users(3), &Id::new("0"));
        assert!(list.iter().all(|u| u.id.as_str() != "0"));
        assert_eq!(list.len(), 2);
    }

    fn viewer(id: &str, name: &str) -> SessionUser {
        SessionUser {
            id: Id::new(id),
            name: name.into(),
            email: format!("{name}@example.com"),
            is_admin: false,
            exp: 0,
        }
    }

    #[test]
    fn test_own_comment_without_author_id() {
        // Listings may omit the author id; none of these may lock out the author
        let listed = comments(1).remove(0);
        assert!(listed.author.id.is_none());

        let ana = viewer("7", "ana");
        assert!(is_own_comment(Some(&ana), &listed, true));
        assert!(is_own_comment(Some(&ana), &listed, false));
        assert!(!is_own_comment(Some(&viewer("8", "bob")), &listed, false));
        assert!(!is_own_comment(None, &listed, true));
    }

    #[test]
    fn test_own_comment_by_author_id() {
        let mut comment = comments(1).remove(0);
        comment.author.id = Some(Id::new("7"));

        assert!(is_own_comment(Some(&viewer("7", "renamed")), &comment, false));
        assert!(!is_own_comment(Some(&viewer("8", "ana")), &comment, false));
    }

    #[test]
    fn test_comment_preview() {
        let all = comments(20);
        assert_eq!(visible_comments(&all, 15, false).len(), 15);
        assert_eq!(visible_comments(&all, 15, true).len(), 20);
        assert!(offers_show_all(&all, 15, false));
        assert!(!offers_show_all(&all, 15, true));

        let few = comments(14);
        assert_eq!(visible_comments(&few, 15, false).len(), 14);
        assert!(!offers_show_all(&few, 15, false));

        let exactly = comments(15);
        assert!(offers_show_all(&exactly, 15, false));
    }
}
