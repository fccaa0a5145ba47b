//! # Endpoint table
//!
//! Every call the client makes goes through one [`Endpoint`] variant, which
//! knows its HTTP method and path. Keeping the whole REST surface in one enum
//! means the mapping can be checked without a server.
//!
//! | Variant | Method | Path |
//! |---------|--------|------|
//! | `PublishedPosts` | GET | `/post` |
//! | `AllPosts` | GET | `/post/all` |
//! | `Post` | GET | `/post/:id` |
//! | `PostAdmin` | GET | `/post/:id/admin` |
//! | `CreatePost` | POST | `/post` |
//! | `UpdatePost` | PUT | `/post/:id` |
//! | `DeletePost` | DELETE | `/post/:id` |
//! | `CreatePostComment` | POST | `/post/:id/comment` |
//! | `UpdatePostComment` | PUT | `/post/:id/comment/:commentId` |
//! | `DeletePostComment` | DELETE | `/post/:id/comment/:commentId` |
//! | `Comments` | GET | `/comment` |
//! | `CommentsByAuthor` | GET | `/comment/author/:id` |
//! | `UpdateComment` | PUT | `/comment/:id` |
//! | `DeleteComment` | DELETE | `/comment/:id` |
//! | `Users` | GET | `/user` |
//! | `UpdateUser` | PATCH | `/user/:id` |
//! | `UpdateUserAsAdmin` | PATCH | `/user/:id/admin` |
//! | `DeleteUser` | DELETE | `/user/:id` |
//! | `Login` | POST | `/user/login` |
//! | `Signup` | POST | `/user/signup` |

use reqwest::Method;

use crate::models::Id;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Endpoint<'a> {
    PublishedPosts,
    AllPosts,
    Post(&'a Id),
    PostAdmin(&'a Id),
    CreatePost,
    UpdatePost(&'a Id),
    DeletePost(&'a Id),
    CreatePostComment(&'a Id),
    UpdatePostComment(&'a Id, &'a Id),
    DeletePostComment(&'a Id, &'a Id),
    Comments,
    CommentsByAuthor(&'a Id),
    UpdateComment(&'a Id),
    DeleteComment(&'a Id),
    Users,
    UpdateUser(&'a Id),
    UpdateUserAsAdmin(&'a Id),
    DeleteUser(&'a Id),
    Login,
    Signup,
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        use Endpoint::*;
        match self {
            PublishedPosts | AllPosts | Post(_) | PostAdmin(_) | Comments
            | CommentsByAuthor(_) | Users => Method::GET,
            CreatePost | CreatePostComment(_) | Login | Signup => Method::POST,
            UpdatePost(_) | UpdatePostComment(..) | UpdateComment(_) => Method::PUT,
            UpdateUser(_) | UpdateUserAsAdmin(_) => Method::PATCH,
            DeletePost(_) | DeletePostComment(..) | DeleteComment(_) | DeleteUser(_) => {
                Method::DELETE
            }
        }
    }

    pub fn path(&self) -> String {
        use Endpoint::*;
        match self {
            PublishedPosts | CreatePost => "/post".to_string(),
            AllPosts => "/post/all".to_string(),
            Post(id) | UpdatePost(id) | DeletePost(id) => format!("/post/{id}"),
            PostAdmin(id) => format!("/post/{id}/admin"),
            CreatePostComment(id) => format!("/post/{id}/comment"),
            UpdatePostComment(post, comment) | DeletePostComment(post, comment) => {
                format!("/post/{post}/comment/{comment}")
            }
            Comments => "/comment".to_string(),
            CommentsByAuthor(id) => format!("/comment/author/{id}"),
            UpdateComment(id) | DeleteComment(id) => format!("/comment/{id}"),
            Users => "/user".to_string(),
            UpdateUser(id) | DeleteUser(id) => format!("/user/{id}"),
            UpdateUserAsAdmin(id) => format!("/user/{id}/admin"),
            Login => "/user/login".to_string(),
            Signup => "/user/signup".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_routes() {
        let id = Id::new("12");
        assert_eq!(Endpoint::PublishedPosts.path(), "/post");
        assert_eq!(Endpoint::AllPosts.path(), "/post/all");
        assert_eq!(Endpoint::PostAdmin(&id).path(), "/post/12/admin");
        assert_eq!(Endpoint::CreatePost.method(), Method::POST);
        assert_eq!(Endpoint::UpdatePost(&id).method(), Method::PUT);
        assert_eq!(Endpoint::DeletePost(&id).method(), Method::DELETE);
        assert_eq!(Endpoint::DeletePost(&id).path(), "/post/12");
    }

    #[test]
    fn test_nested_comment_routes() {
        let post = Id::new("3");
        let comment = Id::new("44");
        let update = Endpoint::UpdatePostComment(&post, &comment);
        assert_eq!(update.path(), "/post/3/comment/44");
        assert_eq!(update.method(), Method::PUT);
        assert_eq!(Endpoint::CreatePostComment(&post).path(), "/post/3/comment");
    }

    #[test]
    fn test_user_routes() {
        let id = Id::new("u1");
        assert_eq!(Endpoint::UpdateUser(&id).method(), Method::PATCH);
        assert_eq!(Endpoint::UpdateUserAsAdmin(&id).path(), "/user/u1/admin");
        assert_eq!(Endpoint::CommentsByAuthor(&id).path(), "/comment/author/u1");
        assert_eq!(Endpoint::Login.path(), "/user/login");
        assert_eq!(Endpoint::Signup.method(), Method::POST);
    }
}
