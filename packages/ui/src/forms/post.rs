use api::{Post, PostPayload};

use super::validate::{self, ValidationError};
use super::Submit;

/// Draft of a post being created or edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostForm {
    pub title: String,
    pub text: String,
    pub image_url: String,
    pub is_published: bool,
}

impl PostForm {
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            text: post.text.clone(),
            image_url: post.image_url.clone().unwrap_or_default(),
            is_published: post.is_published,
        }
    }

    pub fn payload(&self) -> Result<PostPayload, ValidationError> {
        validate::post_title(&self.title)?;
        validate::post_text(&self.text)?;
        validate::image_url(&self.image_url)?;
        Ok(PostPayload {
            title: self.title.clone(),
            text: self.text.clone(),
            image_url: self.image_url.clone(),
            is_published: self.is_published,
        })
    }

    /// Edit submission: an untouched draft sends nothing.
    pub fn edit_of(&self, original: &Post) -> Result<Submit<PostPayload>, ValidationError> {
        if *self == Self::from_post(original) {
            return Ok(Submit::Unchanged);
        }
        self.payload().map(Submit::Send)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{AuthorRef, Id};

    fn post() -> Post {
        let at = "2024-04-01T09:00:00Z".parse().unwrap();
        Post {
            id: Id::new("3"),
            title: "Lisbon".into(),
            text: "Trams".into(),
            image_url: None,
            author: AuthorRef {
                id: None,
                name: "admin".into(),
            },
            is_published: false,
            created_at: at,
            updated_at: at,
            comments: Vec::new(),
        }
    }

    #[test]
    fn test_untouched_edit_is_unchanged() {
        let original = post();
        let form = PostForm::from_post(&original);
        assert_eq!(form.edit_of(&original), Ok(Submit::Unchanged));
    }

    #[test]
    fn test_changed_edit_sends_all_fields() {
        let original = post();
        let mut form = PostForm::from_post(&original);
        form.is_published = true;
        match form.edit_of(&original) {
            Ok(Submit::Send(payload)) => {
                assert!(payload.is_published);
                assert_eq!(payload.title, "Lisbon");
                assert_eq!(payload.image_url, "");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_validation_order() {
        let mut form = PostForm {
            image_url: "u".repeat(201),
            ..PostForm::default()
        };
        assert_eq!(form.payload(), Err(ValidationError::Title));
        form.title = "Kyoto".into();
        assert_eq!(form.payload(), Err(ValidationError::Text));
        form.text = "Temples".into();
        assert_eq!(form.payload(), Err(ValidationError::ImageUrl));
        form.image_url.clear();
        assert!(form.payload().is_ok());
    }
}
