//! Form input and validation
//!
//! Values are read from the UI fields once per action and checked for
//! non-emptiness before any request is built.

use crate::models::PostDraft;

/// Validation failure; `Display` is the message shown to the user
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Error: Title and body are required!")]
    CreateFieldsMissing,

    #[error("Error: ID, title, and body are required!")]
    UpdateFieldsMissing,

    #[error("Error: Post ID is required!")]
    DeleteIdMissing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateForm {
    pub title: String,
    pub body: String,
}

impl CreateForm {
    pub fn validate(&self) -> Result<PostDraft, ValidationError> {
        if self.title.is_empty() || self.body.is_empty() {
            return Err(ValidationError::CreateFieldsMissing);
        }
        Ok(PostDraft {
            title: self.title.clone(),
            body: self.body.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateForm {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl UpdateForm {
    pub fn validate(&self) -> Result<(String, PostDraft), ValidationError> {
        if self.id.is_empty() || self.title.is_empty() || self.body.is_empty() {
            return Err(ValidationError::UpdateFieldsMissing);
        }
        Ok((
            self.id.clone(),
            PostDraft {
                title: self.title.clone(),
                body: self.body.clone(),
            },
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteForm {
    pub id: String,
}

impl DeleteForm {
    pub fn validate(&self) -> Result<String, ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::DeleteIdMissing);
        }
        Ok(self.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_both_fields() {
        let form = CreateForm {
            title: String::new(),
            body: "body".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::CreateFieldsMissing));

        let form = CreateForm {
            title: "title".into(),
            body: String::new(),
        };
        assert_eq!(form.validate(), Err(ValidationError::CreateFieldsMissing));
    }

    #[test]
    fn test_whitespace_counts_as_content() {
        let form = CreateForm {
            title: " ".into(),
            body: " ".into(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_update_requires_id() {
        let form = UpdateForm {
            id: String::new(),
            title: "t".into(),
            body: "b".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::UpdateFieldsMissing));

        let form = UpdateForm {
            id: "3".into(),
            ..form
        };
        let (id, draft) = form.validate().unwrap();
        assert_eq!(id, "3");
        assert_eq!(draft.title, "t");
    }

    #[test]
    fn test_delete_requires_id() {
        assert_eq!(
            DeleteForm::default().validate(),
            Err(ValidationError::DeleteIdMissing)
        );
        assert_eq!(DeleteForm { id: "5".into() }.validate().unwrap(), "5");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::CreateFieldsMissing.to_string(),
            "Error: Title and body are required!"
        );
        assert_eq!(
            ValidationError::UpdateFieldsMissing.to_string(),
            "Error: ID, title, and body are required!"
        );
        assert_eq!(
            ValidationError::DeleteIdMissing.to_string(),
            "Error: Post ID is required!"
        );
    }
}
