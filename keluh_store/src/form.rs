use keluh_core::{api_models::Category, draft::CategoryDraft, ids::CategoryId};

use crate::{errors::CategoryStoreError, store::CategoryStore};


/// The add / edit category form and the draft it is holding.
///
/// A draft only ever lives inside an open form. It is discarded when the form
/// is cancelled or submitted successfully, and kept (with the form left open)
/// when the submission fails.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum CategoryForm {
    #[default]
    Closed,

    Creating {
        draft: CategoryDraft,
    },

    Editing {
        category_id: CategoryId,
        draft: CategoryDraft,
    },
}

impl CategoryForm {
    pub fn closed() -> Self {
        Self::Closed
    }

    /// Opens an empty creation form.
    pub fn open_for_creation() -> Self {
        Self::Creating {
            draft: CategoryDraft::default(),
        }
    }

    /// Opens an edit form prefilled with the category's current values.
    pub fn open_for_editing(category: &Category) -> Self {
        Self::Editing {
            category_id: category.id,
            draft: CategoryDraft::from_category(category),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn draft(&self) -> Option<&CategoryDraft> {
        match self {
            Self::Closed => None,
            Self::Creating { draft } | Self::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut CategoryDraft> {
        match self {
            Self::Closed => None,
            Self::Creating { draft } | Self::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    /// Submits the draft through the store.
    ///
    /// Submitting a closed form does nothing. The form closes when the change
    /// reached the server (even if the follow-up reload failed), and stays open
    /// with the attempted values otherwise.
    pub async fn submit(&mut self, store: &CategoryStore) -> Result<(), CategoryStoreError> {
        let submission_result = match self {
            Self::Closed => return Ok(()),
            Self::Creating { draft } => store.create(draft).await,
            Self::Editing { category_id, draft } => store.update(*category_id, draft).await,
        };

        match &submission_result {
            Ok(()) => self.cancel(),
            Err(error) if error.change_was_applied() => self.cancel(),
            Err(_) => {}
        }

        submission_result
    }
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn editing_form_is_prefilled_and_cancel_discards_it() {
        let category = Category::new(CategoryId::new(9), "Sampah", "Sampah menumpuk");

        let mut form = CategoryForm::open_for_editing(&category);
        assert!(form.is_open());
        assert_eq!(
            form.draft(),
            Some(&CategoryDraft::new("Sampah", "Sampah menumpuk"))
        );

        if let Some(draft) = form.draft_mut() {
            draft.name.push_str(" Liar");
        }
        assert_eq!(form.draft().map(|draft| draft.name.as_str()), Some("Sampah Liar"));

        form.cancel();
        assert!(!form.is_open());
        assert_eq!(form.draft(), None);
    }

    #[test]
    fn creation_form_starts_empty() {
        let form = CategoryForm::open_for_creation();

        assert_eq!(form.draft(), Some(&CategoryDraft::default()));
        assert_eq!(CategoryForm::closed(), CategoryForm::default());
    }
}
