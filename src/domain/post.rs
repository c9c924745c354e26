use crate::error::{FormError, Result};
use serde::Serialize;

/// The user every post is created under.
pub const POST_USER_ID: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Create,
    Edit { id: u64 },
}

/// The request body a completed draft turns into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PostRequest {
    Create {
        title: String,
        body: String,
        #[serde(rename = "userId")]
        user_id: u32,
    },
    Update {
        id: u64,
        title: String,
        body: String,
        #[serde(rename = "userId")]
        user_id: u32,
    },
}

/// State of the add/edit post form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostEditor {
    pub mode: EditorMode,
    pub title: String,
    pub body: String,
}

impl PostEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            EditorMode::Create => "Add New Post",
            EditorMode::Edit { .. } => "Edit Post",
        }
    }

    /// Loads an existing post into the editor.
    pub fn begin_edit(&mut self, id: u64, title: impl Into<String>, body: impl Into<String>) {
        self.mode = EditorMode::Edit { id };
        self.title = title.into();
        self.body = body.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    /// Builds the request for the current draft.
    ///
    /// Both title and body must be non-blank after trimming.
    pub fn submit(&self) -> Result<PostRequest> {
        let title = self.title.trim();
        let body = self.body.trim();
        if title.is_empty() || body.is_empty() {
            return Err(FormError::IncompleteDraft);
        }

        let (title, body) = (title.to_string(), body.to_string());
        Ok(match self.mode {
            EditorMode::Create => PostRequest::Create {
                title,
                body,
                user_id: POST_USER_ID,
            },
            EditorMode::Edit { id } => PostRequest::Update {
                id,
                title,
                body,
                user_id: POST_USER_ID,
            },
        })
    }

    /// Called once the request went through.
    pub fn complete(&mut self) {
        self.reset();
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
