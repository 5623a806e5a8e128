//! Client for the posts of a single course: list, create, approve, and
//! local content lookup.
//!
//! # Design
//! `CoursePostClient` is bound to one course title at construction and holds
//! the last fetched post list as a local snapshot, wholesale-replaced by
//! `load_posts`. Server-side mutations (`create_post`, `approve_post`) never
//! update the snapshot; in particular the local `approved` flag stays stale
//! until the next load.
//!
//! `create_post` is fire-and-forget and reports only to the diagnostic log
//! (unlike course creation it has no user-facing notification).
//! `get_post_content` is a pure lookup against the snapshot: a miss is
//! `None`, never an `ApiError`, so callers can tell "not loaded / unknown
//! id" apart from a network failure.

use crate::error::ApiError;
use crate::http::{HttpRequest, SessionToken, Transport};
use crate::types::{Confirmation, CreatePost, Post};

/// Stateful client for the posts of one course.
///
/// Same sequencing contract as `CourseCatalogClient`: each method performs
/// at most one blocking round-trip and requests never overlap.
#[derive(Debug)]
pub struct CoursePostClient<T: Transport> {
    base_url: String,
    course_title: String,
    session: SessionToken,
    transport: T,
    posts: Vec<Post>,
}

impl<T: Transport> CoursePostClient<T> {
    pub fn new(base_url: &str, course_title: &str, session: SessionToken, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            course_title: course_title.to_string(),
            session,
            transport,
            posts: Vec::new(),
        }
    }

    /// The title of the course this client is bound to.
    pub fn course_title(&self) -> &str {
        &self.course_title
    }

    /// The posts from the last successful `load_posts`, in server order.
    /// Empty until the first successful load.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Fetch all posts for the course and replace the local collection,
    /// preserving server order. On failure the previous collection is left
    /// untouched.
    pub fn load_posts(&mut self) -> Result<(), ApiError> {
        let request = HttpRequest::get(
            format!("{}/courses/{}/posts/", self.base_url, self.course_title),
            &self.session,
        );
        let posts = self.transport.execute(request)?.check_status()?.json()?;
        self.posts = posts;
        Ok(())
    }

    /// Create a post in the course. Fire-and-forget: the outcome goes to the
    /// diagnostic log only. The local collection is not updated; call
    /// `load_posts` to observe the new post.
    pub fn create_post(&self, input: &CreatePost) {
        match self.try_create_post(input) {
            Ok(confirmation) => {
                tracing::info!(
                    course = %self.course_title,
                    title = %input.title,
                    message = %confirmation.message,
                    "post created"
                );
            }
            Err(err) => {
                tracing::error!(course = %self.course_title, error = %err, "error creating post");
            }
        }
    }

    fn try_create_post(&self, input: &CreatePost) -> Result<Confirmation, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let request = HttpRequest::post(
            format!("{}/courses/{}/create/", self.base_url, self.course_title),
            &self.session,
            Some(body),
        );
        self.transport.execute(request)?.check_status()?.json()
    }

    /// Request approval of the post identified by `post_id`. Resolves with
    /// the server's confirmation. The local `approved` flag is not updated;
    /// call `load_posts` to observe the change.
    pub fn approve_post(&self, post_id: i64) -> Result<Confirmation, ApiError> {
        let request = HttpRequest::post(
            format!(
                "{}/courses/{}/posts/{post_id}/approve/",
                self.base_url, self.course_title
            ),
            &self.session,
            None,
        );
        self.transport.execute(request)?.check_status()?.json()
    }

    /// Look up the content of the loaded post with id `post_id`. Pure local
    /// scan of the snapshot — no network. Returns `None` when no loaded post
    /// has that id, or when the post carries no content.
    pub fn get_post_content(&self, post_id: i64) -> Option<&str> {
        self.posts
            .iter()
            .find(|post| post.id == post_id)?
            .content
            .as_deref()
    }
}
