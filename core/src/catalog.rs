//! Client for the course catalog: create, delete, and list courses.
//!
//! # Design
//! `CourseCatalogClient` is the Rust rendition of the course list page
//! controller. It holds the last fetched course list as a local, read-only
//! snapshot that is wholesale-replaced by `load_courses`; mutations
//! (`create_course`, `delete_course`) never touch the snapshot, so callers
//! must re-fetch to observe their own writes.
//!
//! Two error policies coexist deliberately. `create_course` is
//! fire-and-forget: its outcome is reported through the notifier and the
//! diagnostic log only, and the method always returns normally.
//! `delete_course` and `load_courses` return `Result` and leave handling to
//! the caller. Callers depend on this split; do not unify it.

use crate::error::ApiError;
use crate::http::{HttpRequest, SessionToken, Transport};
use crate::notify::Notifier;
use crate::types::{Confirmation, Course, CreateCourse};

/// Stateful client for the `/courses/` API surface.
///
/// Each method performs at most one blocking round-trip through the injected
/// transport and returns only once it completes; no two requests from the
/// same instance ever overlap.
#[derive(Debug)]
pub struct CourseCatalogClient<T: Transport, N: Notifier> {
    base_url: String,
    session: SessionToken,
    transport: T,
    notifier: N,
    courses: Vec<Course>,
}

impl<T: Transport, N: Notifier> CourseCatalogClient<T, N> {
    pub fn new(base_url: &str, session: SessionToken, transport: T, notifier: N) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
            transport,
            notifier,
            courses: Vec::new(),
        }
    }

    /// The courses from the last successful `load_courses`, in server order.
    /// Empty until the first successful load.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Create a course on the server. Fire-and-forget: the outcome reaches
    /// the user via the notifier and the log, never the caller. The local
    /// collection is not updated; call `load_courses` to observe the new
    /// course.
    pub fn create_course(&self, input: &CreateCourse) {
        match self.try_create_course(input) {
            Ok(confirmation) => {
                tracing::info!(title = %input.title, message = %confirmation.message, "course created");
                self.notifier.notify("Course created successfully.");
            }
            Err(err) => {
                tracing::error!(title = %input.title, error = %err, "error creating course");
                self.notifier.notify("Error creating course.");
            }
        }
    }

    fn try_create_course(&self, input: &CreateCourse) -> Result<Confirmation, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        let request = HttpRequest::post(
            format!("{}/courses/create/", self.base_url),
            &self.session,
            Some(body),
        );
        self.transport.execute(request)?.check_status()?.json()
    }

    /// Delete the course identified by `course_title`. Resolves with the
    /// server's confirmation; the local collection is not updated.
    pub fn delete_course(&self, course_title: &str) -> Result<Confirmation, ApiError> {
        let request = HttpRequest::post(
            format!("{}/courses/{course_title}/delete/", self.base_url),
            &self.session,
            None,
        );
        self.transport.execute(request)?.check_status()?.json()
    }

    /// Fetch the full course list and replace the local collection with it,
    /// preserving server order. On failure the previous collection is left
    /// untouched.
    pub fn load_courses(&mut self) -> Result<(), ApiError> {
        let request = HttpRequest::get(format!("{}/courses/", self.base_url), &self.session);
        let courses = self.transport.execute(request)?.check_status()?.json()?;
        self.courses = courses;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::http::{HttpMethod, HttpResponse};

    /// Scripted transport: hands out queued responses and records every
    /// request it executes.
    struct FakeTransport {
        responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
        requests: RefCell<Vec<HttpRequest>>,
    }

    impl FakeTransport {
        fn with_responses(responses: Vec<Result<HttpResponse, ApiError>>) -> Self {
            Self {
                responses: RefCell::new(responses.into()),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn take_requests(&self) -> Vec<HttpRequest> {
            self.requests.take()
        }
    }

    impl Transport for FakeTransport {
        fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("no scripted response left")
        }
    }

    /// Notifier that collects messages for assertion.
    #[derive(Default)]
    struct CollectingNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl Notifier for CollectingNotifier {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn ok(body: &str) -> Result<HttpResponse, ApiError> {
        Ok(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: body.to_string(),
        })
    }

    fn server_error() -> Result<HttpResponse, ApiError> {
        Ok(HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        })
    }

    const BASE_URL: &str = "http://localhost:3000";

    fn client<'a>(
        transport: &'a FakeTransport,
        notifier: &'a CollectingNotifier,
    ) -> CourseCatalogClient<&'a FakeTransport, &'a CollectingNotifier> {
        CourseCatalogClient::new(BASE_URL, SessionToken::new("test-token"), transport, notifier)
    }

    #[test]
    fn starts_with_empty_collection() {
        let transport = FakeTransport::with_responses(Vec::new());
        let notifier = CollectingNotifier::default();
        assert!(client(&transport, &notifier).courses().is_empty());
    }

    #[test]
    fn load_courses_builds_credentialed_get() {
        let transport = FakeTransport::with_responses(vec![ok("[]")]);
        let notifier = CollectingNotifier::default();
        client(&transport, &notifier).load_courses().unwrap();

        let requests = transport.take_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[0].path, "http://localhost:3000/courses/");
        assert!(requests[0]
            .headers
            .contains(&("cookie".to_string(), "access_token=test-token".to_string())));
    }

    #[test]
    fn load_courses_replaces_collection_in_server_order() {
        let transport = FakeTransport::with_responses(vec![ok(
            r#"[{"title":"zoology","description":""},{"title":"algebra-101","description":"Intro"}]"#,
        )]);
        let notifier = CollectingNotifier::default();
        let mut client = client(&transport, &notifier);

        client.load_courses().unwrap();
        let titles: Vec<&str> = client.courses().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["zoology", "algebra-101"]);
    }

    #[test]
    fn load_courses_with_empty_server_list_yields_empty_collection() {
        let transport = FakeTransport::with_responses(vec![ok("[]")]);
        let notifier = CollectingNotifier::default();
        let mut client = client(&transport, &notifier);

        client.load_courses().unwrap();
        assert!(client.courses().is_empty());
    }

    #[test]
    fn failed_load_leaves_previous_collection_untouched() {
        let transport = FakeTransport::with_responses(vec![
            ok(r#"[{"title":"algebra-101","description":"Intro"}]"#),
            server_error(),
        ]);
        let notifier = CollectingNotifier::default();
        let mut client = client(&transport, &notifier);

        client.load_courses().unwrap();
        let err = client.load_courses().unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
        assert_eq!(client.courses().len(), 1);
        assert_eq!(client.courses()[0].title, "algebra-101");
    }

    #[test]
    fn load_courses_bad_json_is_a_deserialization_error() {
        let transport = FakeTransport::with_responses(vec![ok("not json")]);
        let notifier = CollectingNotifier::default();
        let err = client(&transport, &notifier).load_courses().unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn create_course_posts_json_and_notifies_success() {
        let transport =
            FakeTransport::with_responses(vec![ok(r#"{"message":"Course created"}"#)]);
        let notifier = CollectingNotifier::default();
        let client = client(&transport, &notifier);

        client.create_course(&CreateCourse {
            title: "algebra-101".to_string(),
            description: "Intro".to_string(),
        });

        let requests = transport.take_requests();
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].path, "http://localhost:3000/courses/create/");
        assert!(requests[0]
            .headers
            .contains(&("content-type".to_string(), "application/json".to_string())));
        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "algebra-101");
        assert_eq!(body["description"], "Intro");

        assert_eq!(
            notifier.messages.borrow().as_slice(),
            ["Course created successfully."]
        );
        assert!(client.courses().is_empty(), "create must not touch the collection");
    }

    #[test]
    fn create_course_failure_notifies_error_and_returns_normally() {
        let transport = FakeTransport::with_responses(vec![server_error()]);
        let notifier = CollectingNotifier::default();
        let client = client(&transport, &notifier);

        client.create_course(&CreateCourse {
            title: "algebra-101".to_string(),
            description: String::new(),
        });

        assert_eq!(notifier.messages.borrow().as_slice(), ["Error creating course."]);
        assert!(client.courses().is_empty());
    }

    #[test]
    fn create_course_transport_error_is_swallowed() {
        let transport = FakeTransport::with_responses(vec![Err(ApiError::TransportError(
            "connection refused".to_string(),
        ))]);
        let notifier = CollectingNotifier::default();
        let client = client(&transport, &notifier);

        client.create_course(&CreateCourse {
            title: "algebra-101".to_string(),
            description: String::new(),
        });

        assert_eq!(notifier.messages.borrow().as_slice(), ["Error creating course."]);
    }

    #[test]
    fn delete_course_resolves_with_confirmation() {
        let transport =
            FakeTransport::with_responses(vec![ok(r#"{"message":"Course deleted"}"#)]);
        let notifier = CollectingNotifier::default();
        let client = client(&transport, &notifier);

        let confirmation = client.delete_course("algebra-101").unwrap();
        assert_eq!(confirmation.message, "Course deleted");

        let requests = transport.take_requests();
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(
            requests[0].path,
            "http://localhost:3000/courses/algebra-101/delete/"
        );
        assert!(requests[0].body.is_none());
    }

    #[test]
    fn delete_course_rejects_with_error_detail() {
        let transport = FakeTransport::with_responses(vec![Ok(HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: "course not found".to_string(),
        })]);
        let notifier = CollectingNotifier::default();
        let client = client(&transport, &notifier);

        let err = client.delete_course("missing").unwrap_err();
        match err {
            ApiError::HttpError { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "course not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(notifier.messages.borrow().is_empty(), "delete must not notify");
    }

    #[test]
    fn trailing_slash_in_base_url_is_stripped() {
        let transport = FakeTransport::with_responses(vec![ok("[]")]);
        let notifier = CollectingNotifier::default();
        let mut client = CourseCatalogClient::new(
            "http://localhost:3000/",
            SessionToken::new("t"),
            &transport,
            &notifier,
        );
        client.load_courses().unwrap();
        assert_eq!(transport.take_requests()[0].path, "http://localhost:3000/courses/");
    }
}
