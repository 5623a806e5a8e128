//! Client-side core for the course/post management app.
//!
//! # Overview
//! Two stateful page clients over the course REST API: `CourseCatalogClient`
//! (create, delete, and list courses) and `CoursePostClient` (list, create,
//! and approve the posts of one course, plus local content lookup). Each
//! holds the last fetched list as a read-only snapshot that is replaced
//! wholesale on every successful load; the UI layer renders from these
//! snapshots and re-fetches to observe its own mutations.
//!
//! # Design
//! - Requests and responses are plain data (`HttpRequest` / `HttpResponse`);
//!   a `Transport` supplied by the environment performs the blocking I/O, so
//!   the clients stay deterministic and testable without a network.
//! - Credentials are explicit: a `SessionToken` handed to each client at
//!   construction is attached to every request as a cookie.
//! - Calls are strictly sequential per client instance — one round-trip at a
//!   time, no hidden concurrency.
//! - Create operations are fire-and-forget (notifier/log only); delete,
//!   approve, and the loads return `Result` with the error detail.

pub mod catalog;
pub mod error;
pub mod http;
pub mod notify;
pub mod posts;
pub mod types;

pub use catalog::CourseCatalogClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, SessionToken, Transport};
pub use notify::Notifier;
pub use posts::CoursePostClient;
pub use types::{Confirmation, Course, CreateCourse, CreatePost, Post};
