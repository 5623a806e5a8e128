//! Domain DTOs for the course API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently of
//! the mock-server crate; the integration tests catch schema drift. Course
//! and post records carry a flattened `extra` map so server-defined metadata
//! fields survive the shallow copy into the local collections even when this
//! crate does not model them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A course as returned by the list endpoint. `title` is the resource key
/// used in URL paths; everything else is server-owned metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A post within a course. `content` is nullable on the server; `approved`
/// is mutated server-side and only changes locally on the next list fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub approved: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request payload for creating a new course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourse {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Request payload for creating a new post in a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

/// The server's `{"message": …}` confirmation body for mutations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Confirmation {
    pub message: String,
}
