use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub approved: bool,
}

#[derive(Deserialize)]
pub struct CreateCourse {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
pub struct CreatePost {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

struct CourseEntry {
    course: Course,
    posts: Vec<Post>,
}

/// Courses in insertion order so list responses are deterministic; post ids
/// are assigned sequentially from 1, like the real server's integer keys.
#[derive(Default)]
pub struct AppState {
    courses: Vec<CourseEntry>,
    next_post_id: i64,
}

pub type Db = Arc<RwLock<AppState>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(AppState::default()));
    Router::new()
        .route("/courses/", get(list_courses))
        .route("/courses/create/", post(create_course))
        .route("/courses/{title}/delete/", post(delete_course))
        .route("/courses/{title}/posts/", get(list_posts))
        .route("/courses/{title}/create/", post(create_post))
        .route("/courses/{title}/posts/{post_id}/approve/", post(approve_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_courses(State(db): State<Db>) -> Json<Vec<Course>> {
    let state = db.read().await;
    Json(state.courses.iter().map(|entry| entry.course.clone()).collect())
}

async fn create_course(
    State(db): State<Db>,
    Json(input): Json<CreateCourse>,
) -> Json<Confirmation> {
    let mut state = db.write().await;
    state.courses.push(CourseEntry {
        course: Course {
            title: input.title,
            description: input.description,
        },
        posts: Vec::new(),
    });
    Json(Confirmation {
        message: "Course created".to_string(),
    })
}

async fn delete_course(
    State(db): State<Db>,
    Path(title): Path<String>,
) -> Result<Json<Confirmation>, StatusCode> {
    let mut state = db.write().await;
    let before = state.courses.len();
    state.courses.retain(|entry| entry.course.title != title);
    if state.courses.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(Confirmation {
        message: "Course deleted".to_string(),
    }))
}

async fn list_posts(
    State(db): State<Db>,
    Path(title): Path<String>,
) -> Result<Json<Vec<Post>>, StatusCode> {
    let state = db.read().await;
    let entry = state
        .courses
        .iter()
        .find(|entry| entry.course.title == title)
        .ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(entry.posts.clone()))
}

async fn create_post(
    State(db): State<Db>,
    Path(title): Path<String>,
    Json(input): Json<CreatePost>,
) -> Result<Json<Confirmation>, StatusCode> {
    let mut state = db.write().await;
    let index = state
        .courses
        .iter()
        .position(|entry| entry.course.title == title)
        .ok_or(StatusCode::NOT_FOUND)?;
    // Ids stay gapless: only assigned once the course lookup has succeeded.
    state.next_post_id += 1;
    let id = state.next_post_id;
    state.courses[index].posts.push(Post {
        id,
        title: input.title,
        content: input.content,
        approved: false,
    });
    Ok(Json(Confirmation {
        message: "Post created".to_string(),
    }))
}

async fn approve_post(
    State(db): State<Db>,
    Path((title, post_id)): Path<(String, i64)>,
) -> Result<Json<Confirmation>, StatusCode> {
    let mut state = db.write().await;
    let entry = state
        .courses
        .iter_mut()
        .find(|entry| entry.course.title == title)
        .ok_or(StatusCode::NOT_FOUND)?;
    let post = entry
        .posts
        .iter_mut()
        .find(|post| post.id == post_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    post.approved = true;
    Ok(Json(Confirmation {
        message: "Post approved".to_string(),
    }))
}
