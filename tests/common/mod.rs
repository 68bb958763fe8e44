#![allow(dead_code)]

use enroll_assist::{
    AppState, CourseCreationRequest, CourseDraft, CourseServer, GraduateLevel,
    InMemoryCourseRepository,
};
use std::net::SocketAddr;
use std::sync::Arc;

pub struct TestApp {
    pub base_url: String,
    pub state: AppState,
    pub repository: Arc<InMemoryCourseRepository>,
}

/// Starts a server on an ephemeral port; it lives until the test runtime ends.
pub async fn spawn_app() -> TestApp {
    let repository = Arc::new(InMemoryCourseRepository::new());
    let state = AppState::new(repository.clone());

    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let server = CourseServer::bind(state.clone(), addr).await.expect("bind listener");
    let local = server.local_addr().expect("local addr");
    tokio::spawn(async move {
        server
            .run_until(std::future::pending())
            .await
            .expect("serve app")
    });

    TestApp {
        base_url: format!("http://{}", local),
        state,
        repository,
    }
}

pub fn undergraduate(number: &str, title: &str, credits: i64) -> CourseCreationRequest {
    CourseCreationRequest::new(CourseDraft::new(
        number,
        title,
        credits,
        GraduateLevel::Undergraduate,
    ))
}
