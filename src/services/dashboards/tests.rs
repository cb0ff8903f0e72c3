use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use sea_orm::ConnectionTrait;
use serde_json::Value;

use crate::models::{
    auth::requests::NewUser, courses::requests::CreateCourseRequest,
    lectures::requests::NewLecture, users::entities::UserRole,
};
use crate::storage::{SeaOrmStorage, Storage};
use crate::utils::jwt::JwtUtils;

#[actix_web::test]
async fn test_teacher_attendance_falls_back_to_unknown_course() {
    let storage = SeaOrmStorage::open_in_memory().await.unwrap();
    let teacher = storage
        .create_user(NewUser {
            name: "Niklaus".to_string(),
            email: "niklaus@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Teacher,
        })
        .await
        .unwrap();
    let course = storage
        .create_course(
            teacher.id,
            CreateCourseRequest {
                title: "Pascal".to_string(),
                description: String::new(),
                category: "cs".to_string(),
            },
        )
        .await
        .unwrap();
    storage
        .schedule_lecture(NewLecture {
            course_id: course.id,
            teacher_id: teacher.id,
            topic: "Records".to_string(),
            scheduled_at: chrono::Utc::now(),
            meeting_link: "https://meet.example.com/records".to_string(),
        })
        .await
        .unwrap();

    // 绕过级联删除，模拟课时所属课程已不存在
    storage
        .db
        .execute_unprepared("PRAGMA foreign_keys = OFF")
        .await
        .unwrap();
    storage
        .db
        .execute_unprepared(&format!("DELETE FROM courses WHERE id = {}", course.id))
        .await
        .unwrap();

    let storage: Arc<dyn Storage> = Arc::new(storage);
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(storage))
            .configure(crate::configure_app),
    )
    .await;

    let token = JwtUtils::generate_access_token(teacher.id, UserRole::Teacher).unwrap();
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/dashboard/teacher/attendance")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let sheets = body["data"]["items"].as_array().unwrap();
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0]["course_title"], "Unknown Course");
    assert_eq!(sheets[0]["students"].as_array().unwrap().len(), 0);
}
