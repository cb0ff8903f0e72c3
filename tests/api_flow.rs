//! HTTP 层端到端测试：内存 SQLite + Moka 缓存
//!
//! 限流计数是进程级共享的，每个用例使用不同的客户端地址。

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};
use tokio::sync::broadcast;

use rust_coursedesk::cache::ObjectCache;
use rust_coursedesk::cache::object_cache::moka::MokaCacheWrapper;
use rust_coursedesk::models::AppStartTime;
use rust_coursedesk::models::realtime::entities::{ChangeAction, ChangeCollection, ChangeEvent};
use rust_coursedesk::services::websocket::{ConnectionManager, WsMessage};
use rust_coursedesk::storage::{SeaOrmStorage, Storage};

const PASSWORD: &str = "Lecture-Hall-42";

struct TestState {
    storage: web::Data<Arc<dyn Storage>>,
    cache: web::Data<Arc<dyn ObjectCache>>,
    connections: web::Data<Arc<ConnectionManager>>,
    started: web::Data<AppStartTime>,
}

async fn test_state() -> TestState {
    let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::open_in_memory().await.unwrap());
    let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_capacity(1_000, 300));
    TestState {
        storage: web::Data::new(storage),
        cache: web::Data::new(cache),
        connections: web::Data::new(Arc::new(ConnectionManager::new())),
        started: web::Data::new(AppStartTime {
            start_datetime: chrono::Utc::now(),
        }),
    }
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.storage.clone())
                .app_data($state.cache.clone())
                .app_data($state.connections.clone())
                .app_data($state.started.clone())
                .configure(rust_coursedesk::configure_app),
        )
        .await
    };
}

macro_rules! call_json {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

fn peer(last_octet: u8) -> SocketAddr {
    SocketAddr::from(([10, 0, 0, last_octet], 40_000))
}

fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

macro_rules! register_and_login {
    ($app:expr, $addr:expr, $name:expr, $email:expr, $role:expr) => {{
        let (status, body) = call_json!(
            $app,
            test::TestRequest::post()
                .uri("/api/v1/auth/register")
                .peer_addr($addr)
                .set_json(json!({
                    "name": $name,
                    "email": $email,
                    "password": PASSWORD,
                    "role": $role,
                }))
        );
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        let user_id = body["data"]["user"]["id"].as_i64().unwrap();

        let (status, body) = call_json!(
            $app,
            test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .peer_addr($addr)
                .set_json(json!({ "email": $email, "password": PASSWORD }))
        );
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        let token = body["data"]["access_token"].as_str().unwrap().to_string();
        (user_id, token)
    }};
}

#[actix_web::test]
async fn test_course_lifecycle_end_to_end() {
    let state = test_state().await;
    let app = init_app!(state);
    let addr = peer(1);

    let (_, teacher) = register_and_login!(app, addr, "Ada", "ada@school.test", "teacher");
    let (student_id, student) =
        register_and_login!(app, addr, "Linus", "linus@school.test", "student");

    // 教师创建课程
    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/courses")
            .insert_header(bearer(&teacher))
            .set_json(json!({
                "title": "Systems Programming",
                "description": "Ownership, lifetimes and async.",
                "category": "cs",
            }))
    );
    assert_eq!(status, StatusCode::CREATED);
    let course_id = body["data"]["id"].as_i64().unwrap();

    // 学生选课，重复选课返回 409 与已有记录
    let enroll_uri = format!("/api/v1/courses/{course_id}/enroll");
    let (status, first) = call_json!(
        app,
        test::TestRequest::post()
            .uri(&enroll_uri)
            .insert_header(bearer(&student))
    );
    assert_eq!(status, StatusCode::CREATED);
    let (status, second) = call_json!(
        app,
        test::TestRequest::post()
            .uri(&enroll_uri)
            .insert_header(bearer(&student))
    );
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(second["code"], 4000);
    assert_eq!(second["data"]["id"], first["data"]["id"]);

    // 排课后考勤为空集合
    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/lectures")
            .insert_header(bearer(&teacher))
            .set_json(json!({
                "course_id": course_id,
                "topic": "Borrow checker",
                "scheduled_at": "2030-03-01T09:00:00Z",
                "meeting_link": "https://meet.example.com/borrowck",
            }))
    );
    assert_eq!(status, StatusCode::CREATED, "{body}");
    let lecture_id = body["data"]["lecture"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["attendance"]["attendees"], json!([]));

    // 出勤与缺勤
    let mark_uri = format!("/api/v1/lectures/{lecture_id}/attendance/{student_id}");
    let (status, body) = call_json!(
        app,
        test::TestRequest::put()
            .uri(&mark_uri)
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["attendance"]["attendees"], json!([student_id]));

    let (_, sheet) = call_json!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/lectures/{lecture_id}/attendance"))
            .insert_header(bearer(&teacher))
    );
    assert_eq!(sheet["data"]["students"][0]["present"], true);

    let (status, body) = call_json!(
        app,
        test::TestRequest::delete()
            .uri(&mark_uri)
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["attendance"]["attendees"], json!([]));

    // 公告对已选课学生可见
    let announcements_uri = format!("/api/v1/courses/{course_id}/announcements");
    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri(&announcements_uri)
            .insert_header(bearer(&teacher))
            .set_json(json!({ "text": "  Bring a laptop.  " }))
    );
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = call_json!(
        app,
        test::TestRequest::get()
            .uri(&announcements_uri)
            .insert_header(bearer(&student))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"][0]["text"], "Bring a laptop.");

    let (_, landing) = call_json!(
        app,
        test::TestRequest::get()
            .uri("/api/v1/dashboard")
            .insert_header(bearer(&student))
    );
    assert_eq!(landing["data"]["dashboard"], "student");
}

#[actix_web::test]
async fn test_role_and_ownership_checks() {
    let state = test_state().await;
    let app = init_app!(state);
    let addr = peer(2);

    let (_, owner) = register_and_login!(app, addr, "Grace", "grace@school.test", "teacher");
    let (_, other) = register_and_login!(app, addr, "Barbara", "barbara@school.test", "teacher");

    let (_, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/courses")
            .insert_header(bearer(&owner))
            .set_json(json!({ "title": "Compilers", "description": "", "category": "cs" }))
    );
    let course_id = body["data"]["id"].as_i64().unwrap();

    // 非授课教师不能修改课程，也不能为其排课
    let (status, body) = call_json!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/courses/{course_id}"))
            .insert_header(bearer(&other))
            .set_json(json!({ "title": "Hijacked" }))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 3004);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/lectures")
            .insert_header(bearer(&other))
            .set_json(json!({
                "course_id": course_id,
                "topic": "Parsing",
                "scheduled_at": "2030-03-02T09:00",
                "meeting_link": "https://meet.example.com/parsing",
            }))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call_json!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/courses/{}", course_id + 100))
            .insert_header(bearer(&owner))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_student_cannot_use_teacher_routes() {
    let state = test_state().await;
    let app = init_app!(state);
    let addr = peer(3);

    let (_, student) = register_and_login!(app, addr, "Ken", "ken@school.test", "student");

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/courses")
            .insert_header(bearer(&student))
            .set_json(json!({ "title": "Mine", "description": "", "category": "cs" }))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], 1002);

    let (status, _) = call_json!(
        app,
        test::TestRequest::get()
            .uri("/api/v1/dashboard/teacher/lectures")
            .insert_header(bearer(&student))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_mark_present_requires_enrollment() {
    let state = test_state().await;
    let app = init_app!(state);
    let addr = peer(4);

    let (_, teacher) = register_and_login!(app, addr, "Edsger", "edsger@school.test", "teacher");
    let (student_id, _) = register_and_login!(app, addr, "Tony", "tony@school.test", "student");

    let (_, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/courses")
            .insert_header(bearer(&teacher))
            .set_json(json!({ "title": "Algorithms", "description": "", "category": "cs" }))
    );
    let course_id = body["data"]["id"].as_i64().unwrap();

    let (_, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/lectures")
            .insert_header(bearer(&teacher))
            .set_json(json!({
                "course_id": course_id,
                "topic": "Shortest paths",
                "scheduled_at": "2030-04-01T10:00:00+08:00",
                "meeting_link": "https://meet.example.com/paths",
            }))
    );
    let lecture_id = body["data"]["lecture"]["id"].as_i64().unwrap();

    let (status, body) = call_json!(
        app,
        test::TestRequest::put()
            .uri(&format!(
                "/api/v1/lectures/{lecture_id}/attendance/{student_id}"
            ))
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6000);
}

#[actix_web::test]
async fn test_login_rejections() {
    let state = test_state().await;
    let app = init_app!(state);
    let addr = peer(5);

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .peer_addr(addr)
            .set_json(json!({ "email": "nobody@school.test", "password": PASSWORD }))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "No user found with this email.");

    let _ = register_and_login!(app, addr, "Alan", "alan@school.test", "student");
    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .peer_addr(addr)
            .set_json(json!({ "email": "ALAN@school.test", "password": "wrong-password" }))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Wrong password. Try again.");
}

#[actix_web::test]
async fn test_public_and_protected_endpoints() {
    let state = test_state().await;
    let app = init_app!(state);

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/api/v1/system/health"));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["online_users"], 0);

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/api/v1/courses"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], 1001);

    let (status, _) = call_json!(
        app,
        test::TestRequest::get().uri("/api/v1/ws?token=not-a-token")
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_student_dashboard_views() {
    let state = test_state().await;
    let app = init_app!(state);
    let addr = peer(6);

    let (_, teacher) = register_and_login!(app, addr, "Donald", "donald@school.test", "teacher");
    let (student_id, student) =
        register_and_login!(app, addr, "Frances", "frances@school.test", "student");

    let mut course_ids = Vec::new();
    for title in ["Typesetting", "Literate Programming", "Concrete Mathematics"] {
        let (_, body) = call_json!(
            app,
            test::TestRequest::post()
                .uri("/api/v1/courses")
                .insert_header(bearer(&teacher))
                .set_json(json!({ "title": title, "description": "", "category": "cs" }))
        );
        course_ids.push(body["data"]["id"].as_i64().unwrap());
    }
    let (with_lectures, quiet, not_enrolled) = (course_ids[0], course_ids[1], course_ids[2]);

    for course_id in [with_lectures, quiet] {
        let (status, _) = call_json!(
            app,
            test::TestRequest::post()
                .uri(&format!("/api/v1/courses/{course_id}/enroll"))
                .insert_header(bearer(&student))
        );
        assert_eq!(status, StatusCode::CREATED);
    }

    let mut lecture_ids = Vec::new();
    for (topic, at) in [("Boxes", "2030-05-01T09:00"), ("Glue", "2030-05-08T09:00")] {
        let (_, body) = call_json!(
            app,
            test::TestRequest::post()
                .uri("/api/v1/lectures")
                .insert_header(bearer(&teacher))
                .set_json(json!({
                    "course_id": with_lectures,
                    "topic": topic,
                    "scheduled_at": at,
                    "meeting_link": "https://meet.example.com/tex",
                }))
        );
        lecture_ids.push(body["data"]["lecture"]["id"].as_i64().unwrap());
    }

    let (status, _) = call_json!(
        app,
        test::TestRequest::put()
            .uri(&format!(
                "/api/v1/lectures/{}/attendance/{student_id}",
                lecture_ids[0]
            ))
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/courses/{with_lectures}/announcements"))
            .insert_header(bearer(&teacher))
            .set_json(json!({ "text": "Read chapter 1." }))
    );
    assert_eq!(status, StatusCode::CREATED);

    // 我的课程：课时带本人出勤标记，没有课时与公告的课程返回空列表
    let (status, body) = call_json!(
        app,
        test::TestRequest::get()
            .uri("/api/v1/dashboard/student/courses")
            .insert_header(bearer(&student))
    );
    assert_eq!(status, StatusCode::OK);
    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    let busy = items
        .iter()
        .find(|view| view["course"]["id"] == with_lectures)
        .unwrap();
    let lectures = busy["lectures"].as_array().unwrap();
    assert_eq!(lectures.len(), 2);
    assert_eq!(lectures[0]["id"], lecture_ids[0]);
    assert_eq!(lectures[0]["attended"], true);
    assert_eq!(lectures[1]["attended"], false);
    assert_eq!(busy["announcements"][0]["text"], "Read chapter 1.");
    let empty = items.iter().find(|view| view["course"]["id"] == quiet).unwrap();
    assert_eq!(empty["lectures"], json!([]));
    assert_eq!(empty["announcements"], json!([]));

    // 课程目录标记是否已选
    let (status, body) = call_json!(
        app,
        test::TestRequest::get()
            .uri("/api/v1/dashboard/student/catalog?page=1&size=10")
            .insert_header(bearer(&student))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["pagination"]["total"], 3);
    for entry in body["data"]["items"].as_array().unwrap() {
        let expected = entry["id"] != not_enrolled;
        assert_eq!(entry["enrolled"], expected, "{entry}");
    }

    // 超大页码不会溢出
    let (status, body) = call_json!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/v1/courses?page={}&size=100", i64::MAX))
            .insert_header(bearer(&student))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"], json!([]));
}

#[actix_web::test]
async fn test_refresh_and_logout_cookies() {
    let state = test_state().await;
    let app = init_app!(state);
    let addr = peer(7);

    let _ = register_and_login!(app, addr, "Margaret", "margaret@school.test", "teacher");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .peer_addr(addr)
            .set_json(json!({
                "email": "margaret@school.test",
                "password": PASSWORD,
                "remember_me": true,
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let refresh_cookie = resp
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "refresh_token")
        .map(|cookie| cookie.into_owned())
        .unwrap();
    assert!(refresh_cookie.http_only().unwrap_or(false));

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/auth/refresh")
            .peer_addr(addr)
            .cookie(refresh_cookie.clone())
    );
    assert_eq!(status, StatusCode::OK);
    let access = body["data"]["access_token"].as_str().unwrap().to_string();
    let (status, me) = call_json!(
        app,
        test::TestRequest::get()
            .uri("/api/v1/auth/me")
            .insert_header(bearer(&access))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["data"]["user"]["email"], "margaret@school.test");

    // 没有 cookie 不能刷新
    let (status, _) = call_json!(
        app,
        test::TestRequest::post().uri("/api/v1/auth/refresh").peer_addr(addr)
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/auth/logout")
            .cookie(refresh_cookie)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cleared = resp
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "refresh_token")
        .map(|cookie| cookie.into_owned())
        .unwrap();
    assert_eq!(cleared.value(), "");
    assert_eq!(
        cleared.max_age(),
        Some(actix_web::cookie::time::Duration::ZERO)
    );
}

#[actix_web::test]
async fn test_unenroll_and_delete_lecture() {
    let state = test_state().await;
    let app = init_app!(state);
    let addr = peer(8);

    let (_, teacher) = register_and_login!(app, addr, "Butler", "butler@school.test", "teacher");
    let (_, student) = register_and_login!(app, addr, "Radia", "radia@school.test", "student");

    let (_, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/courses")
            .insert_header(bearer(&teacher))
            .set_json(json!({ "title": "Networks", "description": "", "category": "cs" }))
    );
    let course_id = body["data"]["id"].as_i64().unwrap();
    let enroll_uri = format!("/api/v1/courses/{course_id}/enroll");

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri(&enroll_uri)
            .insert_header(bearer(&student))
    );
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = call_json!(
        app,
        test::TestRequest::delete()
            .uri(&enroll_uri)
            .insert_header(bearer(&student))
    );
    assert_eq!(status, StatusCode::OK);
    let (status, body) = call_json!(
        app,
        test::TestRequest::delete()
            .uri(&enroll_uri)
            .insert_header(bearer(&student))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);

    let (_, body) = call_json!(
        app,
        test::TestRequest::get()
            .uri("/api/v1/enrollments/me")
            .insert_header(bearer(&student))
    );
    assert_eq!(body["data"]["items"], json!([]));

    // 删除课时后考勤表一并消失
    let (_, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/lectures")
            .insert_header(bearer(&teacher))
            .set_json(json!({
                "course_id": course_id,
                "topic": "Spanning trees",
                "scheduled_at": "2030-06-01T09:00:00Z",
                "meeting_link": "https://meet.example.com/stp",
            }))
    );
    let lecture_id = body["data"]["lecture"]["id"].as_i64().unwrap();
    let lecture_uri = format!("/api/v1/lectures/{lecture_id}");

    let (status, _) = call_json!(
        app,
        test::TestRequest::delete()
            .uri(&lecture_uri)
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::OK);
    let (status, body) = call_json!(
        app,
        test::TestRequest::get()
            .uri(&format!("{lecture_uri}/attendance"))
            .insert_header(bearer(&teacher))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 5000);
    let (_, body) = call_json!(
        app,
        test::TestRequest::get()
            .uri("/api/v1/lectures")
            .insert_header(bearer(&teacher))
    );
    assert_eq!(body["data"]["items"], json!([]));
}

fn next_change(rx: &mut broadcast::Receiver<WsMessage>) -> Option<ChangeEvent> {
    match rx.try_recv() {
        Ok(WsMessage::Changed { payload }) => Some(payload),
        _ => None,
    }
}

#[actix_web::test]
async fn test_realtime_events_reach_expected_users() {
    let state = test_state().await;
    let app = init_app!(state);
    let addr = peer(9);

    let (teacher_id, teacher) =
        register_and_login!(app, addr, "Leslie", "leslie@school.test", "teacher");
    let (student_id, student) =
        register_and_login!(app, addr, "Jean", "jean@school.test", "student");

    let (_, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/v1/courses")
            .insert_header(bearer(&teacher))
            .set_json(json!({ "title": "Distributed Systems", "description": "", "category": "cs" }))
    );
    let course_id = body["data"]["id"].as_i64().unwrap();

    let mut teacher_rx = state.connections.register(teacher_id);
    let mut student_rx = state.connections.register(student_id);
    let mut bystander_rx = state.connections.register(teacher_id + student_id + 100);

    // 选课事件只发给该学生与授课教师
    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/v1/courses/{course_id}/enroll"))
            .insert_header(bearer(&student))
    );
    assert_eq!(status, StatusCode::CREATED);

    for rx in [&mut teacher_rx, &mut student_rx] {
        let event = next_change(rx).unwrap();
        assert_eq!(event.collection, ChangeCollection::Enrollments);
        assert_eq!(event.action, ChangeAction::Created);
        assert_eq!(event.course_id, Some(course_id));
        assert_eq!(event.user_id, Some(student_id));
    }
    assert!(next_change(&mut bystander_rx).is_none());

    // 课程变更广播给所有在线用户
    let (status, _) = call_json!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/courses/{course_id}"))
            .insert_header(bearer(&teacher))
            .set_json(json!({ "title": "Distributed Systems II" }))
    );
    assert_eq!(status, StatusCode::OK);

    for rx in [&mut teacher_rx, &mut student_rx, &mut bystander_rx] {
        let event = next_change(rx).unwrap();
        assert_eq!(event.collection, ChangeCollection::Courses);
        assert_eq!(event.action, ChangeAction::Updated);
    }
}
