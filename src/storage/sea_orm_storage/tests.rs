use super::SeaOrmStorage;
use crate::models::{
    auth::requests::NewUser,
    courses::requests::{CourseListQuery, CreateCourseRequest, UpdateCourseRequest},
    enrollments::entities::EnrollOutcome,
    lectures::requests::NewLecture,
    users::entities::{User, UserRole},
};
use crate::storage::Storage;

async fn storage() -> SeaOrmStorage {
    SeaOrmStorage::open_in_memory()
        .await
        .expect("in-memory storage should open")
}

async fn create_user(storage: &SeaOrmStorage, name: &str, role: UserRole) -> User {
    storage
        .create_user(NewUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            password_hash: "hash".to_string(),
            role,
        })
        .await
        .unwrap()
}

async fn create_course(storage: &SeaOrmStorage, teacher_id: i64, title: &str) -> i64 {
    storage
        .create_course(
            teacher_id,
            CreateCourseRequest {
                title: title.to_string(),
                description: format!("{title} description"),
                category: "Programming".to_string(),
            },
        )
        .await
        .unwrap()
        .id
}

fn new_lecture(course_id: i64, teacher_id: i64, topic: &str) -> NewLecture {
    NewLecture {
        course_id,
        teacher_id,
        topic: topic.to_string(),
        scheduled_at: crate::utils::time::parse_schedule_time("2026-03-01T10:00").unwrap(),
        meeting_link: "https://meet.example.com/abc".to_string(),
    }
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let storage = storage().await;
    create_user(&storage, "Alice", UserRole::Student).await;

    let err = storage
        .create_user(NewUser {
            name: "Other".to_string(),
            email: "ALICE@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: UserRole::Teacher,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E014");

    let found = storage
        .get_user_by_email("Alice@Example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.name, "Alice");
}

#[tokio::test]
async fn test_course_list_filters() {
    let storage = storage().await;
    let t1 = create_user(&storage, "Tina", UserRole::Teacher).await;
    let t2 = create_user(&storage, "Tom", UserRole::Teacher).await;
    create_course(&storage, t1.id, "Rust Basics").await;
    create_course(&storage, t1.id, "Databases").await;
    create_course(&storage, t2.id, "Advanced Rust").await;

    let all = storage
        .list_courses_with_pagination(CourseListQuery::default())
        .await
        .unwrap();
    assert_eq!(all.pagination.total, 3);

    let by_teacher = storage
        .list_courses_with_pagination(CourseListQuery {
            teacher_id: Some(t1.id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(by_teacher.items.len(), 2);

    let search = storage
        .list_courses_with_pagination(CourseListQuery {
            search: Some("rust".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(search.items.len(), 2);

    let paged = storage
        .list_courses_with_pagination(CourseListQuery {
            page: Some(2),
            size: Some(2),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(paged.items.len(), 1);
    assert_eq!(paged.pagination.total, 3);
}

#[tokio::test]
async fn test_course_list_clamps_huge_page() {
    let storage = storage().await;
    let teacher = create_user(&storage, "Paging", UserRole::Teacher).await;
    create_course(&storage, teacher.id, "Rust Basics").await;

    let page = storage
        .list_courses_with_pagination(CourseListQuery {
            page: Some(i64::MAX),
            size: Some(100),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.pagination.page, i64::MAX / 100);
    assert_eq!(page.pagination.total, 1);
    assert_eq!(page.pagination.total_pages, 1);
}

#[tokio::test]
async fn test_update_course_keeps_unset_fields() {
    let storage = storage().await;
    let teacher = create_user(&storage, "Tina", UserRole::Teacher).await;
    let course_id = create_course(&storage, teacher.id, "Rust Basics").await;

    let updated = storage
        .update_course(
            course_id,
            UpdateCourseRequest {
                title: Some("Rust Fundamentals".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.title, "Rust Fundamentals");
    assert_eq!(updated.category, "Programming");

    assert!(
        storage
            .update_course(9999, UpdateCourseRequest::default())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_enroll_is_idempotent() {
    let storage = storage().await;
    let teacher = create_user(&storage, "Tina", UserRole::Teacher).await;
    let student = create_user(&storage, "Sam", UserRole::Student).await;
    let course_id = create_course(&storage, teacher.id, "Rust Basics").await;

    let first = storage.enroll(student.id, course_id).await.unwrap();
    assert!(matches!(first, EnrollOutcome::Created(_)));

    let second = storage.enroll(student.id, course_id).await.unwrap();
    assert!(matches!(second, EnrollOutcome::Existing(_)));
    assert_eq!(first.enrollment().id, second.enrollment().id);

    let counts = storage
        .count_enrollments_by_courses(&[course_id])
        .await
        .unwrap();
    assert_eq!(counts.get(&course_id), Some(&1));

    let roster = storage.list_course_enrollments(course_id).await.unwrap();
    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].name, "Sam");

    assert!(storage.unenroll(student.id, course_id).await.unwrap());
    assert!(!storage.unenroll(student.id, course_id).await.unwrap());
}

#[tokio::test]
async fn test_schedule_creates_single_empty_attendance() {
    let storage = storage().await;
    let teacher = create_user(&storage, "Tina", UserRole::Teacher).await;
    let course_id = create_course(&storage, teacher.id, "Rust Basics").await;

    let (lecture, attendance) = storage
        .schedule_lecture(new_lecture(course_id, teacher.id, "Ownership"))
        .await
        .unwrap();
    assert_eq!(attendance.lecture_id, lecture.id);
    assert!(attendance.attendees.is_empty());

    let records = storage
        .list_attendance_by_lectures(&[lecture.id])
        .await
        .unwrap();
    assert_eq!(records.len(), 1);

    let lectures = storage.list_lectures_by_teacher(teacher.id).await.unwrap();
    assert_eq!(lectures.len(), 1);
    assert_eq!(lectures[0].topic, "Ownership");
}

#[tokio::test]
async fn test_mark_present_then_absent_restores_set() {
    let storage = storage().await;
    let teacher = create_user(&storage, "Tina", UserRole::Teacher).await;
    let s1 = create_user(&storage, "Sam", UserRole::Student).await;
    let s2 = create_user(&storage, "Sue", UserRole::Student).await;
    let course_id = create_course(&storage, teacher.id, "Rust Basics").await;
    let (lecture, _) = storage
        .schedule_lecture(new_lecture(course_id, teacher.id, "Ownership"))
        .await
        .unwrap();

    let before = storage.mark_present(lecture.id, s1.id).await.unwrap();
    assert_eq!(before.attendees, vec![s1.id]);

    // 重复标记不改变集合
    let again = storage.mark_present(lecture.id, s1.id).await.unwrap();
    assert_eq!(again.attendees, vec![s1.id]);

    let with_s2 = storage.mark_present(lecture.id, s2.id).await.unwrap();
    assert!(with_s2.is_present(s1.id) && with_s2.is_present(s2.id));

    let after = storage.mark_absent(lecture.id, s2.id).await.unwrap();
    assert_eq!(after.attendees, before.attendees);

    // 不在集合中时缺勤也无副作用
    let unchanged = storage.mark_absent(lecture.id, s2.id).await.unwrap();
    assert_eq!(unchanged.attendees, vec![s1.id]);
}

#[tokio::test]
async fn test_announcements_newest_first() {
    let storage = storage().await;
    let teacher = create_user(&storage, "Tina", UserRole::Teacher).await;
    let course_id = create_course(&storage, teacher.id, "Rust Basics").await;

    let first = storage
        .create_announcement(course_id, teacher.id, "Welcome".to_string())
        .await
        .unwrap();
    let second = storage
        .create_announcement(course_id, teacher.id, "  Bring laptops  ".to_string())
        .await
        .unwrap();
    assert_eq!(second.text, "Bring laptops");

    let list = storage
        .list_announcements_by_courses(&[course_id])
        .await
        .unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].id, second.id);
    assert_eq!(list[1].id, first.id);

    assert!(storage.delete_announcement(first.id).await.unwrap());
    assert!(storage.get_announcement_by_id(first.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_course_cascades() {
    let storage = storage().await;
    let teacher = create_user(&storage, "Tina", UserRole::Teacher).await;
    let student = create_user(&storage, "Sam", UserRole::Student).await;
    let course_id = create_course(&storage, teacher.id, "Rust Basics").await;
    storage.enroll(student.id, course_id).await.unwrap();
    let (lecture, _) = storage
        .schedule_lecture(new_lecture(course_id, teacher.id, "Ownership"))
        .await
        .unwrap();
    storage.mark_present(lecture.id, student.id).await.unwrap();
    storage
        .create_announcement(course_id, teacher.id, "Welcome".to_string())
        .await
        .unwrap();

    assert!(storage.delete_course(course_id).await.unwrap());

    assert!(storage.get_course_by_id(course_id).await.unwrap().is_none());
    assert!(storage.get_lecture_by_id(lecture.id).await.unwrap().is_none());
    assert!(
        storage
            .get_attendance_by_lecture(lecture.id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        storage
            .list_user_enrollments(student.id)
            .await
            .unwrap()
            .is_empty()
    );
    assert!(
        storage
            .list_announcements_by_courses(&[course_id])
            .await
            .unwrap()
            .is_empty()
    );
}
