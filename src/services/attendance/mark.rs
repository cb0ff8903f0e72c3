use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::responses::AttendanceResponse,
    realtime::entities::{ChangeAction, ChangeCollection, ChangeEvent},
};
use crate::services::{
    internal_error, lectures::load_owned_lecture, unauthorized, websocket::publish,
};

/// 标记出勤或缺勤
///
/// 存储层按集合插入/删除单个学生，不同教师同时标记不同学生互不覆盖。
/// 标记出勤要求学生已选该课程；缺勤不做要求，方便清理退课学生的记录。
pub async fn mark_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    lecture_id: i64,
    student_id: i64,
    present: bool,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };
    let storage = service.get_storage(request)?;

    let lecture = match load_owned_lecture(&storage, lecture_id, user_id).await {
        Ok(lecture) => lecture,
        Err(response) => return Ok(response),
    };

    if present {
        match storage.get_enrollment(student_id, lecture.course_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::StudentNotEnrolled,
                    "Student is not enrolled in this course",
                )));
            }
            Err(e) => return Ok(internal_error("Failed to check enrollment", e)),
        }
    }

    let result = if present {
        storage.mark_present(lecture.id, student_id).await
    } else {
        storage.mark_absent(lecture.id, student_id).await
    };

    match result {
        Ok(attendance) => {
            tracing::debug!(
                "Lecture {}: student {} marked {}",
                lecture.id,
                student_id,
                if present { "present" } else { "absent" }
            );
            publish::publish_to_users(
                request,
                &[lecture.teacher_id, student_id],
                ChangeEvent::new(ChangeCollection::Attendance, ChangeAction::Updated)
                    .course(lecture.course_id)
                    .lecture(lecture.id)
                    .user(student_id),
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AttendanceResponse { attendance },
                "Attendance updated",
            )))
        }
        Err(e) => {
            tracing::error!("Failed to update attendance for lecture {}: {}", lecture.id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AttendanceUpdateFailed,
                    "Something went wrong.",
                )),
            )
        }
    }
}
