use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LectureService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse, ErrorCode,
    lectures::{
        requests::{NewLecture, ScheduleLectureRequest},
        responses::ScheduledLectureResponse,
    },
    realtime::entities::{ChangeAction, ChangeCollection, ChangeEvent},
};
use crate::services::{internal_error, unauthorized, websocket::publish};
use crate::utils::time::parse_schedule_time;
use crate::utils::validate::{TOPIC_MAX_LENGTH, validate_meeting_link, validate_required_text};

fn invalid(code: ErrorCode, msg: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, msg))
}

/// 排课：只有课程的授课教师可以排课，课时与空考勤记录同时创建
pub async fn schedule_lecture(
    service: &LectureService,
    request: &HttpRequest,
    lecture_data: ScheduleLectureRequest,
) -> ActixResult<HttpResponse> {
    let Some(teacher_id) = RequireJWT::extract_user_id(request) else {
        return Ok(unauthorized());
    };

    // 1. 校验输入
    if let Err(msg) = validate_required_text(&lecture_data.topic, TOPIC_MAX_LENGTH, "Topic") {
        return Ok(invalid(ErrorCode::LectureDataInvalid, msg));
    }
    if let Err(msg) = validate_meeting_link(&lecture_data.meeting_link) {
        return Ok(invalid(ErrorCode::LectureDataInvalid, msg));
    }
    let scheduled_at = match parse_schedule_time(&lecture_data.scheduled_at) {
        Ok(at) => at,
        Err(e) => {
            tracing::debug!("Rejected schedule time '{}': {}", lecture_data.scheduled_at, e);
            return Ok(invalid(
                ErrorCode::LectureTimeInvalid,
                "scheduled_at must be RFC 3339 or YYYY-MM-DDTHH:MM",
            ));
        }
    };

    // 2. 课程存在且属于当前教师
    let storage = service.get_storage(request)?;
    let course = match storage.get_course_by_id(lecture_data.course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => return Ok(internal_error("Failed to load course for scheduling", e)),
    };
    if course.teacher_id != teacher_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::CoursePermissionDenied,
            "Only the course teacher can schedule lectures",
        )));
    }

    // 3. 写入
    let new_lecture = NewLecture {
        course_id: course.id,
        teacher_id,
        topic: lecture_data.topic,
        scheduled_at,
        meeting_link: lecture_data.meeting_link,
    };

    match storage.schedule_lecture(new_lecture).await {
        Ok((lecture, attendance)) => {
            tracing::info!("Lecture {} scheduled for course {}", lecture.id, course.id);
            publish::publish_to_course(
                request,
                &storage,
                course.id,
                course.teacher_id,
                ChangeEvent::new(ChangeCollection::Lectures, ChangeAction::Created)
                    .course(course.id)
                    .lecture(lecture.id),
            )
            .await;
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ScheduledLectureResponse {
                    lecture,
                    attendance,
                },
                "Lecture scheduled",
            )))
        }
        Err(e) => {
            tracing::error!("Failed to schedule lecture: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::LectureScheduleFailed,
                    "Something went wrong.",
                )),
            )
        }
    }
}
