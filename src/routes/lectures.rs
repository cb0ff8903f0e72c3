use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::lectures::requests::ScheduleLectureRequest;
use crate::models::users::entities::UserRole;
use crate::services::{AttendanceService, LectureService};
use crate::utils::{SafeLectureIdI64, SafeStudentIdI64};

static LECTURE_SERVICE: Lazy<LectureService> = Lazy::new(LectureService::new_lazy);
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn list_lectures(req: HttpRequest) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE.list_teacher_lectures(&req).await
}

pub async fn schedule_lecture(
    req: HttpRequest,
    lecture_data: web::Json<ScheduleLectureRequest>,
) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE
        .schedule_lecture(&req, lecture_data.into_inner())
        .await
}

pub async fn delete_lecture(
    req: HttpRequest,
    lecture_id: SafeLectureIdI64,
) -> ActixResult<HttpResponse> {
    LECTURE_SERVICE.delete_lecture(&req, lecture_id.0).await
}

pub async fn get_attendance_sheet(
    req: HttpRequest,
    lecture_id: SafeLectureIdI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.get_sheet(&req, lecture_id.0).await
}

pub async fn mark_present(
    req: HttpRequest,
    lecture_id: SafeLectureIdI64,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .mark_present(&req, lecture_id.0, student_id.0)
        .await
}

pub async fn mark_absent(
    req: HttpRequest,
    lecture_id: SafeLectureIdI64,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .mark_absent(&req, lecture_id.0, student_id.0)
        .await
}

// 配置路由：课时与考勤只对教师开放，课程归属在服务层校验
pub fn configure_lectures_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lectures")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route("", web::get().to(list_lectures))
                    .route("", web::post().to(schedule_lecture))
                    .route("/{lecture_id}", web::delete().to(delete_lecture))
                    .route(
                        "/{lecture_id}/attendance",
                        web::get().to(get_attendance_sheet),
                    )
                    // PUT 标记出勤，DELETE 标记缺勤
                    .route(
                        "/{lecture_id}/attendance/{student_id}",
                        web::put().to(mark_present),
                    )
                    .route(
                        "/{lecture_id}/attendance/{student_id}",
                        web::delete().to(mark_absent),
                    ),
            ),
    );
}
