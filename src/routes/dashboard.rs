use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::requests::CourseQueryParams;
use crate::models::users::entities::UserRole;
use crate::services::DashboardService;

static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

pub async fn landing(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.landing(&req).await
}

pub async fn student_catalog(
    req: HttpRequest,
    query: web::Query<CourseQueryParams>,
) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE
        .student_catalog(&req, query.into_inner())
        .await
}

pub async fn student_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.student_courses(&req).await
}

pub async fn teacher_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.teacher_courses(&req).await
}

pub async fn teacher_lectures(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.teacher_lectures(&req).await
}

pub async fn teacher_attendance(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.teacher_attendance(&req).await
}

// 配置路由
pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/dashboard")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(landing))
            .service(
                web::scope("/student")
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
                    .route("/catalog", web::get().to(student_catalog))
                    .route("/courses", web::get().to(student_courses)),
            )
            .service(
                web::scope("/teacher")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route("/courses", web::get().to(teacher_courses))
                    .route("/lectures", web::get().to(teacher_lectures))
                    .route("/attendance", web::get().to(teacher_attendance)),
            ),
    );
}
