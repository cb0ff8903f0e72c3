use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::EnrollmentService;

static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

pub async fn list_my_enrollments(req: HttpRequest) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.list_my_enrollments(&req).await
}

// 配置路由
pub fn configure_enrollments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/enrollments")
            .wrap(middlewares::RequireJWT)
            .route("/me", web::get().to(list_my_enrollments)),
    );
}
