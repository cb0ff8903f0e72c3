use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::announcements::requests::CreateAnnouncementRequest;
use crate::models::courses::requests::{
    CourseQueryParams, CreateCourseRequest, UpdateCourseRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::{AnnouncementService, CourseService, EnrollmentService};
use crate::utils::{SafeAnnouncementIdI64, SafeCourseIdI64};

// 懒加载的全局服务实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);
static ANNOUNCEMENT_SERVICE: Lazy<AnnouncementService> =
    Lazy::new(AnnouncementService::new_lazy);

// HTTP处理程序
pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseQueryParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req, query.into_inner()).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(&req, course_data.into_inner())
        .await
}

pub async fn list_teaching_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_teaching_courses(&req).await
}

pub async fn get_course(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(&req, course_id.0).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(&req, course_id.0, update_data.into_inner())
        .await
}

pub async fn delete_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(&req, course_id.0).await
}

pub async fn enroll(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.enroll(&req, course_id.0).await
}

pub async fn unenroll(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.unenroll(&req, course_id.0).await
}

pub async fn list_course_enrollments(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_course_enrollments(&req, course_id.0)
        .await
}

pub async fn list_announcements(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .list_announcements(&req, course_id.0)
        .await
}

pub async fn post_announcement(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    data: web::Json<CreateAnnouncementRequest>,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .post_announcement(&req, course_id.0, data.into_inner())
        .await
}

pub async fn delete_announcement(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    announcement_id: SafeAnnouncementIdI64,
) -> ActixResult<HttpResponse> {
    ANNOUNCEMENT_SERVICE
        .delete_announcement(&req, course_id.0, announcement_id.0)
        .await
}

// 配置路由
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .wrap(middlewares::RequireJWT)
            .service(
                // 所有登录用户可浏览课程目录，教师创建自己的课程
                web::resource("").route(web::get().to(list_courses)).route(
                    web::post()
                        .to(create_course)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/teaching").route(
                    web::get()
                        .to(list_teaching_courses)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/{course_id}")
                    .route(web::get().to(get_course))
                    .route(
                        web::put()
                            .to(update_course)
                            .wrap(middlewares::RequireCourseAccess::owner()),
                    )
                    .route(
                        web::delete()
                            .to(delete_course)
                            .wrap(middlewares::RequireCourseAccess::owner()),
                    ),
            )
            .service(
                // 学生选课与退课
                web::resource("/{course_id}/enroll")
                    .route(
                        web::post()
                            .to(enroll)
                            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                    )
                    .route(
                        web::delete()
                            .to(unenroll)
                            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                    ),
            )
            .service(
                web::resource("/{course_id}/enrollments").route(
                    web::get()
                        .to(list_course_enrollments)
                        .wrap(middlewares::RequireCourseAccess::owner()),
                ),
            )
            .service(
                // 授课教师与已选课学生可读，授课教师发布
                web::resource("/{course_id}/announcements")
                    .route(
                        web::get()
                            .to(list_announcements)
                            .wrap(middlewares::RequireCourseAccess::member()),
                    )
                    .route(
                        web::post()
                            .to(post_announcement)
                            .wrap(middlewares::RequireCourseAccess::owner()),
                    ),
            )
            .service(
                web::resource("/{course_id}/announcements/{announcement_id}").route(
                    web::delete()
                        .to(delete_announcement)
                        .wrap(middlewares::RequireCourseAccess::owner()),
                ),
            ),
    );
}
