/*!
 * 课程访问控制中间件
 *
 * 必须在 RequireJWT 之后使用。从路径参数 `course_id` 读取课程，
 * 按访问级别校验当前用户，通过后把 [`CourseAccess`] 放进请求扩展。
 *
 * ```rust,ignore
 * web::resource("/{course_id}/enrollments").route(
 *     web::get()
 *         .to(list_course_enrollments)
 *         .wrap(RequireCourseAccess::owner()),
 * )
 * ```
 *
 * - `owner`：只有授课教师
 * - `member`：授课教师或已选课学生
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpRequest,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, warn};

use crate::{
    models::{ErrorCode, courses::entities::Course, users::entities::User},
    storage::Storage,
};

use super::create_error_response;

/// 通过校验的课程及当前用户与课程的关系
#[derive(Debug, Clone)]
pub struct CourseAccess {
    pub course: Course,
    pub is_owner: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccessLevel {
    Owner,
    Member,
}

#[derive(Clone)]
pub struct RequireCourseAccess {
    level: AccessLevel,
}

impl RequireCourseAccess {
    pub fn owner() -> Self {
        Self {
            level: AccessLevel::Owner,
        }
    }

    pub fn member() -> Self {
        Self {
            level: AccessLevel::Member,
        }
    }

    pub fn extract_access(req: &HttpRequest) -> Option<CourseAccess> {
        req.extensions().get::<CourseAccess>().cloned()
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireCourseAccess
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireCourseAccessMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireCourseAccessMiddleware {
            service: Rc::new(service),
            level: self.level,
        }))
    }
}

pub struct RequireCourseAccessMiddleware<S> {
    service: Rc<S>,
    level: AccessLevel,
}

impl<S, B> Service<ServiceRequest> for RequireCourseAccessMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let level = self.level;

        Box::pin(async move {
            macro_rules! reject {
                ($status:expr, $code:expr, $msg:expr) => {
                    return Ok(req.into_response(
                        create_error_response($status, $code, $msg).map_into_right_body(),
                    ))
                };
            }

            // 1. 当前用户
            let user = req.extensions().get::<User>().cloned();
            let Some(user) = user else {
                reject!(
                    StatusCode::UNAUTHORIZED,
                    ErrorCode::Unauthorized,
                    "Authentication required"
                );
            };

            // 2. 路径中的课程 ID
            let Some(course_id) = req
                .match_info()
                .get("course_id")
                .and_then(|s| s.parse::<i64>().ok())
            else {
                reject!(
                    StatusCode::BAD_REQUEST,
                    ErrorCode::BadRequest,
                    "Missing or invalid course_id"
                );
            };

            let Some(storage) = req
                .app_data::<web::Data<Arc<dyn Storage>>>()
                .map(|data| data.get_ref().clone())
            else {
                reject!(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalServerError,
                    "Storage not configured"
                );
            };

            // 3. 课程必须存在
            let course = match storage.get_course_by_id(course_id).await {
                Ok(Some(course)) => course,
                Ok(None) => reject!(
                    StatusCode::NOT_FOUND,
                    ErrorCode::CourseNotFound,
                    "Course not found"
                ),
                Err(e) => {
                    warn!("Failed to load course {}: {}", course_id, e);
                    reject!(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorCode::InternalServerError,
                        "Something went wrong."
                    );
                }
            };

            // 4. 授课教师直接放行，member 级别再查选课记录
            let is_owner = course.teacher_id == user.id;
            let permitted = if is_owner {
                true
            } else if level == AccessLevel::Member {
                match storage.get_enrollment(user.id, course_id).await {
                    Ok(enrollment) => enrollment.is_some(),
                    Err(e) => {
                        warn!("Failed to check enrollment for course {}: {}", course_id, e);
                        false
                    }
                }
            } else {
                false
            };

            if !permitted {
                debug!(
                    "User {} denied {:?} access to course {}",
                    user.id, level, course_id
                );
                reject!(
                    StatusCode::FORBIDDEN,
                    ErrorCode::CoursePermissionDenied,
                    "No permission for this course"
                );
            }

            req.extensions_mut().insert(CourseAccess { course, is_owner });
            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}
