pub mod auth;

pub mod users;

pub mod courses;

pub mod enrollments;

pub mod lectures;

pub mod dashboard;

pub mod websocket;

pub mod system;

pub use auth::configure_auth_routes;
pub use courses::configure_courses_routes;
pub use dashboard::configure_dashboard_routes;
pub use enrollments::configure_enrollments_routes;
pub use lectures::configure_lectures_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;
pub use websocket::configure_websocket_routes;

use actix_web::web;

/// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_user_routes)
        .configure(configure_courses_routes)
        .configure(configure_enrollments_routes)
        .configure(configure_lectures_routes)
        .configure(configure_dashboard_routes)
        .configure(configure_websocket_routes)
        .configure(configure_system_routes);
}
