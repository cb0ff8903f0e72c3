//! 变更事件的接收者路由
//!
//! - 课程：所有在线用户（课程目录）
//! - 选课：该学生与授课教师
//! - 课时、公告：授课教师与已选课学生
//! - 考勤：授课教师与被标记的学生
//!
//! 没有注入 ConnectionManager 时（例如集成测试）静默跳过。

use actix_web::{HttpRequest, web};
use std::sync::Arc;
use tracing::{debug, warn};

use super::{ConnectionManager, WsMessage};
use crate::models::realtime::entities::ChangeEvent;
use crate::storage::Storage;

fn manager(request: &HttpRequest) -> Option<Arc<ConnectionManager>> {
    request
        .app_data::<web::Data<Arc<ConnectionManager>>>()
        .map(|data| data.get_ref().clone())
}

/// 推送给所有在线用户
pub fn publish_to_all(request: &HttpRequest, event: ChangeEvent) {
    if let Some(manager) = manager(request) {
        debug!("Broadcasting {:?} {:?}", event.collection, event.action);
        manager.broadcast_all(WsMessage::Changed { payload: event });
    }
}

/// 推送给指定用户
pub fn publish_to_users(request: &HttpRequest, user_ids: &[i64], event: ChangeEvent) {
    if let Some(manager) = manager(request) {
        let mut recipients = user_ids.to_vec();
        recipients.sort_unstable();
        recipients.dedup();
        manager.send_to_users(&recipients, WsMessage::Changed { payload: event });
    }
}

/// 推送给课程的授课教师与全部已选课学生
pub async fn publish_to_course(
    request: &HttpRequest,
    storage: &Arc<dyn Storage>,
    course_id: i64,
    teacher_id: i64,
    event: ChangeEvent,
) {
    if manager(request).is_none() {
        return;
    }

    let mut recipients = vec![teacher_id];
    match storage.list_course_enrollments(course_id).await {
        Ok(students) => recipients.extend(students.into_iter().map(|s| s.user_id)),
        Err(e) => warn!(
            "Failed to resolve realtime audience for course {}: {}",
            course_id, e
        ),
    }
    publish_to_users(request, &recipients, event);
}
