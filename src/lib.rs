//! CourseDesk - 课程管理平台后端服务
//!
//! 基于 Actix Web 构建，面向教师与学生两类角色。
//!
//! # 架构
//! - `cache`: 缓存层（Moka/Redis）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证、角色、课程归属与限流中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层，含实时推送
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;

use actix_web::web;

/// 注册参数错误处理器与全部 API 路由
///
/// 存储、缓存、连接表等共享状态由调用方通过 `app_data` 注入。
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(utils::query_error_handler))
        .app_data(web::JsonConfig::default().error_handler(utils::json_error_handler))
        .configure(routes::configure_api_routes);
}
