use serde::Deserialize;
use ts_rs::TS;

// 更新当前用户资料
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

// 用户更新（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub password_hash: Option<String>,
}
