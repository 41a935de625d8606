// API 调用
// 每个文件对应后端的一组端点

pub mod auth;
pub mod places;
pub mod user;
