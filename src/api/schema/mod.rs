// API 传输结构定义

pub mod common;
pub mod places;
pub mod user;
