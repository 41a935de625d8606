// 后端 API 模块
// schema 定义传输结构，operations 定义各端点的调用

pub mod operations;
pub mod schema;
