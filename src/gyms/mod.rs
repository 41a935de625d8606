// 健身房展示模块
// 结果卡片的纯渲染与管理员的步入状态变更

pub mod cards;
pub mod walk_in;

pub use cards::{GymCard, render_cards};
pub use walk_in::WalkInEditor;
