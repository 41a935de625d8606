// 搜索模块
// 输入 → 联想 → 选择/地理编码 → 附近搜索 的编排

pub mod controller;
pub mod debounce;
pub mod geolocation;
pub mod presets;

pub use controller::{SearchController, SearchPhase};
pub use geolocation::GeolocationProvider;
pub use presets::{POPULAR_LOCATIONS, PresetLocation, find_preset};
