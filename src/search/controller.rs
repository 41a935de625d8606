// 搜索区控制器
// 显式状态机：Idle → Suggesting → (选择 | Geocoding) → Searching → Ready，
// Error 只能从 Geocoding / Searching 进入。状态带数据，
// 不允许出现"搜索中却没有坐标"这类组合

use tokio::time::Instant;

use crate::AppState;
use crate::api::operations::places::{autocomplete, clamp_radius, geocode, nearby_gyms};
use crate::api::schema::places::{Coordinates, GymRecord, Suggestion};
use crate::cache::QueryCacheOperations;
use crate::cache::keys::places_keys::{nearby_key, suggestion_key};
use crate::error::AppError;
use crate::search::debounce::Debounce;
use crate::search::geolocation::GeolocationProvider;
use crate::search::presets::PresetLocation;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    Idle,
    Suggesting { suggestions: Vec<Suggestion> },
    Geocoding { description: String },
    Searching { coordinates: Coordinates },
    Ready {
        coordinates: Coordinates,
        gyms: Vec<GymRecord>,
    },
    Error { message: String },
}

type GymsFetched = Box<dyn FnMut(&[GymRecord]) + Send>;

pub struct SearchController {
    state: AppState,
    phase: SearchPhase,
    /// 用户输入的位置文本，选中建议时被重置为建议的描述
    input: String,
    radius: u32,
    suggestions_visible: bool,
    /// 联想查询的行内错误，不进入 Error 状态、不打断输入
    suggestion_error: Option<String>,
    debounce: Debounce,
    /// 失焦后的延迟隐藏截止时间，选择事件会将其撤销
    hide_deadline: Option<Instant>,
    /// 当前搜索键，落地的响应只有在键仍匹配时才允许更新状态
    current_key: Option<String>,
    on_gyms_fetched: Option<GymsFetched>,
}

impl SearchController {
    pub fn new(state: AppState) -> Self {
        let radius = clamp_radius(state.config.default_radius_m);
        let debounce = Debounce::new(state.config.debounce_window());
        Self {
            state,
            phase: SearchPhase::Idle,
            input: String::new(),
            radius,
            suggestions_visible: false,
            suggestion_error: None,
            debounce,
            hide_deadline: None,
            current_key: None,
            on_gyms_fetched: None,
        }
    }

    /// 设置进入 Ready 时回调父组件的闭包，每次携带最新列表、只调用一次
    pub fn set_on_gyms_fetched(&mut self, callback: GymsFetched) {
        self.on_gyms_fetched = Some(callback);
    }

    /// 半径在这里就收敛到后端接受的范围，缓存键与实际请求才会一致
    pub fn set_radius(&mut self, radius: u32) {
        self.radius = clamp_radius(radius);
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn suggestions_visible(&self) -> bool {
        self.suggestions_visible
    }

    pub fn suggestion_error(&self) -> Option<&str> {
        self.suggestion_error.as_deref()
    }

    /// 面板可见时的联想列表
    pub fn suggestions(&self) -> &[Suggestion] {
        match &self.phase {
            SearchPhase::Suggesting { suggestions } if self.suggestions_visible => suggestions,
            _ => &[],
        }
    }

    /// 处理一次按键：更新文本并安排（或取消）联想查询
    /// 短输入零网络调用；合格输入只是推后防抖截止时间
    pub fn handle_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.suggestions_visible = true;
        self.suggestion_error = None;
        self.hide_deadline = None;

        let trimmed = self.input.trim();
        if trimmed.chars().count() <= self.state.config.suggestion_min_chars {
            self.debounce.cancel();
            self.phase = if trimmed.is_empty() {
                SearchPhase::Idle
            } else {
                SearchPhase::Suggesting {
                    suggestions: Vec::new(),
                }
            };
            return;
        }

        // 键入期间保留上一批建议，结算后整体替换
        if !matches!(self.phase, SearchPhase::Suggesting { .. }) {
            self.phase = SearchPhase::Suggesting {
                suggestions: Vec::new(),
            };
        }
        self.debounce.trigger();
    }

    /// 等安静期结束后为最终文本取一次联想
    /// 失败按空列表处理并记下行内错误，不得让输入崩溃
    pub async fn settle_suggestions(&mut self) {
        if !self.debounce.quiesce().await {
            return;
        }
        if !self.suggestions_visible {
            return;
        }

        let text = self.input.trim().to_string();
        if text.chars().count() <= self.state.config.suggestion_min_chars {
            return;
        }

        let key = suggestion_key(&text);
        if let Some(cached) =
            QueryCacheOperations::get::<Vec<Suggestion>>(&self.state.cache, &key)
        {
            self.phase = SearchPhase::Suggesting {
                suggestions: cached,
            };
            return;
        }

        match autocomplete(&self.state.http, &text).await {
            Ok(suggestions) => {
                // 联想结果在防抖窗口内视为新鲜，窗口内的重复键入直接命中缓存
                QueryCacheOperations::put(
                    &self.state.cache,
                    &key,
                    &suggestions,
                    self.state.config.debounce_window(),
                );
                self.phase = SearchPhase::Suggesting { suggestions };
            }
            Err(e) => {
                tracing::warn!("联想查询失败: {}", e);
                self.suggestion_error = Some(e.to_string());
                self.phase = SearchPhase::Suggesting {
                    suggestions: Vec::new(),
                };
            }
        }
    }

    /// 输入框失焦：延迟隐藏联想面板，给同一手势里的选择事件留出时间
    pub fn handle_blur(&mut self) {
        if self.suggestions_visible {
            self.hide_deadline = Some(Instant::now() + self.state.config.hide_delay());
        }
    }

    /// 结算延迟隐藏；期间若发生了选择，隐藏已被撤销
    pub async fn finish_blur(&mut self) {
        let Some(deadline) = self.hide_deadline else {
            return;
        };
        tokio::time::sleep_until(deadline).await;
        if self.hide_deadline == Some(deadline) {
            self.hide_deadline = None;
            self.suggestions_visible = false;
        }
    }

    /// 选中一条联想建议：收起面板、重置输入文本、进入地理编码
    pub async fn select_suggestion(&mut self, suggestion: &Suggestion) -> Result<(), AppError> {
        let description = suggestion.description.clone();
        self.commit_selection(description.clone());
        self.geocode_then_search(description).await
    }

    /// 选中热门地点预设：坐标已知，跳过地理编码直接搜索
    pub async fn select_preset(&mut self, preset: &PresetLocation) -> Result<(), AppError> {
        self.commit_selection(preset.name.to_string());
        self.run_search(preset.coordinates).await
    }

    /// 显式搜索当前输入的自由文本
    pub async fn submit(&mut self) -> Result<(), AppError> {
        let description = self.input.trim().to_string();
        if description.is_empty() {
            return Ok(());
        }
        self.commit_selection(description.clone());
        self.geocode_then_search(description).await
    }

    /// 设备定位入口：直接拿坐标，绕过地理编码
    pub async fn use_device_location(
        &mut self,
        provider: &dyn GeolocationProvider,
    ) -> Result<(), AppError> {
        self.commit_selection(self.input.clone());
        match provider.current_position().await {
            Ok(coordinates) => self.run_search(coordinates).await,
            Err(e) => {
                tracing::warn!("设备定位失败: {}", e);
                self.phase = SearchPhase::Error {
                    message: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Error 状态在消息展示完后回到 Idle
    pub fn dismiss_error(&mut self) {
        if matches!(self.phase, SearchPhase::Error { .. }) {
            self.phase = SearchPhase::Idle;
        }
    }

    // 选择与面板收起同属一个手势时，选择必须赢：
    // 先撤销延迟隐藏，再收起面板并丢弃残留建议
    fn commit_selection(&mut self, description: String) {
        self.hide_deadline = None;
        self.suggestions_visible = false;
        self.suggestion_error = None;
        self.debounce.cancel();
        self.input = description;
    }

    async fn geocode_then_search(&mut self, description: String) -> Result<(), AppError> {
        self.phase = SearchPhase::Geocoding {
            description: description.clone(),
        };

        match geocode(&self.state.http, &description).await {
            Ok(response) => {
                if let Some(formatted) = &response.formatted_address {
                    self.input = formatted.clone();
                }
                self.run_search(response.coordinates()).await
            }
            Err(e) => {
                // 地理编码失败不得触发附近搜索
                tracing::warn!("地理编码失败，地址 {}: {}", description, e);
                self.phase = SearchPhase::Error {
                    message: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// 进入 Searching 对每组坐标恰好触发一次附近查询；
    /// 相同键命中缓存时不发网络请求
    async fn run_search(&mut self, coordinates: Coordinates) -> Result<(), AppError> {
        self.phase = SearchPhase::Searching { coordinates };

        let key = nearby_key(coordinates, self.radius);
        self.current_key = Some(key.clone());

        if let Some(cached) = QueryCacheOperations::get::<Vec<GymRecord>>(&self.state.cache, &key)
        {
            tracing::debug!("附近搜索命中缓存，键 {}", key);
            self.enter_ready(coordinates, cached);
            return Ok(());
        }

        match nearby_gyms(&self.state.http, coordinates, self.radius).await {
            Ok(response) => {
                // 已被新的搜索取代的响应直接丢弃
                if self.current_key.as_deref() != Some(key.as_str()) {
                    tracing::debug!("丢弃已被取代的搜索结果，键 {}", key);
                    return Ok(());
                }
                QueryCacheOperations::put(
                    &self.state.cache,
                    &key,
                    &response.places,
                    self.state.config.nearby_cache_ttl(),
                );
                self.enter_ready(coordinates, response.places);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("附近搜索失败: {}", e);
                if self.current_key.as_deref() == Some(key.as_str()) {
                    self.phase = SearchPhase::Error {
                        message: e.to_string(),
                    };
                }
                Err(e)
            }
        }
    }

    fn enter_ready(&mut self, coordinates: Coordinates, gyms: Vec<GymRecord>) {
        if let Some(callback) = &mut self.on_gyms_fetched {
            callback(&gyms);
        }
        self.phase = SearchPhase::Ready { coordinates, gyms };
    }
}
