// 步入状态行内编辑器（仅管理员）
// 确认走 PATCH，成功后整体失效附近搜索缓存而不是原地修补列表

use crate::AppState;
use crate::api::operations::places::update_walk_in;
use crate::api::schema::places::GymRecord;
use crate::cache::QueryCacheOperations;
use crate::cache::keys::places_keys::NEARBY_PREFIX;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    Viewing,
    Editing,
}

pub struct WalkInEditor {
    record: GymRecord,
    phase: EditorPhase,
    /// 编辑中的待定值，取消或失败时丢弃
    pending: Option<bool>,
}

impl WalkInEditor {
    pub fn new(record: GymRecord) -> Self {
        Self {
            record,
            phase: EditorPhase::Viewing,
            pending: None,
        }
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    /// 展示值：编辑中显示待定值，否则显示最近一次已知的服务端值
    pub fn displayed_walk_in(&self) -> bool {
        self.pending.unwrap_or(self.record.walk_in)
    }

    /// 进入编辑，把当前服务端值复制为待定值
    pub fn begin_edit(&mut self) {
        self.pending = Some(self.record.walk_in);
        self.phase = EditorPhase::Editing;
    }

    pub fn set_pending(&mut self, walk_in: bool) {
        if self.phase == EditorPhase::Editing {
            self.pending = Some(walk_in);
        }
    }

    /// 取消编辑：丢弃待定值，零网络调用
    pub fn cancel(&mut self) {
        self.pending = None;
        self.phase = EditorPhase::Viewing;
    }

    /// 确认变更
    /// 记录缺少稳定 id 时必须在发请求前硬停；成功后失效全部附近搜索缓存，
    /// 失败时展示值回退到最近一次已知的服务端值
    pub async fn confirm(&mut self, state: &AppState) -> Result<(), AppError> {
        let Some(pending) = self.pending else {
            return Ok(());
        };

        let Some(place_id) = self.record.id.clone() else {
            self.cancel();
            tracing::warn!("健身房 {} 缺少稳定 id，拒绝变更", self.record.display_name);
            return Err(AppError::MissingIdentifier);
        };

        match update_walk_in(&state.http, &place_id, pending).await {
            Ok(updated) => {
                self.record.walk_in = updated.walk_in;
                self.pending = None;
                self.phase = EditorPhase::Viewing;
                // 下一次读取必须反映服务端变更后的状态
                QueryCacheOperations::invalidate_prefix(&state.cache, NEARBY_PREFIX);
                Ok(())
            }
            Err(e) => {
                self.cancel();
                Err(e)
            }
        }
    }
}
