use std::time::Duration;

use tokio::time::Instant;

/// 防抖：把快速连续的触发合并为安静期结束后的一次生效
#[derive(Debug)]
pub struct Debounce {
    window: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            deadline: None,
        }
    }

    /// 记录一次触发，截止时间向后推
    pub fn trigger(&mut self) {
        self.deadline = Some(Instant::now() + self.window);
    }

    /// 撤销未生效的触发
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// 等到安静期结束。返回 true 表示存在一次待生效的触发且已到期
    pub async fn quiesce(&mut self) -> bool {
        loop {
            let Some(deadline) = self.deadline else {
                return false;
            };
            tokio::time::sleep_until(deadline).await;
            // 睡眠期间截止时间可能被再次推后
            if self.deadline == Some(deadline) {
                self.deadline = None;
                return true;
            }
        }
    }
}
