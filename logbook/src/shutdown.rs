//! 協調的シャットダウン
//!
//! OSシグナルと組み合わせてサーバーを停止する。テストからも停止を要求できる。

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::Notify;

/// シャットダウン要求を共有するハンドル
#[derive(Clone, Debug, Default)]
pub struct ShutdownController {
    state: Arc<ShutdownState>,
}

#[derive(Debug, Default)]
struct ShutdownState {
    requested: AtomicBool,
    notify: Notify,
}

impl ShutdownController {
    /// 停止が要求済みか
    pub fn is_shutdown_requested(&self) -> bool {
        self.state.requested.load(Ordering::Acquire)
    }

    /// 停止を要求し、待機中のタスクを起こす
    pub fn request_shutdown(&self) {
        self.state.requested.store(true, Ordering::Release);
        self.state.notify.notify_waiters();
    }

    /// 停止要求まで待機
    pub async fn wait(&self) {
        let notified = self.state.notify.notified();
        if self.is_shutdown_requested() {
            return;
        }
        notified.await;
    }
}
