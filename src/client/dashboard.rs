//! 客户端控制器：执行动作并发布视图状态
//!
//! 新动作会取消上一个未完成的请求，旧请求的结果不会覆盖新状态。

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::debug;

use super::api::ApiClient;
use super::view::{Action, Payload, ViewState};

#[derive(Debug, Default)]
struct Inflight {
    generation: u64,
    handle: Option<AbortHandle>,
}

#[derive(Debug)]
pub struct Dashboard {
    client: ApiClient,
    state: watch::Sender<ViewState>,
    inflight: Mutex<Inflight>,
}

impl Dashboard {
    pub fn new(client: ApiClient) -> Self {
        let (state, _) = watch::channel(ViewState::Idle);
        Self {
            client,
            state,
            inflight: Mutex::new(Inflight::default()),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// 订阅视图状态变化
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// 当前视图状态的快照
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// 在后台执行动作，立即返回
    pub fn trigger(self: &Arc<Self>, action: Action) -> JoinHandle<()> {
        let mut inflight = self.inflight.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(previous) = inflight.handle.take() {
            debug!("取消未完成的请求 #{}", inflight.generation);
            previous.abort();
        }
        inflight.generation += 1;
        let generation = inflight.generation;

        self.state.send_replace(ViewState::Loading(action));

        let dashboard = Arc::clone(self);
        let handle = tokio::spawn(async move {
            let next = dashboard.perform(action).await;
            dashboard.publish(generation, next);
        });
        inflight.handle = Some(handle.abort_handle());

        handle
    }

    /// 执行动作并等待结果
    pub async fn run(self: &Arc<Self>, action: Action) -> ViewState {
        if let Err(e) = self.trigger(action).await {
            debug!("{} 已被取消: {}", action.label(), e);
        }
        self.state()
    }

    async fn perform(&self, action: Action) -> ViewState {
        let result = match action {
            Action::CheckHealth => self.client.fetch_health().await.map(Payload::Health),
            Action::GetUsers => self.client.fetch_users().await.map(Payload::Users),
        };
        ViewState::settle(action, result)
    }

    /// 只有最新一次动作的结果会被发布
    fn publish(&self, generation: u64, next: ViewState) {
        let mut inflight = self.inflight.lock().unwrap_or_else(PoisonError::into_inner);
        if inflight.generation != generation {
            debug!("丢弃过期的结果 #{}", generation);
            return;
        }
        inflight.handle = None;
        self.state.send_replace(next);
    }
}
