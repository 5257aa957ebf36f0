/*!
 * 主题状态仓库
 *
 * 当前主题的唯一数据源。负责内存状态与持久化存储的协调：
 * 切换主题时先同步更新内存并通知订阅者，再由单个后台任务按顺序写入存储；
 * 启动时从存储恢复上次选择的主题。
 */

use super::catalog::{self, DEFAULT_THEME};
use super::types::{ThemeDefinition, ThemeId};
use crate::storage::KeyValueStore;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, error, info, warn};

/// 持久化主题选择使用的键
pub const THEME_STORAGE_KEY: &str = "selectedTheme";

/// 事件通道容量
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// 主题状态快照
///
/// `current_theme_data` 总是 `current_theme` 在主题目录中的定义。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSnapshot {
    pub current_theme: ThemeId,
    pub current_theme_data: &'static ThemeDefinition,
}

impl ThemeSnapshot {
    pub fn of(id: ThemeId) -> Self {
        Self {
            current_theme: id,
            current_theme_data: catalog::lookup(id),
        }
    }
}

impl Default for ThemeSnapshot {
    fn default() -> Self {
        Self::of(DEFAULT_THEME)
    }
}

/// 主题变更来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeSource {
    /// 用户选择
    Selected,
    /// 启动时从存储恢复
    Restored,
}

/// 主题事件
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ThemeEvent {
    /// 内存中的主题已变更
    Changed {
        theme: ThemeId,
        source: ChangeSource,
        timestamp: DateTime<Utc>,
    },
    /// 主题选择已写入存储
    Persisted {
        theme: ThemeId,
        timestamp: DateTime<Utc>,
    },
    /// 主题选择写入存储失败
    PersistFailed {
        theme: ThemeId,
        error: String,
        timestamp: DateTime<Utc>,
    },
}

/// 恢复结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// 已应用存储中的主题
    Restored(ThemeId),
    /// 存储中没有保存过主题
    NothingStored,
    /// 存储中的值不在主题目录中
    Invalid(String),
    /// 读取存储失败
    ReadFailed,
    /// 用户已经选择过主题，恢复结果被丢弃
    Superseded,
}

/// 订阅者回调
pub type ThemeListener = Arc<dyn Fn(&ThemeSnapshot) + Send + Sync>;

/// 订阅标识，用于取消订阅
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// 写入请求在完成前被丢弃（仓库已销毁）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Theme persist request dropped before completion")]
pub struct PersistAborted;

/// 主题写入句柄
///
/// 等待该句柄会在对应的写入结束（无论成功与否）后返回。
/// 丢弃句柄不会取消写入。
#[derive(Debug)]
pub struct PersistHandle {
    receiver: oneshot::Receiver<()>,
}

impl Future for PersistHandle {
    type Output = Result<(), PersistAborted>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|result| result.map_err(|_| PersistAborted))
    }
}

/// 写入队列中的一项
struct PersistRequest {
    theme: ThemeId,
    done: oneshot::Sender<()>,
}

struct ThemeState {
    snapshot: ThemeSnapshot,

    /// 每次用户选择递增，非零时恢复不再生效
    generation: u64,
}

/// 主题仓库
pub struct ThemeStore {
    /// 当前状态，作为整体读写
    state: RwLock<ThemeState>,

    /// 已注册的订阅者
    listeners: RwLock<Vec<(SubscriptionId, ThemeListener)>>,

    next_subscription: AtomicU64,

    /// 持久化存储
    storage: Arc<dyn KeyValueStore>,

    /// 写入队列，按选择顺序由单个后台任务消费
    persist_sender: mpsc::UnboundedSender<PersistRequest>,

    /// 后台写入任务启动前暂存的队列接收端
    persist_receiver: Mutex<Option<mpsc::UnboundedReceiver<PersistRequest>>>,

    /// 事件广播发送器
    event_sender: broadcast::Sender<ThemeEvent>,
}

impl ThemeStore {
    /// 使用默认主题创建仓库
    ///
    /// 不要求处于 tokio 运行时中，后台写入任务在首次可用时启动。
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let (event_sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let (persist_sender, persist_receiver) = mpsc::unbounded_channel();

        let store = Self {
            state: RwLock::new(ThemeState {
                snapshot: ThemeSnapshot::default(),
                generation: 0,
            }),
            listeners: RwLock::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
            storage,
            persist_sender,
            persist_receiver: Mutex::new(Some(persist_receiver)),
            event_sender,
        };
        store.ensure_writer();
        store
    }

    /// 当前状态快照
    pub fn snapshot(&self) -> ThemeSnapshot {
        self.state.read().snapshot
    }

    pub fn current_theme(&self) -> ThemeId {
        self.snapshot().current_theme
    }

    pub fn current_theme_data(&self) -> &'static ThemeDefinition {
        self.snapshot().current_theme_data
    }

    /// 所有可用主题（目录声明顺序）
    pub fn available_themes(&self) -> &'static [ThemeDefinition] {
        catalog::all()
    }

    /// 注册订阅者，每次状态变更后同步调用
    ///
    /// 订阅者中的 panic 会被捕获并记录，不会传递给切换主题的调用方。
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&ThemeSnapshot) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        let listener: ThemeListener = Arc::new(listener);
        self.listeners.write().push((id, listener));
        id
    }

    /// 取消订阅，返回该订阅是否存在
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        listeners.len() != before
    }

    /// 订阅主题事件流
    pub fn subscribe_events(&self) -> broadcast::Receiver<ThemeEvent> {
        self.event_sender.subscribe()
    }

    /// 切换主题
    ///
    /// 内存状态立即更新并通知订阅者，随后把写入请求放入队列。
    /// 队列由单个后台任务按选择顺序写入存储，存储中的值最终与内存一致。
    /// 写入失败只记录日志，不回滚内存状态，也不返回给调用方。
    ///
    /// 可以在任意线程调用。不在 tokio 运行时中时，写入会排队，
    /// 直到仓库下一次在运行时中被使用。
    pub fn select_theme(&self, id: ThemeId) -> PersistHandle {
        let (done, receiver) = oneshot::channel();
        self.apply(
            id,
            ChangeSource::Selected,
            Some(PersistRequest { theme: id, done }),
        );
        self.ensure_writer();
        PersistHandle { receiver }
    }

    /// 按名称切换主题
    ///
    /// 名称不在主题目录中时忽略请求并返回 `None`。
    pub fn set_theme(&self, name: &str) -> Option<PersistHandle> {
        match name.parse::<ThemeId>() {
            Ok(id) => Some(self.select_theme(id)),
            Err(e) => {
                warn!("忽略主题切换请求: {}", e);
                None
            }
        }
    }

    /// 从存储恢复上次选择的主题
    ///
    /// 没有保存值、值无效或读取失败时保持当前状态。
    /// 用户已经选择过主题（包括读取期间）时丢弃存储中的值。
    /// 恢复不会再次写入存储。
    pub async fn restore_theme(&self) -> RestoreOutcome {
        self.ensure_writer();

        let stored = match self.storage.get(THEME_STORAGE_KEY).await {
            Ok(stored) => stored,
            Err(e) => {
                error!("主题加载失败: {}", e);
                return RestoreOutcome::ReadFailed;
            }
        };

        let Some(raw) = stored else {
            debug!("没有已保存的主题，使用默认主题");
            return RestoreOutcome::NothingStored;
        };

        let id = match raw.parse::<ThemeId>() {
            Ok(id) => id,
            Err(e) => {
                warn!("已保存的主题无效，使用默认主题: {}", e);
                return RestoreOutcome::Invalid(raw);
            }
        };

        if self.apply(id, ChangeSource::Restored, None) {
            info!("已恢复主题: {}", id);
            RestoreOutcome::Restored(id)
        } else {
            debug!("主题已被用户切换，丢弃已保存的主题: {}", id);
            RestoreOutcome::Superseded
        }
    }

    /// 原子更新状态并通知订阅者
    ///
    /// 用户选择总会生效，写入请求在状态锁内入队，保证队列顺序与状态顺序一致。
    /// 恢复只在从未发生过用户选择时生效。
    fn apply(&self, id: ThemeId, source: ChangeSource, persist: Option<PersistRequest>) -> bool {
        let snapshot = {
            let mut state = self.state.write();
            match source {
                ChangeSource::Selected => state.generation += 1,
                ChangeSource::Restored if state.generation != 0 => return false,
                ChangeSource::Restored => {}
            }
            state.snapshot = ThemeSnapshot::of(id);

            if let Some(request) = persist {
                if self.persist_sender.send(request).is_err() {
                    error!("主题写入队列已关闭: {}", id);
                }
            }
            state.snapshot
        };

        debug!("主题已切换: {} ({:?})", id, source);
        self.notify(&snapshot);
        let _ = self.event_sender.send(ThemeEvent::Changed {
            theme: id,
            source,
            timestamp: Utc::now(),
        });
        true
    }

    fn notify(&self, snapshot: &ThemeSnapshot) {
        // 回调在锁外执行，允许订阅者重新读取仓库
        let listeners: Vec<(SubscriptionId, ThemeListener)> = self
            .listeners
            .read()
            .iter()
            .map(|(id, listener)| (*id, Arc::clone(listener)))
            .collect();

        for (id, listener) in listeners {
            if panic::catch_unwind(AssertUnwindSafe(|| listener(snapshot))).is_err() {
                error!("主题订阅者执行失败: {:?}", id);
            }
        }
    }

    /// 在当前运行时中启动后台写入任务（只启动一次）
    fn ensure_writer(&self) {
        let mut slot = self.persist_receiver.lock();
        if slot.is_none() {
            return;
        }

        let Ok(runtime) = Handle::try_current() else {
            debug!("不在 tokio 运行时中，主题写入暂时排队");
            return;
        };

        if let Some(receiver) = slot.take() {
            runtime.spawn(run_persist_writer(
                Arc::clone(&self.storage),
                self.event_sender.clone(),
                receiver,
            ));
        }
    }
}

/// 后台写入任务：按入队顺序逐个写入，仓库销毁后退出
async fn run_persist_writer(
    storage: Arc<dyn KeyValueStore>,
    event_sender: broadcast::Sender<ThemeEvent>,
    mut receiver: mpsc::UnboundedReceiver<PersistRequest>,
) {
    while let Some(PersistRequest { theme, done }) = receiver.recv().await {
        match storage.set(THEME_STORAGE_KEY, theme.as_str()).await {
            Ok(()) => {
                debug!("主题已保存: {}", theme);
                let _ = event_sender.send(ThemeEvent::Persisted {
                    theme,
                    timestamp: Utc::now(),
                });
            }
            Err(e) => {
                error!("主题保存失败: {} - {}", theme, e);
                let _ = event_sender.send(ThemeEvent::PersistFailed {
                    theme,
                    error: e.to_string(),
                    timestamp: Utc::now(),
                });
            }
        }
        let _ = done.send(());
    }
    debug!("主题写入任务退出");
}
