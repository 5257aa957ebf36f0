/*!
 * 内存键值存储
 *
 * 进程内的键值存储实现，不跨启动保留数据，用于测试和临时会话。
 */

use super::error::StorageResult;
use super::kv::KeyValueStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// 内存键值存储
///
/// 克隆后的实例共享同一份数据。
#[derive(Clone, Default)]
pub struct MemoryKeyValueStore {
    data: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryKeyValueStore {
    /// 创建新的空存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 条目数量
    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.data.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.data.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.data
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
