/*!
 * 键值存储抽象
 */

use super::error::StorageResult;
use async_trait::async_trait;

/// 异步键值存储
///
/// 键和值都是字符串，实现必须可以跨任务共享。
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// 读取键对应的值，不存在时返回 `None`
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// 写入键值
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
