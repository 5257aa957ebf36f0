/*!
 * 偏好存储模块
 *
 * 提供异步键值存储抽象以及内存、JSON 文件两种实现，
 * 主题仓库通过该抽象读写用户选择。
 */

pub mod error;
pub mod file;
pub mod kv;
pub mod memory;

// 重新导出核心类型
pub use error::{StorageError, StorageResult};
pub use file::JsonFileStore;
pub use kv::KeyValueStore;
pub use memory::MemoryKeyValueStore;

/// 偏好文件名称
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";
