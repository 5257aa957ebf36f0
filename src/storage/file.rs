/*!
 * JSON 文件键值存储
 *
 * 将所有偏好保存在应用数据目录下的单个 JSON 对象文件中，
 * 写入时先写临时文件再原子重命名。
 */

use super::error::{StorageError, StorageResult};
use super::kv::KeyValueStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs as async_fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

type Entries = BTreeMap<String, String>;

/// 进程内临时文件序号
static TEMP_FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// JSON 文件键值存储
pub struct JsonFileStore {
    /// 偏好文件路径
    path: PathBuf,

    /// 串行化同一进程内的读改写
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// 偏好文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 临时文件路径，包含进程号和序号，多个写入方互不覆盖
    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let sequence = TEMP_FILE_COUNTER.fetch_add(1, Ordering::Relaxed);
        self.path.with_file_name(format!(
            ".{}.{}.{}.tmp",
            file_name,
            std::process::id(),
            sequence
        ))
    }

    async fn read_entries(&self) -> StorageResult<Entries> {
        let content = match async_fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("偏好文件不存在: {}", self.path.display());
                return Ok(Entries::new());
            }
            Err(e) => {
                return Err(StorageError::io(
                    format!("reading {}", self.path.display()),
                    e,
                ))
            }
        };

        serde_json::from_slice(&content).map_err(|e| StorageError::corrupted(self.path.clone(), e))
    }

    async fn atomic_write(&self, data: &[u8]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::io(format!("creating directory {}", parent.display()), e)
            })?;
        }

        let temp_path = self.temp_path();

        async_fs::write(&temp_path, data)
            .await
            .map_err(|e| StorageError::io(format!("writing {}", temp_path.display()), e))?;

        if let Err(e) = async_fs::rename(&temp_path, &self.path).await {
            // 清理临时文件
            let _ = async_fs::remove_file(&temp_path).await;
            return Err(StorageError::io(
                format!("renaming {} to {}", temp_path.display(), self.path.display()),
                e,
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut entries = match self.read_entries().await {
            Ok(entries) => entries,
            Err(StorageError::Corrupted { path, source }) => {
                warn!("偏好文件已损坏，将被覆盖: {} - {}", path.display(), source);
                Entries::new()
            }
            Err(e) => return Err(e),
        };

        entries.insert(key.to_string(), value.to_string());
        let data = serde_json::to_vec_pretty(&entries)?;
        self.atomic_write(&data).await?;

        debug!("偏好已写入: {} = {}", key, value);
        Ok(())
    }
}
