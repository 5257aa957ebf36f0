/*!
 * 命令行入口
 *
 * 作为宿主外壳的替身：初始化日志和配置，恢复主题，再执行一条主题命令。
 */

use crate::config::{AppConfig, AppPaths, StorageBackend};
use crate::setup::{self, AppContext, SetupError};
use crate::utils::error::AppResult;
use anyhow::bail;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "theme-sample", version, about = "Select and persist the application theme")]
pub struct Cli {
    /// 应用数据目录（默认使用平台数据目录）
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// 配置文件路径（默认 <data-dir>/config.toml）
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 使用内存存储，不读写偏好文件
    #[arg(long)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 列出所有可用主题
    List,
    /// 输出当前主题（JSON）
    Current,
    /// 切换主题
    Set {
        /// 主题名称，例如 dark
        name: String,
    },
}

/// 执行命令行请求
pub async fn run(cli: Cli) -> AppResult<()> {
    let paths = match &cli.data_dir {
        Some(dir) => AppPaths::with_app_data_dir(dir),
        None => AppPaths::new().map_err(SetupError::Paths)?,
    };

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path).map_err(SetupError::Config)?,
        None => setup::load_config(&paths),
    };
    if cli.memory {
        config.storage.backend = StorageBackend::Memory;
    }

    if let Err(e) = setup::init_logging(&config.log_level) {
        eprintln!("{}", e);
    }
    debug!("应用数据目录: {}", paths.app_data_dir().display());

    let context = AppContext::initialize(config, paths).await;
    let commands = &context.commands;

    match cli.command {
        Command::List => {
            for theme in commands.get_available_themes() {
                let marker = if theme.is_current { "*" } else { " " };
                println!("{} {:<8} {}", marker, theme.id, theme.description);
            }
        }
        Command::Current => {
            let current = commands.get_current_theme();
            println!("{}", serde_json::to_string_pretty(&current)?);
        }
        Command::Set { name } => {
            if !commands.set_theme(&name).await {
                bail!("未知主题: {}", name);
            }
            println!("{}", context.store.current_theme());
        }
    }

    Ok(())
}
