/*!
 * 错误处理模块
 *
 * 应用层基于 anyhow 的统一结果类型，通过 context 提供错误信息。
 * 模块内部的可恢复错误使用各自的 thiserror 类型。
 */

use anyhow::Result as AnyhowResult;

/// 统一的应用程序结果类型
pub type AppResult<T> = AnyhowResult<T>;

/// 统一的应用程序错误类型
pub type AppError = anyhow::Error;
