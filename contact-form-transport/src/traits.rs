use async_trait::async_trait;

use crate::error::Result;
use crate::payload::FormPayload;

/// 表单提交通道 Trait
///
/// 每次调用 `send` 恰好对应一次对外请求，不做重试。
#[async_trait]
pub trait FormTransport: Send + Sync {
    /// 通道标识符（用于日志）
    fn id(&self) -> &'static str;

    /// 提交一次表单
    ///
    /// 对端正常完成即返回 `Ok(())`；响应体不做解析。
    async fn send(&self, payload: &FormPayload) -> Result<()>;
}
