//! 单事件监听适配器：将闭包包装成 [`TransferListener`]，供 `with_on_xx` 使用。

use std::future::Future;

use async_trait::async_trait;

use crate::internal::error::ExistError;
use crate::internal::transfer::traits::TransferListener;

/// 仅实现「数据」的监听适配器。
pub(crate) struct OnDataListenerAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> TransferListener for OnDataListenerAdapter<F>
where
    F: FnMut(&str) + Send + 'static,
{
    fn on_data(&mut self, chunk: &str) {
        (self.0)(chunk);
    }
}

/// 仅实现「结束」的监听适配器。
pub(crate) struct OnEndListenerAdapter<F>(pub(crate) F);

#[async_trait]
impl<F, Fut> TransferListener for OnEndListenerAdapter<F>
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn on_end(&mut self) {
        (self.0)().await
    }
}

/// 仅实现「错误」的监听适配器。
pub(crate) struct OnErrorListenerAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> TransferListener for OnErrorListenerAdapter<F>
where
    F: FnMut(&ExistError) + Send + 'static,
{
    async fn on_error(&mut self, error: &ExistError) {
        (self.0)(error);
    }
}
