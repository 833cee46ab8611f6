use std::future::Future;

use async_trait::async_trait;

use crate::internal::error::ExistError;
use crate::internal::transfer::traits::TransferListener;

use super::listener_adapters::{
    OnDataListenerAdapter, OnEndListenerAdapter, OnErrorListenerAdapter,
};

/// 监听器容器：按添加顺序依次分发同一个事件。
#[derive(Default)]
pub struct TransferListeners {
    listeners: Vec<Box<dyn TransferListener>>,
}

impl TransferListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一个完整的监听器；可多次调用。
    pub fn add(&mut self, listener: impl TransferListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn with_listener(mut self, listener: impl TransferListener + 'static) -> Self {
        self.add(listener);
        self
    }

    pub fn with_on_data<F>(self, f: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.with_listener(OnDataListenerAdapter(f))
    }

    pub fn with_on_end<F, Fut>(self, f: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.with_listener(OnEndListenerAdapter(f))
    }

    pub fn with_on_error<F>(self, f: F) -> Self
    where
        F: FnMut(&ExistError) + Send + 'static,
    {
        self.with_listener(OnErrorListenerAdapter(f))
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[async_trait]
impl TransferListener for TransferListeners {
    fn on_data(&mut self, chunk: &str) {
        for l in self.listeners.iter_mut() {
            l.on_data(chunk);
        }
    }

    async fn on_end(&mut self) {
        for l in self.listeners.iter_mut() {
            l.on_end().await;
        }
    }

    async fn on_error(&mut self, error: &ExistError) {
        for l in self.listeners.iter_mut() {
            l.on_error(error).await;
        }
    }
}
