// 設定管理の具象実装

use crate::core::PipelineConfig;
use std::path::PathBuf;

/// デフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultPipelineConfig {
    value_count: usize,
    buffer_size: usize,
    shared_log_path: PathBuf,
    consumer_log_path: PathBuf,
}

impl DefaultPipelineConfig {
    pub fn with_value_count(mut self, value_count: usize) -> Self {
        self.value_count = value_count;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_shared_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.shared_log_path = path.into();
        self
    }

    pub fn with_consumer_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.consumer_log_path = path.into();
        self
    }
}

impl Default for DefaultPipelineConfig {
    fn default() -> Self {
        Self {
            value_count: 12,
            buffer_size: 8,
            shared_log_path: PathBuf::from("execution_log.txt"),
            consumer_log_path: PathBuf::from("consumer_log.txt"),
        }
    }
}

impl PipelineConfig for DefaultPipelineConfig {
    fn value_count(&self) -> usize {
        self.value_count
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }

    fn shared_log_path(&self) -> PathBuf {
        self.shared_log_path.clone()
    }

    fn consumer_log_path(&self) -> PathBuf {
        self.consumer_log_path.clone()
    }
}
