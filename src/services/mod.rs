// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod generation;
pub mod logging;
pub mod processing;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::DefaultPipelineConfig;
pub use generation::{RandomValueSource, SequenceValueSource};
pub use logging::{time_stamp, MemoryExecutionLog, SharedExecutionLog};
pub use processing::{classify_value, format_processing_record};
