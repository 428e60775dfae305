// ipc_relay - プロデューサ/コンシューマ間のチャンネル通信デモ
//
// 1本のチャンネルで値のストリームと終端シグナルを転送し、
// 2つのユニットがロック保護された共有ログへ安全に書き込む。

pub mod core;
pub mod engine;
pub mod services;

// 公開API - 主要な型と機能を再エクスポート
pub use crate::core::{
    ConsumerOutcome, ExecutionLog, Parity, PipelineConfig, PipelineError, PipelineResult,
    ProducerOutcome, RunSummary, StreamMessage, ValueSource,
};
pub use crate::engine::{
    create_default_relay_engine, create_quiet_relay_engine, RelayEngine, RelayPipeline,
};
pub use crate::services::{
    classify_value, DefaultPipelineConfig, MemoryExecutionLog, RandomValueSource,
    SequenceValueSource, SharedExecutionLog,
};
