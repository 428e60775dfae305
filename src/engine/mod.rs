// エンジン層 - ユニットの起動とオーケストレーション
// サービス層を組み合わせて高レベルな処理を提供

pub mod api;
pub mod consumer;
mod pipeline;
pub mod producer;
pub mod relay_engine;

// 公開API - 主要エンジンクラス
pub use api::{create_default_relay_engine, create_quiet_relay_engine};
pub use pipeline::RelayPipeline;
pub use relay_engine::RelayEngine;
