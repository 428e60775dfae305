// 高レベル公開API
// RelayEngineを簡単に使用できるようにするための便利な関数

use super::RelayEngine;
use crate::core::{PipelineConfig, PipelineResult, ValueSource};
use crate::services::{DefaultPipelineConfig, RandomValueSource, SharedExecutionLog};

/// デフォルト構成のエンジンを作成
///
/// 共有ログファイルをここで作成（truncate + ヘッダー書き込み）するため、
/// ファイルを開けない場合は起動時の致命的エラーとして返す。
pub async fn create_default_relay_engine(
    config: DefaultPipelineConfig,
) -> PipelineResult<RelayEngine<RandomValueSource, DefaultPipelineConfig, SharedExecutionLog>> {
    let log = SharedExecutionLog::create(config.shared_log_path()).await?;
    Ok(RelayEngine::new(RandomValueSource::new(), config, log))
}

/// コンソールミラーなしのエンジンを作成（テスト・バックグラウンド実行用）
///
/// 値生成器を注入できるため、固定列での決定的な実行にも使える。
pub async fn create_quiet_relay_engine<S>(
    source: S,
    config: DefaultPipelineConfig,
) -> PipelineResult<RelayEngine<S, DefaultPipelineConfig, SharedExecutionLog>>
where
    S: ValueSource + 'static,
{
    let log = SharedExecutionLog::create_quiet(config.shared_log_path()).await?;
    Ok(RelayEngine::new(source, config, log))
}
