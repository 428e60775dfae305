// RelayEngine - 完全依存性注入によるパイプラインエンジン
// 全ての依存関係がコンストラクタで注入される真のDIパターン実装

use super::pipeline::RelayPipeline;
use crate::core::{
    ExecutionLog, PipelineConfig, PipelineError, PipelineResult, RunSummary, ValueSource,
};
use std::sync::Arc;

/// 設計上の最小送信数
///
/// このデモの要件として、プロデューサは最低10件のデータを送信する。
const MIN_VALUE_COUNT: usize = 10;

/// 完全依存性注入によるパイプラインエンジン
///
/// 値生成・設定・共有ログをコンストラクタで注入する。
/// 共有ログは両ユニットで共有されるためArcで管理する。
pub struct RelayEngine<S, C, L> {
    source: S,
    config: Arc<C>,
    log: Arc<L>,
}

impl<S, C, L> RelayEngine<S, C, L>
where
    S: ValueSource + 'static,
    C: PipelineConfig,
    L: ExecutionLog + 'static,
{
    /// 新しいエンジンを作成
    ///
    /// 全ての依存関係をコンストラクタで注入する（Constructor Injection）
    pub fn new(source: S, config: C, log: L) -> Self {
        Self {
            source,
            config: Arc::new(config),
            log: Arc::new(log),
        }
    }

    /// パイプラインを1回実行
    ///
    /// 設定検証の後、チャンネル構築から両ユニットの完了待機までを行う。
    /// 値生成器はプロデューサユニットへ移動するため、実行はエンジンを消費する。
    pub async fn run(self) -> PipelineResult<RunSummary> {
        self.validate_config()?;

        let pipeline = RelayPipeline::new(Arc::clone(&self.log));
        pipeline.execute(self.source, self.config.as_ref()).await
    }

    fn validate_config(&self) -> PipelineResult<()> {
        if self.config.value_count() < MIN_VALUE_COUNT {
            return Err(PipelineError::configuration(format!(
                "送信数は{MIN_VALUE_COUNT}以上である必要があります"
            )));
        }

        if self.config.channel_buffer_size() == 0 {
            return Err(PipelineError::configuration(
                "チャンネルバッファサイズは1以上である必要があります",
            ));
        }

        Ok(())
    }

    /// 設定への参照を取得（読み取り専用アクセス）
    pub fn config(&self) -> &C {
        &self.config
    }

    /// 共有ログへの参照を取得
    pub fn log(&self) -> &L {
        &self.log
    }
}
