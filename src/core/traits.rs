// パイプラインのトレイト定義
// 全ての抽象化インターフェースを定義

use super::error::PipelineResult;
use async_trait::async_trait;
use mockall::automock;
use std::path::PathBuf;
use std::time::Duration;

/// パイプラインの設定を抽象化するトレイト
#[automock]
pub trait PipelineConfig: Send + Sync {
    /// プロデューサが送信するペイロード値の数を取得
    fn value_count(&self) -> usize;

    /// チャンネルバッファサイズを取得
    fn channel_buffer_size(&self) -> usize;

    /// 共有実行ログファイルのパスを取得
    fn shared_log_path(&self) -> PathBuf;

    /// コンシューマ専用ログファイルのパスを取得
    fn consumer_log_path(&self) -> PathBuf;
}

// PipelineConfig for Box<dyn PipelineConfig>
impl PipelineConfig for Box<dyn PipelineConfig> {
    fn value_count(&self) -> usize {
        self.as_ref().value_count()
    }

    fn channel_buffer_size(&self) -> usize {
        self.as_ref().channel_buffer_size()
    }

    fn shared_log_path(&self) -> PathBuf {
        self.as_ref().shared_log_path()
    }

    fn consumer_log_path(&self) -> PathBuf {
        self.as_ref().consumer_log_path()
    }
}

/// 同期化された共有ログの抽象化トレイト
///
/// 複数ユニットからの同時呼び出しに対して行単位の原子性を保証する。
/// 記録の失敗は呼び出したユニットにとって致命的であり、握り潰さない。
#[automock]
#[async_trait]
pub trait ExecutionLog: Send + Sync {
    /// 1行のメッセージをログに追記し、観測用ストリームへミラーする
    async fn record(&self, message: &str) -> PipelineResult<()>;
}

// ExecutionLog for Box<dyn ExecutionLog>
#[async_trait]
impl ExecutionLog for Box<dyn ExecutionLog> {
    async fn record(&self, message: &str) -> PipelineResult<()> {
        self.as_ref().record(message).await
    }
}

/// ペイロード値の生成を抽象化するトレイト
///
/// 乱数生成は外部コラボレータとして扱い、テストでは固定列に差し替える。
#[automock]
pub trait ValueSource: Send {
    /// 次のペイロード値を生成（1〜100）
    fn next_value(&mut self) -> u32;

    /// 次の送信までのペーシング遅延を取得
    fn next_delay(&mut self) -> Duration;
}
