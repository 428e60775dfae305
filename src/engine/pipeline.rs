// Pipeline - Producer-Consumer パイプライン
// チャンネル構築と両ユニットのオーケストレーション

use super::{consumer::spawn_consumer, producer::spawn_producer};
use crate::core::{
    ExecutionLog, PipelineConfig, PipelineError, PipelineResult, RunSummary, StreamMessage,
    ValueSource,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// 責任が明確に分離されたパイプライン
///
/// 共有ログを所有し、実行ごとにチャンネルを生成して両ユニットへ
/// エンドポイントを1つずつ引き渡す。エンドポイントの共有は発生しない。
pub struct RelayPipeline<L> {
    log: Arc<L>,
}

impl<L> RelayPipeline<L>
where
    L: ExecutionLog + 'static,
{
    /// 新しいパイプラインを作成
    pub fn new(log: Arc<L>) -> Self {
        Self { log }
    }

    /// ストリームを1本実行
    pub async fn execute<S, C>(&self, source: S, config: &C) -> PipelineResult<RunSummary>
    where
        S: ValueSource + 'static,
        C: PipelineConfig,
    {
        let start_time = Instant::now();

        // mpsc::channelは容量0でパニックするため、公開APIとしてここでも検証する
        let buffer_size = config.channel_buffer_size();
        if buffer_size == 0 {
            return Err(PipelineError::configuration(
                "チャンネルバッファサイズは1以上である必要があります",
            ));
        }

        // Producer-Consumerチャンネル構築
        let (sender, receiver) = mpsc::channel::<StreamMessage>(buffer_size);

        // Producer起動
        let producer_handle =
            spawn_producer(sender, source, Arc::clone(&self.log), config.value_count());

        // Consumer起動
        let consumer_handle =
            spawn_consumer(receiver, Arc::clone(&self.log), config.consumer_log_path());

        // 両ユニットのjoinは必ず完了させる（片方の異常終了で待機を打ち切らない）
        let producer_join = producer_handle.await;
        let consumer_join = consumer_handle.await;

        let producer_outcome = producer_join??;
        let consumer_outcome = consumer_join??;

        Ok(RunSummary {
            values_sent: producer_outcome.values_sent,
            values_received: consumer_outcome.values_received,
            clean_shutdown: !producer_outcome.channel_broken
                && consumer_outcome.end_signal_received,
            total_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }
}
