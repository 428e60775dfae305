// Producer - データ生成・送信ユニット

use crate::core::{ExecutionLog, PipelineResult, ProducerOutcome, StreamMessage, ValueSource};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Producer: ペイロード値を生成してチャンネルへ送信
///
/// 規定数の値を送信した後に終端シグナルを送る。受信側が先に閉じた場合は
/// エラーを共有ログに記録して残りの送信を中断する（リトライもパニックもしない）。
/// どの経路でも最後に送信側エンドポイントを解放し、終了エントリを記録する。
pub fn spawn_producer<S, L>(
    sender: mpsc::Sender<StreamMessage>,
    mut source: S,
    log: Arc<L>,
    value_count: usize,
) -> tokio::task::JoinHandle<PipelineResult<ProducerOutcome>>
where
    S: ValueSource + 'static,
    L: ExecutionLog + 'static,
{
    tokio::spawn(async move {
        log.record("[Producer]: Process started.").await?;

        let mut outcome = ProducerOutcome {
            values_sent: 0,
            channel_broken: false,
        };

        for i in 1..=value_count {
            let value = source.next_value();
            log.record(&format!(
                "[Producer]: Sending value: {value} ({i}/{value_count})"
            ))
            .await?;

            if sender.send(StreamMessage::Value(value)).await.is_err() {
                // 受信側エンドポイントが閉じられた（BrokenChannel）
                log.record("[Producer-ERRO]: The consumer closed the connection prematurely!")
                    .await?;
                outcome.channel_broken = true;
                break;
            }
            outcome.values_sent += 1;

            // 可変な生成レイテンシを模したペーシング
            let delay = source.next_delay();
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        if !outcome.channel_broken {
            log.record("[Producer]: All data sent. Sending termination signal.")
                .await?;
            if sender.send(StreamMessage::EndOfStream).await.is_err() {
                log.record("[Producer-ERRO]: The consumer closed the connection prematurely!")
                    .await?;
                outcome.channel_broken = true;
            }
        }

        // エンドポイントの解放はチャンネル切断を問わず必ず行う
        drop(sender);
        log.record("[Producer]: Connection closed. Finishing.").await?;

        Ok(outcome)
    })
}
