// Consumer - データ受信・処理ユニット

use crate::core::{ConsumerOutcome, ExecutionLog, PipelineError, PipelineResult, StreamMessage};
use crate::services::logging::time_stamp;
use crate::services::processing::{classify_value, format_processing_record};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::sync::mpsc;

/// Consumer: チャンネルから値を受信して偶奇分類し、専用ログへ記録
///
/// 終端シグナルで正常にループを抜ける。シグナルより先に送信側が閉じた場合は
/// エラーを共有ログに記録してループを抜ける（オーケストレータへは伝播しない）。
/// 専用ログは毎イテレーションでフラッシュし、次の受信前にレコードを永続化する。
/// 最終エントリは専用ログのI/O失敗を含むどの経路でも必ず記録する。
pub fn spawn_consumer<L>(
    mut receiver: mpsc::Receiver<StreamMessage>,
    log: Arc<L>,
    consumer_log_path: PathBuf,
) -> tokio::task::JoinHandle<PipelineResult<ConsumerOutcome>>
where
    L: ExecutionLog + 'static,
{
    tokio::spawn(async move {
        log.record("[Consumer]: Process started. Waiting for data...")
            .await?;

        // 専用ログのI/Oが失敗しても最終エントリを飛ばさないよう、結果を捕捉する
        let result = run_receive_loop(&mut receiver, log.as_ref(), &consumer_log_path).await;

        log.record("[Consumer]: Finishing.").await?;
        result
    })
}

/// 専用ログの初期化と受信ループ本体
async fn run_receive_loop<L>(
    receiver: &mut mpsc::Receiver<StreamMessage>,
    log: &L,
    consumer_log_path: &Path,
) -> PipelineResult<ConsumerOutcome>
where
    L: ExecutionLog,
{
    let path_display = consumer_log_path.to_string_lossy().to_string();

    // コンシューマ専用ログを新規作成（truncate）してヘッダーを書き込む
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(consumer_log_path)
        .await
        .map_err(|e| PipelineError::private_log(path_display.clone(), e))?;
    let mut private_log = BufWriter::new(file);

    let header = format!("### Consumer Execution Log - {} ###\n\n", time_stamp());
    private_log
        .write_all(header.as_bytes())
        .await
        .map_err(|e| PipelineError::private_log(path_display.clone(), e))?;
    private_log
        .flush()
        .await
        .map_err(|e| PipelineError::private_log(path_display.clone(), e))?;

    let mut outcome = ConsumerOutcome {
        values_received: 0,
        end_signal_received: false,
    };

    loop {
        match receiver.recv().await {
            None => {
                // 終端シグナルを受け取る前に送信側が閉じられた（ChannelClosed）
                log.record("[Consumer-ERRO]: The communication channel was closed unexpectedly!")
                    .await?;
                break;
            }
            Some(StreamMessage::EndOfStream) => {
                log.record("[Consumer]: Termination signal received.").await?;
                let closing =
                    format!("[{}] - Termination signal received. Closing.\n", time_stamp());
                private_log
                    .write_all(closing.as_bytes())
                    .await
                    .map_err(|e| PipelineError::private_log(path_display.clone(), e))?;
                private_log
                    .flush()
                    .await
                    .map_err(|e| PipelineError::private_log(path_display.clone(), e))?;
                outcome.end_signal_received = true;
                break;
            }
            Some(StreamMessage::Value(value)) => {
                log.record(&format!("[Consumer]: Data received: {value}"))
                    .await?;

                let parity = classify_value(value);
                let record = format_processing_record(&time_stamp(), value, parity);
                private_log
                    .write_all(record.as_bytes())
                    .await
                    .map_err(|e| PipelineError::private_log(path_display.clone(), e))?;
                private_log
                    .write_all(b"\n")
                    .await
                    .map_err(|e| PipelineError::private_log(path_display.clone(), e))?;
                // 次の受信前にレコードを確実に書き出す
                private_log
                    .flush()
                    .await
                    .map_err(|e| PipelineError::private_log(path_display.clone(), e))?;

                outcome.values_received += 1;
            }
        }
    }

    Ok(outcome)
}
