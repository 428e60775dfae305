// 共有実行ログの具象実装

use crate::core::{ExecutionLog, PipelineError, PipelineResult};
use async_trait::async_trait;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::sync::Mutex as AsyncMutex;

/// 現在時刻をHH:MM:SS形式で取得
pub fn time_stamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// ファイルとコンソールに書き込む共有実行ログ実装
///
/// 両ユニットから共有されるため、内部のロックで行単位の原子性を保証する。
/// ロックは書き込みとフラッシュの間だけ保持し、チャンネル操作をまたがない。
#[derive(Clone)]
pub struct SharedExecutionLog {
    path: String,
    writer: Arc<AsyncMutex<BufWriter<File>>>,
    mirror_to_console: bool,
}

impl SharedExecutionLog {
    /// ログファイルを新規作成（truncate）してヘッダーを書き込む
    ///
    /// 起動時にファイルを開けない場合は致命的エラーとして伝播する。
    pub async fn create<P: AsRef<Path>>(path: P) -> PipelineResult<Self> {
        Self::build(path, true).await
    }

    /// コンソールミラーなしで作成（テスト用）
    pub async fn create_quiet<P: AsRef<Path>>(path: P) -> PipelineResult<Self> {
        Self::build(path, false).await
    }

    async fn build<P: AsRef<Path>>(path: P, mirror_to_console: bool) -> PipelineResult<Self> {
        let path_string = path.as_ref().to_string_lossy().to_string();

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path.as_ref())
            .await
            .map_err(|e| PipelineError::shared_log(path_string.clone(), e))?;

        let mut writer = BufWriter::new(file);
        let header = format!("### Execution Log - {} ###\n\n", time_stamp());
        writer
            .write_all(header.as_bytes())
            .await
            .map_err(|e| PipelineError::shared_log(path_string.clone(), e))?;
        writer
            .flush()
            .await
            .map_err(|e| PipelineError::shared_log(path_string.clone(), e))?;

        Ok(Self {
            path: path_string,
            writer: Arc::new(AsyncMutex::new(writer)),
            mirror_to_console,
        })
    }
}

#[async_trait]
impl ExecutionLog for SharedExecutionLog {
    async fn record(&self, message: &str) -> PipelineResult<()> {
        // ロック獲得から解放までが1行分の臨界区間
        let mut writer = self.writer.lock().await;

        writer
            .write_all(message.as_bytes())
            .await
            .map_err(|e| PipelineError::shared_log(self.path.clone(), e))?;
        writer
            .write_all(b"\n")
            .await
            .map_err(|e| PipelineError::shared_log(self.path.clone(), e))?;
        writer
            .flush()
            .await
            .map_err(|e| PipelineError::shared_log(self.path.clone(), e))?;

        // リアルタイム観測用のミラー出力
        if self.mirror_to_console {
            println!("{message}");
        }

        Ok(())
    }
}

/// メモリ内保存のログ実装（テスト用および開発用）
#[derive(Debug, Clone, Default)]
pub struct MemoryExecutionLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryExecutionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// テスト用：記録された全行を取得
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    /// テスト用：指定した文字列を含む行数を取得
    pub fn count_matching(&self, needle: &str) -> usize {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }

    /// テスト用：記録行数を取得
    pub fn recorded_count(&self) -> usize {
        self.lines.lock().unwrap().len()
    }
}

#[async_trait]
impl ExecutionLog for MemoryExecutionLog {
    async fn record(&self, message: &str) -> PipelineResult<()> {
        self.lines.lock().unwrap().push(message.to_string());
        Ok(())
    }
}
