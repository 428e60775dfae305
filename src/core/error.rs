// Custom error types for the producer/consumer pipeline
// パイプライン専用のカスタムエラー型定義

use thiserror::Error;

/// パイプライン固有のエラー型
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("共有ログエラー: {message} - {source}")]
    SharedLogError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("コンシューマログエラー: {path} - {source}")]
    PrivateLogError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("チャンネルエラー: {message}")]
    ChannelError { message: String },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("内部エラー: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl PipelineError {
    /// 共有ログエラーの作成
    pub fn shared_log(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::SharedLogError {
            message: message.into(),
            source,
        }
    }

    /// コンシューマログエラーの作成
    pub fn private_log(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::PrivateLogError {
            path: path.into(),
            source,
        }
    }

    /// チャンネルエラーの作成
    pub fn channel(message: impl Into<String>) -> Self {
        Self::ChannelError {
            message: message.into(),
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// 内部エラーの作成
    pub fn internal(source: anyhow::Error) -> Self {
        Self::InternalError { source }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// チャンネル系のエラーはユニット内部でログ記録に変換されるため回復可能。
    /// ログI/Oと設定のエラーは呼び出し元まで伝播する致命的エラー。
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::SharedLogError { .. } | Self::PrivateLogError { .. } => false,
            Self::ConfigurationError { .. } => false,
            Self::ChannelError { .. } => true,
            Self::TaskError { .. } => false,
            Self::InternalError { .. } => false,
        }
    }
}

// From実装を個別に追加
impl From<anyhow::Error> for PipelineError {
    fn from(error: anyhow::Error) -> Self {
        PipelineError::InternalError { source: error }
    }
}

impl From<tokio::task::JoinError> for PipelineError {
    fn from(error: tokio::task::JoinError) -> Self {
        PipelineError::TaskError { source: error }
    }
}

/// パイプラインの結果型
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
