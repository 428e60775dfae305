// パイプラインで使用するデータ型定義

use std::fmt;

/// チャンネルを流れるメッセージ
///
/// 終端シグナルを専用バリアントとして持つタグ付き型。
/// ペイロード値域と衝突する特別値でのマーカー表現は採用しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamMessage {
    /// 生成されたペイロード値（1〜100）
    Value(u32),
    /// ストリーム終端シグナル
    EndOfStream,
}

/// 偶奇の分類結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// 分類結果の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Even => "Even",
            Self::Odd => "Odd",
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// プロデューサユニットの実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerOutcome {
    /// チャンネルへ送信できたペイロード値の数（終端シグナルは含まない）
    pub values_sent: usize,
    /// 受信側が先に閉じたため送信を中断したかどうか
    pub channel_broken: bool,
}

/// コンシューマユニットの実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerOutcome {
    /// 受信して処理したペイロード値の数
    pub values_received: usize,
    /// 終端シグナルを受信して正常終了したかどうか
    pub end_signal_received: bool,
}

/// 実行全体のサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub values_sent: usize,
    pub values_received: usize,
    /// 終端シグナルが送信され、受信側でも観測された場合にtrue
    pub clean_shutdown: bool,
    pub total_time_ms: u64,
}
