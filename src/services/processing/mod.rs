// 受信値の処理機能
// 意図的に単純な偶奇分類のみ（検証対象はIPC機構であって計算ではない）

use crate::core::Parity;

/// 受信したペイロード値を偶奇で分類
pub fn classify_value(value: u32) -> Parity {
    if value % 2 == 0 {
        Parity::Even
    } else {
        Parity::Odd
    }
}

/// コンシューマ専用ログ1行分の処理レコードを整形
pub fn format_processing_record(stamp: &str, value: u32, parity: Parity) -> String {
    format!("[{stamp}] - Data {value} received and processed as '{parity}'.")
}
