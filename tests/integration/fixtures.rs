// 統合テスト用の共通ヘルパー

use std::path::Path;

/// 決定的なシナリオ用の固定12値（1〜100の範囲内、偶奇混在）
pub const FIXED_VALUES: [u32; 12] = [3, 14, 15, 92, 65, 35, 89, 79, 1, 2, 100, 46];

/// ファイルを行のベクタとして読み込む
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("ログファイルを読めません {}: {e}", path.display()))
        .lines()
        .map(|line| line.to_string())
        .collect()
}

/// コンシューマ専用ログから処理済みの値を送信順に抽出
pub fn extract_processed_values(lines: &[String]) -> Vec<u32> {
    lines
        .iter()
        .filter(|line| line.contains("received and processed"))
        .map(|line| {
            let rest = line.split("Data ").nth(1).unwrap();
            rest.split(' ').next().unwrap().parse().unwrap()
        })
        .collect()
}
