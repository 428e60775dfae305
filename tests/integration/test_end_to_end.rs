// エンドツーエンド統合テスト（ハッピーパス）

use crate::fixtures::{extract_processed_values, read_lines, FIXED_VALUES};
use ipc_relay::{
    engine::create_quiet_relay_engine,
    services::{DefaultPipelineConfig, RandomValueSource, SequenceValueSource},
};
use tempfile::TempDir;

fn temp_config(temp_dir: &TempDir) -> DefaultPipelineConfig {
    DefaultPipelineConfig::default()
        .with_shared_log_path(temp_dir.path().join("execution_log.txt"))
        .with_consumer_log_path(temp_dir.path().join("consumer_log.txt"))
}

#[tokio::test]
async fn test_fixed_sequence_run_produces_complete_consumer_log() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_config(&temp_dir);

    let source = SequenceValueSource::new(FIXED_VALUES.to_vec());
    let engine = create_quiet_relay_engine(source, config).await.unwrap();
    let summary = engine.run().await.unwrap();

    assert_eq!(summary.values_sent, 12);
    assert_eq!(summary.values_received, 12);
    assert!(summary.clean_shutdown);

    // コンシューマログ：ヘッダー + 空行 + 12レコード + 終了行
    let lines = read_lines(&temp_dir.path().join("consumer_log.txt"));
    assert!(lines[0].starts_with("### Consumer Execution Log - "));
    assert_eq!(lines[1], "");
    assert_eq!(lines.len(), 15);
    assert!(lines[14].ends_with("- Termination signal received. Closing."));

    // 12レコードが送信順で記録されている（重複・欠落・並べ替えなし）
    let processed = extract_processed_values(&lines);
    assert_eq!(processed, FIXED_VALUES.to_vec());

    // 偶奇分類がレコードに正しく反映されている
    for (line, value) in lines[2..14].iter().zip(FIXED_VALUES) {
        let expected = if value % 2 == 0 { "'Even'" } else { "'Odd'" };
        assert!(
            line.contains(expected),
            "値{value}の分類が不正: {line}"
        );
    }
}

#[tokio::test]
async fn test_shared_log_contains_one_lifecycle_entry_per_unit() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_config(&temp_dir);

    let source = SequenceValueSource::new(FIXED_VALUES.to_vec());
    let engine = create_quiet_relay_engine(source, config).await.unwrap();
    engine.run().await.unwrap();

    let lines = read_lines(&temp_dir.path().join("execution_log.txt"));

    let count = |needle: &str| lines.iter().filter(|l| l.contains(needle)).count();

    // 各ユニットの開始・終了エントリがちょうど1つずつ
    assert_eq!(count("[Producer]: Process started."), 1);
    assert_eq!(count("[Consumer]: Process started. Waiting for data..."), 1);
    assert_eq!(count("[Producer]: Connection closed. Finishing."), 1);
    assert_eq!(count("[Consumer]: Finishing."), 1);

    // 12件の送信と12件の受信、終端シグナルが1回
    assert_eq!(count("[Producer]: Sending value: "), 12);
    assert_eq!(count("[Consumer]: Data received: "), 12);
    assert_eq!(count("[Producer]: All data sent. Sending termination signal."), 1);
    assert_eq!(count("[Consumer]: Termination signal received."), 1);

    // エラーエントリは一切ない
    assert_eq!(count("ERRO"), 0);
}

#[tokio::test]
async fn test_shared_log_lines_are_well_formed() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_config(&temp_dir);

    let source = SequenceValueSource::new(FIXED_VALUES.to_vec());
    let engine = create_quiet_relay_engine(source, config).await.unwrap();
    engine.run().await.unwrap();

    let lines = read_lines(&temp_dir.path().join("execution_log.txt"));

    // ヘッダーの後の全行がタグ形式に従う（行単位の原子性の観測）
    assert!(lines[0].starts_with("### Execution Log - "));
    for line in lines.iter().skip(2) {
        assert!(
            line.starts_with("[Producer]") || line.starts_with("[Consumer]"),
            "タグ形式に合わない行: {line}"
        );
    }
}

#[tokio::test]
async fn test_random_run_delivers_values_in_valid_range() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_config(&temp_dir);

    // シード付き乱数生成・遅延なしで高速に実行
    let source = RandomValueSource::seeded(20250820).with_delay_millis(0, 0);
    let engine = create_quiet_relay_engine(source, config).await.unwrap();
    let summary = engine.run().await.unwrap();

    assert_eq!(summary.values_received, 12);
    assert!(summary.clean_shutdown);

    let lines = read_lines(&temp_dir.path().join("consumer_log.txt"));
    let processed = extract_processed_values(&lines);
    assert_eq!(processed.len(), 12);
    for value in processed {
        assert!((1..=100).contains(&value), "範囲外の値が配送された: {value}");
    }
}
