use anyhow::Result;

use ipc_relay::{
    engine::create_default_relay_engine, services::DefaultPipelineConfig, PipelineConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    println!("🚀 プロデューサ/コンシューマ IPCデモ");

    // 1. 設定構築（ログファイルはカレントディレクトリに作成）
    let config = DefaultPipelineConfig::default();
    let shared_log_path = config.shared_log_path();
    let consumer_log_path = config.consumer_log_path();

    println!("📄 共有ログ: {}", shared_log_path.display());
    println!("📄 コンシューマログ: {}", consumer_log_path.display());

    // 2. エンジン構築（共有ログの初期化失敗は起動時の致命的エラー）
    let engine = create_default_relay_engine(config).await?;

    println!("⚙️  設定:");
    println!("   - 送信データ数: {}", engine.config().value_count());
    println!(
        "   - チャンネルバッファ: {}",
        engine.config().channel_buffer_size()
    );
    println!();

    // 3. パイプライン実行
    match engine.run().await {
        Ok(summary) => {
            println!("\n✅ 実行完了!");
            println!("📊 実行結果:");
            println!("   - 送信データ数: {}", summary.values_sent);
            println!("   - 受信データ数: {}", summary.values_received);
            println!("   - 総実行時間: {:.2}秒", summary.total_time_ms as f64 / 1000.0);

            if !summary.clean_shutdown {
                println!("⚠️  ストリームは途中で切断されました");
            }

            println!(
                "\n実行の詳細は '{}' と '{}' を確認してください。\n",
                shared_log_path.display(),
                consumer_log_path.display()
            );
        }
        Err(error) => {
            eprintln!("❌ エラー: {error}");
            std::process::exit(1);
        }
    }

    Ok(())
}
