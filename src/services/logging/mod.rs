// 共有実行ログ機能
// ロック保護された追記とコンソールへのミラーリング

pub mod implementations;

// 公開API
pub use implementations::{time_stamp, MemoryExecutionLog, SharedExecutionLog};
