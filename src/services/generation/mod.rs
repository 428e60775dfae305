// ペイロード値生成機能
// 乱数ベースの本番実装と固定列のテスト用実装

pub mod implementations;

// 公開API
pub use implementations::{RandomValueSource, SequenceValueSource};
