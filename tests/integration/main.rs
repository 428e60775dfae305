// 統合テストのエントリポイント

mod fixtures;
mod test_end_to_end;
