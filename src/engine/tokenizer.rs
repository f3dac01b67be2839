//! 时段字符串切分

use crate::models::slot::SlotToken;

/// 表示“无时段”的占位值
pub const NIL_SENTINEL: &str = "NIL";

/// 将原始时段字符串切分为时段代码
///
/// - 空串或 `NIL` 返回空列表
/// - 含 `-` 时只切分第一个 `-` 之前的部分（其后为教室）
/// - 先删除全部空白，再按 `+` 切分，丢弃空片段
///
/// 保持原有顺序，不去重、不改大小写。
pub fn tokenize(raw_slot_string: &str) -> Vec<SlotToken> {
    if raw_slot_string.is_empty() || raw_slot_string == NIL_SENTINEL {
        return Vec::new();
    }

    let slots_part = slots_part(raw_slot_string);
    let compact: String = slots_part.chars().filter(|c| !c.is_whitespace()).collect();

    compact
        .split('+')
        .filter(|token| !token.is_empty())
        .map(SlotToken::from)
        .collect()
}

/// `-` 之前的部分；不含 `-` 时返回整个字符串
pub(crate) fn slots_part(raw_slot_string: &str) -> &str {
    raw_slot_string
        .split_once('-')
        .map_or(raw_slot_string, |(slots, _)| slots)
}
