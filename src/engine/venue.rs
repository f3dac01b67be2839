//! 教室提取
//!
//! 识别服务有时把时段与教室合并为 `"<slots> - <venue>"`。这里是唯一
//! 从合并字符串中拆出教室的地方；切分器只负责时段部分。

use crate::models::course::RawExtractedRow;

/// 第一个 `-` 之后的教室文本，去除首尾空白；不存在或为空时返回 `None`
pub fn extract_venue(raw_slot_string: &str) -> Option<String> {
    let (_, venue) = raw_slot_string.split_once('-')?;
    let venue = venue.trim();
    (!venue.is_empty()).then(|| venue.to_string())
}

/// 行自身的教室字段为空时，从时段字符串中补全
///
/// 已有教室的行保持不变。返回是否发生了补全。
pub fn fill_missing_venue(row: &mut RawExtractedRow) -> bool {
    let has_venue = row.venue.as_deref().is_some_and(|v| !v.trim().is_empty());
    if has_venue {
        return false;
    }

    match extract_venue(row.slot_string()) {
        Some(venue) => {
            row.venue = Some(venue);
            true
        }
        None => false,
    }
}
