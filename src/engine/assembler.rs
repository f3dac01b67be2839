//! 课表组装

use crate::engine::resolver::resolve;
use crate::models::course::CourseRecord;
use crate::models::timetable::{Assembly, Timetable};
use crate::reference::SlotTable;

/// 组装整周课表
///
/// 七天全部初始化为空；依次解析每门课程并放入对应的星期，最后按开始时间
/// 稳定排序。开始时间相同的条目保持课程与时段代码的输入顺序。
pub fn assemble(courses: &[CourseRecord], table: &SlotTable) -> Assembly {
    let mut timetable = Timetable::new();
    let mut warnings = Vec::new();

    for course in courses {
        let resolution = resolve(course, table);
        for resolved in resolution.entries {
            timetable.push(resolved.day, resolved.entry);
        }
        warnings.extend(resolution.warnings);
    }

    timetable.sort_by_start();

    Assembly {
        timetable,
        warnings,
    }
}
