//! 时段解析
//!
//! 在时段表中逐个查找课程的时段代码，生成具体的课表条目。
//! 所有异常都记录为警告，从不中断。

use crate::models::course::CourseRecord;
use crate::models::slot::Weekday;
use crate::models::timetable::{TimetableEntry, Warning};
use crate::reference::SlotTable;

/// 已确定星期的课表条目
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntry {
    pub day: Weekday,
    pub entry: TimetableEntry,
}

/// 单门课程的解析结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolution {
    /// 按时段代码顺序、再按安排顺序排列
    pub entries: Vec<ResolvedEntry>,
    pub warnings: Vec<Warning>,
}

/// 解析一门课程
pub fn resolve(course: &CourseRecord, table: &SlotTable) -> Resolution {
    let mut resolution = Resolution::default();

    let course_name = if course.course_name.is_empty() {
        &course.course_code
    } else {
        &course.course_name
    };

    for token in &course.slots {
        let Some(occurrences) = table.get(token.as_str()) else {
            resolution
                .warnings
                .push(Warning::missing_slot(token.clone(), &course.course_code));
            continue;
        };

        for occurrence in occurrences {
            let Some(day) = occurrence.weekday() else {
                resolution.warnings.push(Warning::unknown_day(
                    token.clone(),
                    &course.course_code,
                    &occurrence.day,
                ));
                continue;
            };

            resolution.entries.push(ResolvedEntry {
                day,
                entry: TimetableEntry {
                    course_code: course.course_code.clone(),
                    course_name: course_name.clone(),
                    venue: course.venue.clone(),
                    slot: token.clone(),
                    start: occurrence.start,
                    end: occurrence.end,
                    class_type: occurrence.class_type.clone(),
                },
            });
        }
    }

    resolution
}
