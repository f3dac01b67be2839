//! 核心数据模型模块
//!
//! 定义时段、课程与课表的数据结构。

pub mod course;
pub mod slot;
pub mod timetable;

pub use course::*;
pub use slot::*;
pub use timetable::*;
