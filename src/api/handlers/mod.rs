//! Handlers 模块
//!
//! HTTP 请求处理程序。

pub mod timetable_handler;

pub use timetable_handler::*;
