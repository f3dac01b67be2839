//! Vitwise - 课表时段解析服务
//!
//! 将识别服务从课表照片中提取的课程行，按标准时段表解析为按星期排列的
//! 每周课表，并把无法解析的数据作为警告一并返回。

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod observability;
pub mod reference;
pub mod security;
pub mod services;
