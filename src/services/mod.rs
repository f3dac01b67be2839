//! 服务模块

pub mod recognition;
pub mod timetable;

pub use recognition::{
    OpenAiRecognitionService, RecognitionService, UnconfiguredRecognitionService,
    create_recognition_service,
};
pub use timetable::{TimetableService, TimetableServiceImpl, create_timetable_service};
