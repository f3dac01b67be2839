use axum::{
    Json,
    extract::{Multipart, Path, State, multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    api::{app_state::AppState, dto::timetable_dto::*},
    error::AppError,
};

/// 上传图片的表单字段名
pub const IMAGE_FIELD: &str = "image";

const DEFAULT_MIME_TYPE: &str = "image/jpeg";

fn multipart_error(err: MultipartError, max: usize) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge { max }
    } else {
        AppError::Validation(err.body_text())
    }
}

pub async fn upload_timetable(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let request_id = Uuid::new_v4();
    let max = state.max_upload_size;

    let mut image = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            debug!(%request_id, "Skipping multipart field {:?}", field.name());
            continue;
        }

        let mime_type = field
            .content_type()
            .filter(|mime| mime.starts_with("image/"))
            .unwrap_or(DEFAULT_MIME_TYPE)
            .to_string();
        let data = field.bytes().await.map_err(|e| multipart_error(e, max))?;
        image = Some((data, mime_type));
        break;
    }

    let Some((data, mime_type)) = image.filter(|(data, _)| !data.is_empty()) else {
        warn!(%request_id, "Upload called with no file");
        return Err(AppError::Validation("No file uploaded".to_string()));
    };

    if data.len() > max {
        return Err(AppError::PayloadTooLarge { max });
    }

    info!(%request_id, bytes = data.len(), %mime_type, "Timetable image uploaded");

    let assembly = state
        .timetable_service
        .generate_from_image(&data, &mime_type)
        .await
        .inspect_err(|e| warn!(%request_id, "Upload failed: {}", e))?;

    Ok(Json(TimetableResponse::from(assembly)))
}

pub async fn generate_timetable(
    State(state): State<AppState>,
    payload: Result<Json<GenerateTimetableRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload?;
    let rows = request.into_rows();
    debug!("Generating timetable from {} rows", rows.len());

    let assembly = state.timetable_service.generate_from_rows(rows)?;

    Ok(Json(TimetableResponse::from(assembly)))
}

pub async fn get_slot(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let sessions = state
        .timetable_service
        .lookup_slot(&token)
        .ok_or_else(|| AppError::NotFound(format!("Slot not found: {}", token)))?;

    Ok(Json(SlotLookupResponse {
        slot: token.into(),
        sessions,
    }))
}
