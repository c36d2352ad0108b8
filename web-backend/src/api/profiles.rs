use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse, Responder};
use profile_export_core::ExportError;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct ExportQuery {
    pub key: Option<String>,
}

/// 导出响应结构（与前端保持一致）
#[derive(Serialize, Deserialize)]
pub struct ExportResponse {
    pub logs: String,
}

pub fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .route("", web::get().to(list_profiles))
        .route("/export", web::get().to(export_profile))
        .route("/export.csv", web::get().to(download_profile));
}

/// 获取服务端的质量配置列表
pub async fn list_profiles(state: web::Data<AppState>) -> impl Responder {
    match state.exporter.list_profiles().await {
        Ok(profiles) => HttpResponse::Ok().json(profiles),
        Err(e) => {
            tracing::error!("Failed to list quality profiles: {}", e);
            error_response(&e)
        }
    }
}

/// 导出质量配置，CSV 文本放在 `logs` 字段中
pub async fn export_profile(
    state: web::Data<AppState>,
    query: web::Query<ExportQuery>,
) -> impl Responder {
    let key = match profile_key(&query) {
        Some(key) => key,
        None => return missing_key(),
    };

    match state.exporter.export(key).await {
        Ok(logs) => HttpResponse::Ok().json(ExportResponse { logs }),
        Err(e) => {
            tracing::error!("Failed to export quality profile {}: {}", key, e);
            error_response(&e)
        }
    }
}

/// 以附件形式下载 `<key>.csv`
pub async fn download_profile(
    state: web::Data<AppState>,
    query: web::Query<ExportQuery>,
) -> impl Responder {
    let key = match profile_key(&query) {
        Some(key) => key,
        None => return missing_key(),
    };

    match state.exporter.export(key).await {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(format!("{}.csv", key))],
            })
            .body(csv),
        Err(e) => {
            tracing::error!("Failed to export quality profile {}: {}", key, e);
            error_response(&e)
        }
    }
}

fn profile_key(query: &ExportQuery) -> Option<&str> {
    query.key.as_deref().filter(|key| !key.is_empty())
}

fn missing_key() -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({
        "error": "Key must be filled out."
    }))
}

fn error_response(e: &ExportError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        ExportError::Rejected(_) => HttpResponse::BadRequest().json(body),
        ExportError::MalformedResponse { .. } | ExportError::Transport { .. } => {
            HttpResponse::BadGateway().json(body)
        }
        ExportError::Config(_) => HttpResponse::InternalServerError().json(body),
    }
}
