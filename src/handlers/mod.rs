pub mod department;
pub mod employee;

use actix_web::HttpResponse;
use serde_json::json;

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Resource not found" }))
}
