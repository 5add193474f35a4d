use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use serde_json::json;

use crate::forms::dashboard::DashboardQuery;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::dashboard as dashboard_service;
use crate::services::snapshot::SnapshotCache;

#[get("/v1/dashboard")]
/// Return the dashboard report for the filter in the query string as JSON.
///
/// Amounts are reported in cents. Invalid filters receive `400 Bad Request`
/// with an `error` message.
pub async fn api_v1_dashboard(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    cache: web::Data<SnapshotCache>,
) -> impl Responder {
    let query = match DashboardQuery::from_query_string(req.query_string()) {
        Ok(query) => query,
        Err(err) => {
            return HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
        }
    };

    match dashboard_service::load_dashboard(cache.get_ref(), repo.get_ref(), query) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(err) => {
            log::error!("Failed to build dashboard: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
