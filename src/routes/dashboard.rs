use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use pushkind_common::routes::{redirect, render_template};
use serde::Serialize;
use tera::{Context, Tera};

use crate::forms::dashboard::DashboardQuery;
use crate::repository::DieselRepository;
use crate::services::dashboard::{self as dashboard_service, DashboardView};
use crate::services::ServiceError;
use crate::services::snapshot::SnapshotCache;

/// Flash message prepared for the template.
#[derive(Serialize)]
struct Alert {
    level: &'static str,
    message: String,
}

fn alerts(flash_messages: &IncomingFlashMessages) -> Vec<Alert> {
    flash_messages
        .iter()
        .map(|message| Alert {
            level: match message.level() {
                Level::Error => "danger",
                Level::Warning => "warning",
                Level::Success => "success",
                _ => "info",
            },
            message: message.content().to_string(),
        })
        .collect()
}

#[get("/")]
pub async fn show_dashboard(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    cache: web::Data<SnapshotCache>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = match DashboardQuery::from_query_string(req.query_string()) {
        Ok(query) => query,
        Err(err) => {
            log::warn!("Rejected dashboard query `{}`: {err}", req.query_string());
            FlashMessage::error("Invalid filter parameters.").send();
            return redirect("/");
        }
    };

    match dashboard_service::load_dashboard(cache.get_ref(), repo.get_ref(), query) {
        Ok(data) => {
            let mut context = Context::new();
            context.insert("alerts", &alerts(&flash_messages));
            context.insert("dashboard", &DashboardView::from(&data));
            render_template(&tera, "dashboard/index.html", &context)
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to build dashboard: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
