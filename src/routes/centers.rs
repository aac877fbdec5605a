use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::domain::types::Region;
use crate::forms::centers::{CenterSearchForm, CenterSearchPayload};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::centers::{
    list_centers as list_centers_service, search_centers as search_centers_service,
};

fn region_names() -> Vec<&'static str> {
    Region::ALL.iter().map(|region| region.name()).collect()
}

#[get("/centers")]
pub async fn index(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, "centers");
    context.insert("regions", &region_names());

    match list_centers_service(repo.get_ref()) {
        Ok(centers) => {
            context.insert("centers", &centers);
            render_template(&tera, "centers/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render centers page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/centers/search")]
pub async fn search(
    flash_messages: IncomingFlashMessages,
    web::Query(form): web::Query<CenterSearchForm>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let payload: CenterSearchPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/centers");
        }
    };

    let mut context = base_context(&flash_messages, "centers");
    context.insert("regions", &region_names());

    match search_centers_service(payload, repo.get_ref()) {
        Ok(centers) => {
            let info_message = if centers.is_empty() {
                "no matching centers found".to_string()
            } else {
                format!("{} centers found", centers.len())
            };
            context.insert("info_message", &info_message);
            context.insert("centers", &centers);
            render_template(&tera, "centers/index.html", &context)
        }
        Err(ServiceError::Business(message)) | Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/centers")
        }
        Err(err) => {
            log::error!("Failed to search centers: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
