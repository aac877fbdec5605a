use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::api::ApiResponse;
use crate::forms::centers::{
    CenterSearchForm, CenterSearchPayload, CreateCenterForm, CreateCenterPayload,
    DeleteCenterForm, DeleteCenterPayload, UpdateCenterForm, UpdateCenterPayload,
};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::centers::{
    create_center as create_center_service, delete_center as delete_center_service,
    list_center_stocks as list_center_stocks_service, search_centers as search_centers_service,
    update_center as update_center_service,
};

/// Maps a service error onto the uniform response envelope.
fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Form(message) => HttpResponse::BadRequest()
            .json(ApiResponse::<()>::client_error("invalid input", vec![message])),
        ServiceError::Business(message) => HttpResponse::BadRequest().json(
            ApiResponse::<()>::client_error("business rule violation", vec![message]),
        ),
        ServiceError::NotFound(message) => HttpResponse::NotFound()
            .json(ApiResponse::<()>::not_found("resource not found", vec![message])),
        ServiceError::Conflict(message) => HttpResponse::Conflict().json(
            ApiResponse::<()>::conflict("the record was modified concurrently", vec![message]),
        ),
        ServiceError::Internal => HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::server_error("an internal error occurred")),
    }
}

#[get("/v1/centers/search")]
pub async fn search_centers(
    web::Query(form): web::Query<CenterSearchForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload: CenterSearchPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match search_centers_service(payload, repo.get_ref()) {
        Ok(centers) => {
            let message = if centers.is_empty() {
                "no matching centers found".to_string()
            } else {
                format!("{} centers found", centers.len())
            };
            HttpResponse::Ok().json(ApiResponse::success(centers, message))
        }
        Err(err) => error_response(err),
    }
}

#[post("/v1/centers")]
pub async fn create_center(
    web::Json(form): web::Json<CreateCenterForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload: CreateCenterPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match create_center_service(payload, repo.get_ref()) {
        Ok(stored) => {
            HttpResponse::Created().json(ApiResponse::created(stored, "center registered"))
        }
        Err(err) => error_response(err),
    }
}

#[put("/v1/centers")]
pub async fn update_center(
    web::Json(form): web::Json<UpdateCenterForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload: UpdateCenterPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match update_center_service(payload, repo.get_ref()) {
        Ok(updated) => HttpResponse::Ok().json(ApiResponse::success(updated, "center updated")),
        Err(err) => error_response(err),
    }
}

#[delete("/v1/centers/{center_id}")]
pub async fn delete_center(
    center_id: web::Path<i32>,
    web::Query(form): web::Query<DeleteCenterForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = match DeleteCenterPayload::from_parts(center_id.into_inner(), form) {
        Ok(payload) => payload,
        Err(e) => return error_response(e.into()),
    };

    match delete_center_service(payload, repo.get_ref()) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::ok_message("center deleted")),
        Err(err) => error_response(err),
    }
}

#[get("/v1/centers/{center_id}/stocks")]
pub async fn list_center_stocks(
    center_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_center_stocks_service(center_id.into_inner(), repo.get_ref()) {
        Ok(stocks) => {
            let message = format!("{} stock records found", stocks.len());
            HttpResponse::Ok().json(ApiResponse::success(stocks, message))
        }
        Err(err) => error_response(err),
    }
}
