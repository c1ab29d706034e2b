//! Service marketplace REST handlers
//!
//! Every route requires an authenticated caller. Services belong to central
//! service providers; only the owner may update or delete one.

use crate::{
    AddReviewRequest, ApiError, ApiResult, AppState, AuthenticatedUser, CreateServiceRequest,
    CreateServiceResponse, MessageResponse, NearQuery, ServiceDto, UpdateServiceRequest,
    UpdateServiceResponse,
};

use am_core::{GeoPoint, Review, Role, Service};
use am_db::{ReviewRepository, ServiceProviderRepository, ServiceRepository};

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use log::info;
use uuid::Uuid;

const SERVICE_NOT_FOUND: &str = "Service not found";
const NOT_AUTHORIZED: &str = "You are not authorized";
const INVALID_SERVICE_ID: &str = "Invalid service ID";
/// Reviews carry no reviewer name; the session token does not include one.
const UNKNOWN_REVIEWER: &str = "Unknown";

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/service
///
/// Create a service owned by the calling service provider.
pub async fn create_service(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<CreateServiceRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreateServiceResponse>)> {
    let Json(req) = payload?;

    let provider = ServiceProviderRepository::new(state.central_pool.clone())
        .find_by_id(user.id())
        .await?
        .ok_or_else(|| ApiError::not_found("Service provider not found"))?;

    let title = required(req.title, "title")?;
    let description = required(req.description, "description")?;
    let available_hours = required(req.available_hours, "availableHours")?;
    check_images(&req.images, state.services.max_images)?;
    let location = req.location.into_geo_point(None)?;

    let service = Service::new(
        title,
        description,
        req.images,
        location,
        available_hours,
        provider.id,
        provider.name,
    );
    ServiceRepository::new(state.central_pool.clone())
        .create(&service)
        .await?;

    info!("Service {} created by provider {}", service.id, provider.id);

    Ok((
        StatusCode::CREATED,
        Json(CreateServiceResponse {
            message: "Service created successfully".to_string(),
            images: service.images,
        }),
    ))
}

/// GET /api/service?latitude=&longitude=
///
/// Services within the configured radius, nearest first.
pub async fn list_services(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(query): Query<NearQuery>,
) -> ApiResult<Json<Vec<ServiceDto>>> {
    let (Some(latitude), Some(longitude)) = (
        query.latitude.filter(|v| !v.trim().is_empty()),
        query.longitude.filter(|v| !v.trim().is_empty()),
    ) else {
        return Err(ApiError::bad_request("Latitude and longitude are required"));
    };

    let (Ok(latitude), Ok(longitude)) = (
        latitude.trim().parse::<f64>(),
        longitude.trim().parse::<f64>(),
    ) else {
        return Err(ApiError::bad_request("Latitude and longitude must be numbers"));
    };
    let origin = GeoPoint::new(longitude, latitude, None)?;

    let services = ServiceRepository::new(state.central_pool.clone())
        .find_near(origin.longitude, origin.latitude, state.services.search_radius_meters)
        .await?;

    Ok(Json(services.into_iter().map(ServiceDto::from).collect()))
}

/// GET /api/service/{id}
pub async fn get_service(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ServiceDto>> {
    let service = load_service(&state, &id).await?;
    Ok(Json(service.into()))
}

/// PUT /api/service/{id}
///
/// Partial update by the owning provider.
pub async fn update_service(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    payload: Result<Json<UpdateServiceRequest>, JsonRejection>,
) -> ApiResult<Json<UpdateServiceResponse>> {
    let Json(req) = payload?;

    let mut service = load_service(&state, &id).await?;
    if !service.is_owned_by(user.id()) {
        return Err(ApiError::forbidden(NOT_AUTHORIZED));
    }

    if let Some(title) = non_blank(req.title) {
        service.title = title;
    }
    if let Some(description) = non_blank(req.description) {
        service.description = description;
    }
    if let Some(hours) = non_blank(req.available_hours) {
        service.available_hours = hours;
    }
    if let Some(location) = req.location {
        service.location = location.into_geo_point(Some(service.location.address.clone()))?;
    }
    if let Some(images) = req.images.filter(|images| !images.is_empty()) {
        check_images(&images, state.services.max_images)?;
        service.images = images;
    }
    service.updated_at = Utc::now();

    ServiceRepository::new(state.central_pool.clone())
        .update(&service)
        .await?;

    info!("Service {} updated", service.id);

    Ok(Json(UpdateServiceResponse {
        message: "Service updated successfully".to_string(),
        service: service.into(),
    }))
}

/// DELETE /api/service/{id}
///
/// Removes the service and its reviews.
pub async fn delete_service(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let service = load_service(&state, &id).await?;
    if !service.is_owned_by(user.id()) {
        return Err(ApiError::forbidden(NOT_AUTHORIZED));
    }

    let deleted = ServiceRepository::new(state.central_pool.clone())
        .delete(service.id)
        .await?;
    if !deleted {
        return Err(ApiError::not_found(SERVICE_NOT_FOUND));
    }

    info!("Service {} deleted", service.id);

    Ok(Json(MessageResponse::new("Service deleted successfully")))
}

/// POST /api/service/{id}/reviews
pub async fn add_review(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<String>,
    payload: Result<Json<AddReviewRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(req) = payload?;

    let service = load_service(&state, &id).await?;

    let role = match non_blank(req.role) {
        Some(role) => role.parse::<Role>()?,
        None => user.role(),
    };

    let rating = req
        .rating
        .ok_or_else(|| ApiError::validation("rating is required", "rating"))?;
    let rating = u8::try_from(rating)
        .map_err(|_| ApiError::validation("rating must be between 1 and 5", "rating"))?;

    let review = Review::new(
        service.id,
        user.id(),
        role,
        UNKNOWN_REVIEWER.to_string(),
        rating,
        req.comment.unwrap_or_default(),
    )?;

    ReviewRepository::new(state.central_pool.clone())
        .create(&review)
        .await?;

    info!("Review {} added to service {}", review.id, service.id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Review added successfully")),
    ))
}

// =============================================================================
// Helpers
// =============================================================================

async fn load_service(state: &AppState, id: &str) -> ApiResult<Service> {
    let service_id = Uuid::parse_str(id).map_err(|_| ApiError::bad_request(INVALID_SERVICE_ID))?;

    ServiceRepository::new(state.central_pool.clone())
        .find_by_id(service_id)
        .await?
        .ok_or_else(|| ApiError::not_found(SERVICE_NOT_FOUND))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[track_caller]
fn required(value: Option<String>, field: &str) -> ApiResult<String> {
    non_blank(value).ok_or_else(|| ApiError::validation(format!("{field} is required"), field))
}

#[track_caller]
fn check_images(images: &[String], max_images: usize) -> ApiResult<()> {
    if images.len() > max_images {
        return Err(ApiError::validation(
            format!("At most {max_images} images are allowed"),
            "images",
        ));
    }
    if images.iter().any(|url| url.trim().is_empty()) {
        return Err(ApiError::validation("Image URLs cannot be empty", "images"));
    }
    Ok(())
}
