//! Handlers for car listing and administration endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;

use crate::api::dto::car::{CarListResponse, CarPayload, CarResponse, ListMeta, MessageResponse};
use crate::api::dto::pagination::{CarQueryParams, PaginationMeta};
use crate::domain::entities::{NewCar, UpdateCar};
use crate::domain::repositories::CarQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Lists cars with optional size/availability filters and pagination.
///
/// # Endpoint
///
/// `GET /v1/cars?size=&availableAt=&page=&pageSize=`
pub async fn list_cars_handler(
    State(state): State<AppState>,
    Query(params): Query<CarQueryParams>,
) -> Result<Json<CarListResponse>, AppError> {
    let (offset, limit) = params.offset_limit();
    let query = CarQuery::new(offset, limit)
        .with_size(params.size.clone())
        .with_available_at(params.available_at);

    let (cars, count) = state.car_service.list_cars(query).await?;

    let pagination = PaginationMeta::build(params.page(), params.page_size(), count);

    Ok(Json(CarListResponse {
        cars: cars.into_iter().map(CarResponse::from).collect(),
        meta: ListMeta { pagination },
    }))
}

/// Retrieves one car by id.
///
/// # Endpoint
///
/// `GET /v1/cars/{id}`
///
/// # Errors
///
/// Returns 404 when no car matches the id.
pub async fn get_car_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CarResponse>, AppError> {
    let car = state.car_service.get_car(id).await?;
    Ok(Json(car.into()))
}

/// Creates a car.
///
/// # Endpoint
///
/// `POST /v1/cars`
///
/// # Errors
///
/// Returns 422 when `name` is not a JSON string.
pub async fn create_car_handler(
    State(state): State<AppState>,
    Json(payload): Json<CarPayload>,
) -> Result<(StatusCode, Json<CarResponse>), AppError> {
    let Some(name) = payload.name_str().map(str::to_owned) else {
        return Err(AppError::conflict("Name must be input in string", json!({})));
    };

    let car = state
        .car_service
        .create_car(NewCar {
            name,
            price: payload.price,
            size: payload.size,
            image: payload.image,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(car.into())))
}

/// Replaces a car's fields.
///
/// # Endpoint
///
/// `PUT /v1/cars/{id}`
///
/// The name check runs before the write; an invalid payload leaves the row
/// untouched. Matching no row still reports the generic success message.
///
/// # Errors
///
/// Returns 422 when `name` is not a JSON string.
pub async fn update_car_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CarPayload>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let Some(name) = payload.name_str().map(str::to_owned) else {
        return Err(AppError::conflict(
            "Car name must be input in string",
            json!({}),
        ));
    };

    state
        .car_service
        .update_car(
            id,
            UpdateCar {
                name,
                price: payload.price,
                size: payload.size,
                image: payload.image,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Data have been updated successfully",
        }),
    ))
}

/// Deletes a car by id.
///
/// # Endpoint
///
/// `DELETE /v1/cars/{id}`
///
/// Idempotent: an unknown id still yields the generic success message.
pub async fn delete_car_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.car_service.delete_car(id).await?;

    Ok(Json(MessageResponse {
        message: "Data have been deleted successfully",
    }))
}
