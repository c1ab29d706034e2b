pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    auth::{
        login::login, login_request::LoginRequestBody, login_response::LoginResponse,
        user_dto::UserDto,
    },
    error::{ApiError, Result as ApiResult},
    extractors::authenticated_user::AuthenticatedUser,
    message_response::MessageResponse,
    services::{
        add_review_request::AddReviewRequest,
        create_service_request::{CreateServiceRequest, CreateServiceResponse},
        location_request::LocationRequest,
        near_query::NearQuery,
        review_dto::ReviewDto,
        service_dto::{GeoPointDto, ServiceDto},
        services::{
            add_review, create_service, delete_service, get_service, list_services, update_service,
        },
        update_service_request::{UpdateServiceRequest, UpdateServiceResponse},
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
