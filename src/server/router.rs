//! HTTP routing and OpenAPI documentation configuration.
//!
//! Page routes are registered on a plain axum router. The JSON endpoints are registered through
//! utoipa so their OpenAPI document is generated from the handler annotations, and Swagger UI
//! serves that document at `/api/docs`.

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{account, admin, auth, data, home},
    model::app::AppState,
};

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `GET /` - Home page
/// - `GET|POST /sign-in`, `GET|POST /sign-up`, `GET|POST /forgot-password`, `GET /logout`
/// - `GET|POST /purchase`, `GET|POST /update-payment` - Signed-in users
/// - `GET /sales-report`, `GET|POST /vehicle-inventory`, `POST /vehicle-inventory/restock`,
///   `GET|POST /update-user`, `POST /update-user/delete` - Admin only
/// - `GET /get-data`, `GET /get-order-data`, `GET|POST /get-user-data` - JSON
///
/// The OpenAPI specification of the JSON endpoints is available at `/api/docs/openapi.json`.
///
/// # Returns
/// A `Router<AppState>` that still needs its state and a session layer.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Dealership", description = "Dealership data API"), tags(
        (name = data::DATA_TAG, description = "Inventory, order and user data"),
    ))]
    struct ApiDoc;

    let (api_routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(data::get_data))
        .routes(routes!(data::get_order_data))
        .routes(routes!(data::get_user_data, data::lookup_user_data))
        .split_for_parts();

    let page_routes = Router::new()
        .route("/", get(home::home))
        .route("/sign-in", get(auth::sign_in_page).post(auth::sign_in))
        .route("/sign-up", get(auth::sign_up_page).post(auth::sign_up))
        .route(
            "/forgot-password",
            get(auth::forgot_password_page).post(auth::forgot_password),
        )
        .route("/logout", get(auth::logout))
        .route(
            "/purchase",
            get(account::purchase_page).post(account::purchase),
        )
        .route(
            "/update-payment",
            get(account::update_payment_page).post(account::update_payment),
        )
        .route("/sales-report", get(admin::sales_report))
        .route(
            "/vehicle-inventory",
            get(admin::vehicle_inventory_page).post(admin::add_vehicle),
        )
        .route("/vehicle-inventory/restock", post(admin::restock_vehicle))
        .route(
            "/update-user",
            get(admin::update_user_page).post(admin::update_user),
        )
        .route("/update-user/delete", post(admin::delete_user));

    page_routes
        .merge(api_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
