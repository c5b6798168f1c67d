use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::vendors::list_vendors,
        api::vendors::create_vendor,
        api::vendors::get_vendor,
        api::vendors::update_vendor,
        api::vendors::delete_vendor,
        api::purchase_orders::list_purchase_orders,
        api::purchase_orders::create_purchase_order,
        api::purchase_orders::get_purchase_order,
        api::purchase_orders::update_purchase_order,
        api::purchase_orders::delete_purchase_order,
    ),
    tags(
        (name = "vendor_performance", description = "Vendor performance tracking API")
    )
)]
pub struct ApiDoc;
