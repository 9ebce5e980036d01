use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::pet_type_detail::*;
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_pet_type_details, create_pet_type_detail))
        .routes(routes!(
            get_pet_type_detail,
            patch_pet_type_detail,
            replace_pet_type_detail,
            delete_pet_type_detail
        ))
}
