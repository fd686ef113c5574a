use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::blog::list_blogs,
            handlers::blog::create_blog
        ))
        .routes(routes!(
            handlers::blog::get_blog,
            handlers::blog::delete_blog
        ))
}
