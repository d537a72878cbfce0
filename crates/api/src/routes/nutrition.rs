use axum::routing::get;
use axum::Router;

use crate::handlers::nutrition;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/nutrition/{condition}", get(nutrition::recommendations))
}
