use crate::{create_success_response, error::ApiResult};
use axum::{
    extract::{Query, State},
    routing::get,
    Json,
    Router,
};
use knowledge_common::{ApiResponse, RetrievalOutcome};
use knowledge_core::Retriever;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Deserialize)]
pub struct RetrieveParams {
    // Retrieval is total over its input, so a missing q is just the
    // empty query.
    #[serde(default)]
    pub q: String,
}

pub fn routes(retriever: Arc<Retriever>) -> Router {
    Router::new()
        .route("/retrieve", get(retrieve))
        .with_state(retriever)
}

async fn retrieve(
    State(retriever): State<Arc<Retriever>>,
    Query(params): Query<RetrieveParams>,
) -> ApiResult<Json<ApiResponse<RetrievalOutcome>>> {
    debug!("Retrieval requested for query: {:?}", params.q);

    let outcome = retriever.retrieve_outcome(&params.q);

    Ok(create_success_response(outcome))
}
