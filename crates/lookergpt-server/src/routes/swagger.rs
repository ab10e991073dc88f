//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::GptReply;

#[derive(OpenApi)]
#[openapi(
    paths(super::gpt::ask_gpt),
    components(schemas(GptReply)),
    tags(
        (name = "Proxy", description = "Natural-language question to Looker explore URL")
    ),
    info(
        title = "LookerGPT API",
        description = "Completion proxy that turns questions into reporting URLs"
    )
)]
pub struct ApiDoc;
