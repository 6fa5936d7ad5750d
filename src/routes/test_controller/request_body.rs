use crate::domain::TestUser;
use crate::error::BizErrorEnum;
use crate::request::PostTestRequest;
use crate::utils;
use actix_web::{web, HttpResponse};

#[tracing::instrument(
    name = "POST /test/request-body: Greet a user",
    skip(body),
    fields(username = ?body.username)
)]
pub async fn post_request_body(
    body: web::Json<PostTestRequest>,
) -> Result<HttpResponse, BizErrorEnum> {
    let user: TestUser = body.into_inner().try_into()?;
    Ok(utils::ok_to(user.greeting()))
}
