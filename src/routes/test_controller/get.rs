use crate::domain::{self, Username};
use crate::error::BizErrorEnum;
use crate::request::GetTestQuery;
use crate::utils;
use actix_web::{web, HttpResponse};

#[tracing::instrument(
    name = "GET /test: Greet a user",
    skip(query),
    fields(username = ?query.username)
)]
pub async fn get_test(query: web::Query<GetTestQuery>) -> Result<HttpResponse, BizErrorEnum> {
    let username = Username::parse(query.into_inner().username)?;
    Ok(utils::ok_to(domain::greeting(&username)))
}
