use crate::domain::TestUser;
use crate::error::BizErrorEnum;
use crate::request::PostTestRequest;
use crate::{telemetry, utils};
use actix_web::{web, HttpResponse};

/// Fields are bound from the form body first, then from the query string.
/// A missing or non-form body leaves every field to the query string.
#[tracing::instrument(
    name = "POST /test/form-data: Greet a user",
    skip(query, form),
    fields(username = tracing::field::Empty)
)]
pub async fn post_form_data(
    query: web::Query<PostTestRequest>,
    form: Option<web::Form<PostTestRequest>>,
) -> Result<HttpResponse, BizErrorEnum> {
    let request = match form {
        Some(form) => form.into_inner().or(query.into_inner()),
        None => query.into_inner(),
    };
    if let Some(username) = &request.username {
        telemetry::record_field("username", username);
    }

    // Same validation as the JSON endpoint, only the binding differs
    let user: TestUser = request.try_into()?;
    Ok(utils::ok_to(user.greeting()))
}
