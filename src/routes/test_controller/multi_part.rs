use crate::constant::{FILE_FIELD, MAX_PART_SIZE, PASSWORD_FIELD, USERNAME_FIELD};
use crate::domain::NewUpload;
use crate::error::BizErrorEnum;
use crate::{telemetry, utils};
use actix_multipart::{Field, Multipart};
use actix_web::HttpResponse;
use futures_util::TryStreamExt;

/// Raw multipart fields before validation.
#[derive(Default)]
struct MultipartFields {
    username: Option<String>,
    password: Option<String>,
    file_name: Option<String>,
    file: Option<Vec<u8>>,
}

#[tracing::instrument(
    name = "POST /test/multi-part: Greet a user with a file",
    skip(payload),
    fields(username = tracing::field::Empty, file_size = tracing::field::Empty)
)]
pub async fn post_multi_part(payload: Multipart) -> Result<HttpResponse, BizErrorEnum> {
    let fields = read_fields(payload).await?;
    if let Some(username) = &fields.username {
        telemetry::record_field("username", username);
    }

    let upload = NewUpload::parse(
        fields.username,
        fields.password,
        fields.file_name,
        fields.file,
    )?;
    telemetry::record_field("file_size", &upload.file().size());

    Ok(utils::ok_to(upload.user().greeting()))
}

async fn read_fields(mut payload: Multipart) -> Result<MultipartFields, BizErrorEnum> {
    let mut fields = MultipartFields::default();
    while let Some(mut field) = payload.try_next().await.map_err(malformed)? {
        let name = field.name().to_string();
        match name.as_str() {
            USERNAME_FIELD => fields.username = Some(read_text(&mut field).await?),
            PASSWORD_FIELD => fields.password = Some(read_text(&mut field).await?),
            FILE_FIELD => {
                fields.file_name = field
                    .content_disposition()
                    .get_filename()
                    .map(str::to_string);
                fields.file = Some(read_bytes(&mut field).await?);
            }
            other => {
                tracing::debug!("Ignoring unknown multipart field: {}", other);
                drain(&mut field).await?;
            }
        }
    }
    Ok(fields)
}

/// Buffer a part, failing as soon as it grows past `MAX_PART_SIZE`.
async fn read_bytes(field: &mut Field) -> Result<Vec<u8>, BizErrorEnum> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(malformed)? {
        check_part_size(field, bytes.len() + chunk.len())?;
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

/// Consume a part without keeping its content.
async fn drain(field: &mut Field) -> Result<(), BizErrorEnum> {
    let mut size = 0;
    while let Some(chunk) = field.try_next().await.map_err(malformed)? {
        size += chunk.len();
        check_part_size(field, size)?;
    }
    Ok(())
}

fn check_part_size(field: &Field, size: usize) -> Result<(), BizErrorEnum> {
    if size > MAX_PART_SIZE {
        tracing::warn!(
            "Multipart field {} exceeds {} bytes",
            field.name(),
            MAX_PART_SIZE
        );
        return Err(BizErrorEnum::PartTooLarge);
    }
    Ok(())
}

async fn read_text(field: &mut Field) -> Result<String, BizErrorEnum> {
    let bytes = read_bytes(field).await?;
    String::from_utf8(bytes).map_err(malformed)
}

fn malformed(e: impl std::fmt::Display) -> BizErrorEnum {
    tracing::warn!("Failed to read multipart payload: {}", e);
    BizErrorEnum::MalformedBody(anyhow::anyhow!(e.to_string()))
}
