use actix_web::http::header::ContentType;
use actix_web::HttpResponse;

pub fn ok_to(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(body)
}

pub fn bad_request(body: String) -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type(ContentType::plaintext())
        .body(body)
}

pub fn payload_too_large(body: String) -> HttpResponse {
    HttpResponse::PayloadTooLarge()
        .content_type(ContentType::plaintext())
        .body(body)
}
