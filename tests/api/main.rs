mod feign_client;
mod health_check;
mod helpers;
mod http_interface;
mod rest_client;
