mod auth;
mod shift_request;
