mod assignment;
mod shift;
mod shift_request;
mod shift_role;
mod user;
