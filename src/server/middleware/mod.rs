//! Request guards and response middleware.

pub mod auth;
pub mod envelope;

#[cfg(test)]
mod test;
