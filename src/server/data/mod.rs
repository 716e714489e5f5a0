//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories are generic over `ConnectionTrait` so the
//! same queries run on the connection pool or inside a `DatabaseTransaction`. Every
//! read excludes soft-deleted rows, and every list is ordered newest first.

pub mod assignment;
pub mod shift;
pub mod shift_request;
pub mod shift_role;
pub mod user;

#[cfg(test)]
mod test;
