//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories never
//! create their parents implicitly; use `helpers` for ready-made dependency chains.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let (role, shift) = factory::helpers::create_shift_with_role(&db).await?;
//! let request = factory::create_shift_request(&db, user.id, shift.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .role(UserRole::Admin)
//!     .build()
//!     .await?;
//!
//! let shift = factory::shift::ShiftFactory::new(&db, role.id)
//!     .date(date(2025, 6, 3))
//!     .times(time(9, 0), time(12, 0))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `shift_role` - Create shift role lookup entities
//! - `shift` - Create shift entities
//! - `shift_request` - Create shift request entities
//! - `assignment` - Create worker shift assignment entities
//! - `helpers` - Unique ids, date/time shorthands and dependency chains

pub mod assignment;
pub mod helpers;
pub mod shift;
pub mod shift_request;
pub mod shift_role;
pub mod user;

pub use assignment::create_assignment;
pub use shift::create_shift;
pub use shift_request::create_shift_request;
pub use shift_role::create_shift_role;
pub use user::create_user;
