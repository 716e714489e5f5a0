//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the roster service:
//! API endpoints, the shift request workflow, data access and infrastructure. The
//! backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication guard and the error envelope
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, token service, limits)
//! - **Startup** (`startup`) - Database connection, migrations, seeding and shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** resolves the caller through `AuthGuard`, converts DTOs to params
//! 3. **Service** executes business logic, orchestrates data operations
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Controller** converts domain model to DTO, returns HTTP response
//! 6. **Middleware** fills request details into any error body

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
