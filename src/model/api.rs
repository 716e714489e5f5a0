use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Value of the `success` field on successful responses.
pub const SUCCESS: &str = "success";
/// Value of the `success` field on error responses.
pub const FAILURE: &str = "false";

/// Stable response codes carried in error metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ResponseCode {
    #[serde(rename = "RMS0000")]
    Success,
    #[serde(rename = "RMS0001")]
    ServerError,
    #[serde(rename = "RMS0002")]
    BadRequest,
    #[serde(rename = "RMS0033")]
    DuplicateUser,
    #[serde(rename = "RMS0034")]
    NotFound,
    #[serde(rename = "RMS0502")]
    Unauthorized,
    #[serde(rename = "RMS0503")]
    Forbidden,
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "RMS0000",
            Self::ServerError => "RMS0001",
            Self::BadRequest => "RMS0002",
            Self::DuplicateUser => "RMS0033",
            Self::NotFound => "RMS0034",
            Self::Unauthorized => "RMS0502",
            Self::Forbidden => "RMS0503",
        }
    }
}

/// Success envelope wrapping every API payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationDto>,
    pub success: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data,
            pagination: None,
            success: SUCCESS.to_string(),
        }
    }

    pub fn paginated(data: T, pagination: PaginationDto) -> Self {
        Self {
            data,
            pagination: Some(pagination),
            success: SUCCESS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginationDto {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_elements: u64,
    pub current_elements: u64,
    pub limit: u64,
    pub offset: u64,
    pub sort_by: String,
}

/// Error envelope returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub metadata: ErrorMetadataDto,
    pub success: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorMetadataDto {
    pub path: String,
    pub code: ResponseCode,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub status: String,
    pub message: String,
    pub error: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyDto {}
