/// The fixed set of status scenarios every operation is stubbed with.
///
/// Statuses, names, labels, and identifier tokens are a compatibility
/// contract with existing consumers of the generated mappings; do not
/// extend or rename. The set is applied uniformly to every operation,
/// including 201 for GET endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusScenario {
    Success,
    Created,
    Unauthorized,
    Forbidden,
    NotFound,
    ServerError,
    BadGateway,
    ServiceUnavailable,
}

impl StatusScenario {
    pub const ALL: [StatusScenario; 8] = [
        StatusScenario::Success,
        StatusScenario::Created,
        StatusScenario::Unauthorized,
        StatusScenario::Forbidden,
        StatusScenario::NotFound,
        StatusScenario::ServerError,
        StatusScenario::BadGateway,
        StatusScenario::ServiceUnavailable,
    ];

    pub fn status(self) -> u16 {
        match self {
            StatusScenario::Success => 200,
            StatusScenario::Created => 201,
            StatusScenario::Unauthorized => 401,
            StatusScenario::Forbidden => 403,
            StatusScenario::NotFound => 404,
            StatusScenario::ServerError => 500,
            StatusScenario::BadGateway => 502,
            StatusScenario::ServiceUnavailable => 503,
        }
    }

    /// Human-readable status name.
    pub fn name(self) -> &'static str {
        match self {
            StatusScenario::Success => "Success",
            StatusScenario::Created => "Created",
            StatusScenario::Unauthorized => "Unauthorized",
            StatusScenario::Forbidden => "Forbidden",
            StatusScenario::NotFound => "Not Found",
            StatusScenario::ServerError => "Internal Server Error",
            StatusScenario::BadGateway => "Bad Gateway",
            StatusScenario::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// Scenario label recorded in mapping metadata.
    pub fn label(self) -> &'static str {
        match self {
            StatusScenario::Success => "success",
            StatusScenario::Created => "created",
            StatusScenario::Unauthorized => "unauthorized",
            StatusScenario::Forbidden => "forbidden",
            StatusScenario::NotFound => "not_found",
            StatusScenario::ServerError => "server_error",
            StatusScenario::BadGateway => "bad_gateway",
            StatusScenario::ServiceUnavailable => "service_unavailable",
        }
    }

    /// Identifier token a test client embeds (body or header) to select
    /// this scenario's stub.
    pub fn identifier(self) -> &'static str {
        match self {
            StatusScenario::Success => "happy_path",
            StatusScenario::Created => "created_success",
            StatusScenario::Unauthorized => "unauthorized_access",
            StatusScenario::Forbidden => "forbidden_access",
            StatusScenario::NotFound => "not_found_error",
            StatusScenario::ServerError => "server_error",
            StatusScenario::BadGateway => "bad_gateway",
            StatusScenario::ServiceUnavailable => "service_unavailable",
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, StatusScenario::Success | StatusScenario::Created)
    }
}
