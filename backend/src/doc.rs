//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] gathers every HTTP path and schema of the REST API so the
//! generated specification can be served or exported for external tooling.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::donation::{Donation, DonationStatus, DonationWithDistance};
use crate::domain::feedback::{Feedback, FeedbackType};
use crate::domain::geo::Location;
use crate::domain::quality::{
    ExpiryStatus, OverallQuality, PackagingStatus, QualityCheck, SmellStatus,
};
use crate::domain::request::{FoodRequest, RequestStatus, Urgency};
use crate::domain::stats::StatsReport;
use crate::domain::user::{Role, UserPublic};
use crate::domain::{AuthSession, Error, ErrorCode};
use crate::inbound::http::donations::{CreateDonationRequest, StatusUpdateRequest};
use crate::inbound::http::feedback::FeedbackRequest;
use crate::inbound::http::quality::QualityCheckRequest;
use crate::inbound::http::requests::{CreateRequestBody, MatchBody};
use crate::inbound::http::users::{LoginRequest, RegisterRequest};

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "PlateShare backend API",
        description = "HTTP interface for coordinating surplus food donations.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::users::me,
        crate::inbound::http::donations::create_donation,
        crate::inbound::http::donations::list_donations,
        crate::inbound::http::donations::list_available_donations,
        crate::inbound::http::donations::set_donation_status,
        crate::inbound::http::requests::create_request,
        crate::inbound::http::requests::list_requests,
        crate::inbound::http::requests::match_request,
        crate::inbound::http::quality::submit_quality_check,
        crate::inbound::http::feedback::submit_feedback,
        crate::inbound::http::feedback::list_user_feedback,
        crate::inbound::http::admin::admin_stats,
        crate::inbound::http::admin::admin_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Role,
        UserPublic,
        AuthSession,
        RegisterRequest,
        LoginRequest,
        Location,
        Donation,
        DonationStatus,
        DonationWithDistance,
        CreateDonationRequest,
        StatusUpdateRequest,
        FoodRequest,
        RequestStatus,
        Urgency,
        CreateRequestBody,
        MatchBody,
        QualityCheck,
        QualityCheckRequest,
        ExpiryStatus,
        PackagingStatus,
        SmellStatus,
        OverallQuality,
        Feedback,
        FeedbackType,
        FeedbackRequest,
        StatsReport,
    )),
    tags(
        (name = "auth", description = "Registration, login, and profile access"),
        (name = "donations", description = "Donation lifecycle"),
        (name = "requests", description = "Food requests and matching"),
        (name = "quality", description = "Volunteer quality checks"),
        (name = "feedback", description = "Reputation feedback"),
        (name = "admin", description = "Administrative rollups"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
