//! Domain entities, services, and repository ports.
//!
//! Everything here is transport agnostic: services take an authenticated
//! [`User`] and validated inputs, talk to the document store through the
//! traits in [`ports`], and return the domain [`Error`]. The HTTP inbound
//! adapter owns the mapping to status codes.

pub mod auth;
pub mod donation;
pub mod donation_service;
pub mod error;
pub mod feedback;
pub mod feedback_service;
pub mod geo;
pub mod matching_service;
pub mod ports;
pub mod quality;
pub mod quality_service;
pub mod request;
pub mod request_service;
pub mod stats;
pub mod stats_service;
pub mod token;
pub mod user;

pub use self::auth::{AuthService, AuthSession, NewUser};
pub use self::donation::{Donation, DonationStatus, DonationWithDistance, NewDonation};
pub use self::donation_service::DonationService;
pub use self::error::{Error, ErrorCode};
pub use self::feedback::{Feedback, FeedbackType, NewFeedback};
pub use self::feedback_service::FeedbackService;
pub use self::geo::{Coordinates, Location};
pub use self::matching_service::MatchingService;
pub use self::quality::{NewQualityCheck, OverallQuality, QualityCheck};
pub use self::quality_service::QualityService;
pub use self::request::{FoodRequest, NewFoodRequest, RequestStatus, Urgency};
pub use self::request_service::RequestService;
pub use self::stats::StatsReport;
pub use self::stats_service::StatsService;
pub use self::token::TokenCodec;
pub use self::user::{Role, User, UserPublic};

/// Convenient result alias for domain operations.
pub type ApiResult<T> = Result<T, Error>;
