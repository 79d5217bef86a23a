//! Registration, login, and current-user handlers.

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{AuthSession, Error, NewUser, Role, UserPublic};
use crate::inbound::http::identity::Identity;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Registration body for `POST /api/register`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Login body for `POST /api/login`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register a new account and return a session token.
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created", body = AuthSession),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "registerUser",
    security([])
)]
#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<web::Json<AuthSession>> {
    let RegisterRequest {
        name,
        email,
        password,
        role,
        phone,
    } = payload.into_inner();
    let session = state
        .auth
        .register(NewUser {
            name,
            email,
            password,
            role,
            phone,
        })
        .await?;
    Ok(web::Json(session))
}

/// Exchange email and password for a session token.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = AuthSession),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<AuthSession>> {
    let LoginRequest { email, password } = payload.into_inner();
    let session = state.auth.login(&email, &password).await?;
    Ok(web::Json(session))
}

/// The caller's own profile.
#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Current user", body = UserPublic),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "getCurrentUser"
)]
#[get("/me")]
pub async fn me(identity: Identity) -> ApiResult<web::Json<UserPublic>> {
    Ok(web::Json(identity.0.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_support::{bearer, memory_state, seeded_app, TEST_PASSWORD};
    use actix_web::{test as actix_test, App};
    use serde_json::{json, Value};

    fn register_body(email: &str, role: &str) -> Value {
        json!({
            "name": "Ada Lovelace",
            "email": email,
            "password": "correct horse battery",
            "role": role,
        })
    }

    #[actix_web::test]
    async fn register_returns_token_and_public_user() {
        let state = memory_state();
        let app = actix_test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/api").service(register)),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/register")
                .set_json(register_body("ada@example.org", "donor"))
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("JSON");
        assert!(!value["token"].as_str().expect("token").is_empty());
        assert_eq!(value["user"]["email"], "ada@example.org");
        assert_eq!(value["user"]["role"], "donor");
        assert_eq!(value["user"]["rating"], 5.0);
        assert!(value["user"].get("passwordHash").is_none());
    }

    #[actix_web::test]
    async fn duplicate_email_is_conflict() {
        let state = memory_state();
        let app = actix_test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/api").service(register)),
        )
        .await;

        for expected in [
            actix_web::http::StatusCode::OK,
            actix_web::http::StatusCode::CONFLICT,
        ] {
            let response = actix_test::call_service(
                &app,
                actix_test::TestRequest::post()
                    .uri("/api/register")
                    .set_json(register_body("ada@example.org", "donor"))
                    .to_request(),
            )
            .await;
            assert_eq!(response.status(), expected);
        }
    }

    #[actix_web::test]
    async fn login_rejects_wrong_password() {
        let (state, _) = seeded_app(&[("ada@example.org", Role::Donor)]).await;
        let app = actix_test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/api").service(login)),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/login")
                .set_json(json!({"email": "ada@example.org", "password": "wrong password"}))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn login_then_me_round_trips_the_profile() {
        let (state, _) = seeded_app(&[("ada@example.org", Role::Donor)]).await;
        let app = actix_test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/api").service(login).service(me)),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/login")
                .set_json(json!({"email": "ada@example.org", "password": TEST_PASSWORD}))
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let session: AuthSession =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("session");

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/me")
                .insert_header(bearer(&session))
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("JSON");
        assert_eq!(value["email"], "ada@example.org");
        assert!(value.get("createdAt").is_some());
    }
}
