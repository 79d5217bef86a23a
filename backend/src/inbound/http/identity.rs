//! Bearer-credential extractor.
//!
//! Handlers that need a caller take an [`Identity`] parameter; extraction
//! resolves the `Authorization: Bearer` header through the auth service and
//! fails Unauthorized before the handler body runs.

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, User};
use crate::inbound::http::state::HttpState;

/// The authenticated caller, resolved from the bearer token.
#[derive(Debug, Clone)]
pub struct Identity(pub User);

impl FromRequest for Identity {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<HttpState>>().cloned();
        let header = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        Box::pin(async move {
            let state = state.ok_or_else(|| Error::internal("http state is not configured"))?;
            let token = header
                .as_deref()
                .and_then(|value| value.strip_prefix("Bearer "))
                .filter(|token| !token.is_empty())
                .ok_or_else(|| Error::unauthorized("missing bearer credentials"))?;
            let user = state.auth.authenticate(token).await?;
            Ok(Self(user))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use crate::inbound::http::test_support::{bearer, seeded_app};
    use actix_web::{get, test as actix_test, App, HttpResponse};

    #[get("/whoami")]
    async fn whoami(identity: Identity) -> HttpResponse {
        HttpResponse::Ok().body(identity.0.email)
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorized() {
        let (state, _) = seeded_app(&[]).await;
        let app =
            actix_test::init_service(App::new().app_data(state).service(whoami)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/whoami").to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn garbage_token_is_unauthorized() {
        let (state, _) = seeded_app(&[]).await;
        let app =
            actix_test::init_service(App::new().app_data(state).service(whoami)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/whoami")
                .insert_header(("Authorization", "Bearer not.a.token"))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn valid_token_resolves_the_caller() {
        let (state, sessions) = seeded_app(&[("vera@example.org", Role::Volunteer)]).await;
        let app =
            actix_test::init_service(App::new().app_data(state).service(whoami)).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/whoami")
                .insert_header(bearer(&sessions[0]))
                .to_request(),
        )
        .await;
        assert!(response.status().is_success());
        let body = actix_test::read_body(response).await;
        assert_eq!(body, "vera@example.org");
    }
}
