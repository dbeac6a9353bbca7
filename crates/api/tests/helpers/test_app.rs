#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use brandwatch_api::middleware::TokenAuthenticator;
use brandwatch_api::state::{BrandUseCases, CheckerUseCases, DomainUseCases};
use brandwatch_api::{create_api_routes, AppState, EventBroadcaster};
use brandwatch_application::ports::{
    BrandRepository, Clock, DomainLogRepository, DomainRepository, EventNotifier, SystemClock,
};
use brandwatch_application::services::BroadcastCoalescer;
use brandwatch_application::use_cases::*;
use brandwatch_domain::config::AuthToken;
use brandwatch_domain::Role;
use brandwatch_infrastructure::database::{create_pool, IN_MEMORY_DATABASE};
use brandwatch_infrastructure::repositories::{
    SqliteBrandRepository, SqliteDomainLogRepository, SqliteDomainRepository,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

pub const ADMIN_TOKEN: &str = "admin-secret";
pub const MANAGER_TOKEN: &str = "manager-secret";
pub const VIEWER_TOKEN: &str = "viewer-secret";
/// Needs percent-encoding when passed as a query parameter.
pub const STREAM_TOKEN: &str = "stream+key/=%";

pub struct TestApp {
    pub router: Router,
    pub events: Arc<EventBroadcaster>,
    pub pool: SqlitePool,
}

fn auth_tokens() -> Vec<AuthToken> {
    vec![
        AuthToken {
            token: ADMIN_TOKEN.to_string(),
            name: "root".to_string(),
            role: Role::Admin,
        },
        AuthToken {
            token: MANAGER_TOKEN.to_string(),
            name: "maria".to_string(),
            role: Role::Manager,
        },
        AuthToken {
            token: VIEWER_TOKEN.to_string(),
            name: "victor".to_string(),
            role: Role::User,
        },
        AuthToken {
            token: STREAM_TOKEN.to_string(),
            name: "screen".to_string(),
            role: Role::User,
        },
    ]
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = create_pool(IN_MEMORY_DATABASE, 1).await.unwrap();

        let brand_repo: Arc<dyn BrandRepository> =
            Arc::new(SqliteBrandRepository::new(pool.clone()));
        let domain_repo: Arc<dyn DomainRepository> =
            Arc::new(SqliteDomainRepository::new(pool.clone()));
        let log_repo: Arc<dyn DomainLogRepository> =
            Arc::new(SqliteDomainLogRepository::new(pool.clone()));

        let events = Arc::new(EventBroadcaster::new(64, Duration::from_secs(30)));
        let notifier: Arc<dyn EventNotifier> = events.clone();
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let coalescer = Arc::new(BroadcastCoalescer::new(
            notifier.clone(),
            50,
            Duration::from_secs(2),
        ));
        let update_status = Arc::new(UpdateBlockStatusUseCase::new(
            domain_repo.clone(),
            coalescer,
            notifier.clone(),
            clock.clone(),
        ));

        let state = AppState {
            brands: BrandUseCases {
                get_brands: Arc::new(GetBrandsUseCase::new(brand_repo.clone())),
                create_brand: Arc::new(CreateBrandUseCase::new(brand_repo.clone())),
                update_brand: Arc::new(UpdateBrandUseCase::new(brand_repo.clone())),
                delete_brand: Arc::new(DeleteBrandUseCase::new(brand_repo.clone())),
            },
            domains: DomainUseCases {
                get_domains: Arc::new(GetDomainsUseCase::new(domain_repo.clone())),
                create_domain: Arc::new(CreateDomainUseCase::new(
                    domain_repo.clone(),
                    brand_repo.clone(),
                    log_repo.clone(),
                    notifier.clone(),
                )),
                update_domain: Arc::new(UpdateDomainUseCase::new(
                    domain_repo.clone(),
                    brand_repo.clone(),
                    notifier.clone(),
                )),
                delete_domain: Arc::new(DeleteDomainUseCase::new(
                    domain_repo.clone(),
                    log_repo.clone(),
                    notifier.clone(),
                )),
                delete_blocked: Arc::new(DeleteBlockedDomainsUseCase::new(
                    domain_repo.clone(),
                    log_repo.clone(),
                    notifier.clone(),
                )),
                patch_status: Arc::new(PatchDomainStatusUseCase::new(
                    domain_repo.clone(),
                    notifier.clone(),
                    clock,
                )),
                bulk_import: Arc::new(BulkImportDomainsUseCase::new(
                    domain_repo.clone(),
                    brand_repo,
                    log_repo.clone(),
                    notifier.clone(),
                    50,
                )),
                get_logs: Arc::new(GetDomainLogsUseCase::new(log_repo)),
            },
            checker: CheckerUseCases {
                list_urls: Arc::new(ListCheckerUrlsUseCase::new(domain_repo)),
                update_status: update_status.clone(),
                bulk_update_status: Arc::new(BulkUpdateBlockStatusUseCase::new(
                    update_status,
                    notifier,
                    10,
                )),
                bulk_check: Arc::new(BulkCheckUseCase::new(None, 5)),
            },
            events: events.clone(),
            auth: Arc::new(TokenAuthenticator::new(&auth_tokens())),
        };

        Self {
            router: create_api_routes(state),
            events,
            pool,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }

    pub async fn call(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    pub async fn create_brand(&self, name: &str) -> i64 {
        let (status, body) = self
            .call(
                "POST",
                "/brands",
                Some(MANAGER_TOKEN),
                Some(serde_json::json!({ "name": name })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }

    pub async fn create_domain(&self, domain: &str, brand_id: i64) -> i64 {
        let (status, body) = self
            .call(
                "POST",
                "/domains",
                Some(MANAGER_TOKEN),
                Some(serde_json::json!({ "domain": domain, "brand_id": brand_id })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }
}
