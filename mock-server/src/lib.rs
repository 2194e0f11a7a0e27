//! In-memory stand-in for the accounts service.
//!
//! Routes reproduce the live service's paths exactly, including the ones
//! that do not share a prefix with their neighbours. Every route requires a
//! bearer token; API keys are accepted but not checked.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Business {
    pub id: Uuid,
    pub user_account_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountMembership {
    pub business_account_id: Uuid,
    pub user_id: Uuid,
    pub role_id: Uuid,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SanctionedCountry {
    pub id: Uuid,
    pub country_code: String,
    pub country_name: String,
    pub added_at: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct CreateBusiness {
    pub user_id: Uuid,
    pub business_name: String,
}

#[derive(Deserialize)]
pub struct UpdateBusiness {
    pub user_id: Uuid,
    pub new_business_name: String,
    pub business_id: Uuid,
}

#[derive(Deserialize)]
pub struct AddMember {
    pub user_id: Uuid,
    pub business_id: Uuid,
    pub role_id: Uuid,
}

#[derive(Deserialize)]
pub struct MembershipEvent {
    pub account_type: String,
    pub account_id: Uuid,
    pub user_id: Uuid,
    pub role: String,
}

#[derive(Serialize, Deserialize)]
pub struct SanctionStatus {
    #[serde(rename = "isSanctioned")]
    pub is_sanctioned: bool,
}

struct BusinessRecord {
    business: Business,
    name: String,
}

#[derive(Default)]
pub struct Store {
    businesses: HashMap<Uuid, BusinessRecord>,
    members: HashMap<Uuid, Vec<AccountMembership>>,
    sanctioned: HashMap<String, SanctionedCountry>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/v1/business", post(create_business))
        .route("/business/{id}", get(get_business).delete(delete_business))
        .route("/users/{user_id}/business_accounts", get(list_by_user))
        .route("/business-accounts", get(list_businesses))
        .route("/{business_id}", put(update_business))
        .route("/businesses/{business_id}/members", post(add_member))
        .route(
            "/api/businesses/{business_id}/members/{member_id}",
            delete(remove_member),
        )
        .route("/api/v1/businesses/{business_id}/members", get(list_members))
        .route(
            "/api/v1/businesses/{business_id}/members/{member_id}",
            put(update_member_role),
        )
        .route("/api/sanctions/countries/{code}", get(is_sanctioned))
        .route("/api/sanctioned-countries", post(add_sanctioned))
        .route("/api/sanctioned-countries/{code}", delete(remove_sanctioned))
        .layer(middleware::from_fn(require_bearer))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn require_bearer(request: Request, next: Next) -> Result<Response, StatusCode> {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Bearer ") && v.len() > "Bearer ".len());
    if !authorized {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(request).await)
}

async fn create_business(
    State(db): State<Db>,
    Json(input): Json<CreateBusiness>,
) -> Result<(StatusCode, Json<Business>), (StatusCode, String)> {
    if input.business_name.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "business_name is required".to_string()));
    }
    let now = Utc::now();
    let business = Business {
        id: Uuid::new_v4(),
        user_account_id: input.user_id,
        created_at: now,
        updated_at: now,
    };
    tracing::info!(id = %business.id, "business created");
    db.write().await.businesses.insert(
        business.id,
        BusinessRecord {
            business: business.clone(),
            name: input.business_name,
        },
    );
    Ok((StatusCode::CREATED, Json(business)))
}

async fn get_business(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Business>, StatusCode> {
    let store = db.read().await;
    store
        .businesses
        .get(&id)
        .map(|r| Json(r.business.clone()))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_by_user(State(db): State<Db>, Path(user_id): Path<Uuid>) -> Json<Vec<Business>> {
    let store = db.read().await;
    Json(
        store
            .businesses
            .values()
            .filter(|r| r.business.user_account_id == user_id)
            .map(|r| r.business.clone())
            .collect(),
    )
}

async fn list_businesses(State(db): State<Db>) -> Json<Vec<Business>> {
    let store = db.read().await;
    Json(store.businesses.values().map(|r| r.business.clone()).collect())
}

async fn update_business(
    State(db): State<Db>,
    Path(business_id): Path<Uuid>,
    Json(input): Json<UpdateBusiness>,
) -> Result<StatusCode, (StatusCode, String)> {
    if input.business_id != business_id {
        return Err((StatusCode::BAD_REQUEST, "business_id mismatch".to_string()));
    }
    let mut store = db.write().await;
    let record = store
        .businesses
        .get_mut(&business_id)
        .ok_or((StatusCode::NOT_FOUND, "business not found".to_string()))?;
    if record.business.user_account_id != input.user_id {
        return Err((StatusCode::FORBIDDEN, "not the owner".to_string()));
    }
    record.name = input.new_business_name;
    record.business.updated_at = Utc::now();
    Ok(StatusCode::OK)
}

async fn delete_business(State(db): State<Db>, Path(id): Path<Uuid>) -> StatusCode {
    let mut store = db.write().await;
    store.members.remove(&id);
    match store.businesses.remove(&id) {
        Some(_) => StatusCode::OK,
        None => StatusCode::NOT_FOUND,
    }
}

async fn add_member(
    State(db): State<Db>,
    Path(business_id): Path<Uuid>,
    Json(input): Json<AddMember>,
) -> Result<Json<AccountMembership>, StatusCode> {
    if input.business_id != business_id {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut store = db.write().await;
    if !store.businesses.contains_key(&business_id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let membership = AccountMembership {
        business_account_id: business_id,
        user_id: input.user_id,
        role_id: input.role_id,
    };
    let members = store.members.entry(business_id).or_default();
    members.retain(|m| m.user_id != input.user_id);
    members.push(membership.clone());
    Ok(Json(membership))
}

async fn remove_member(
    State(db): State<Db>,
    Path((business_id, member_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, (StatusCode, String)> {
    let mut store = db.write().await;
    let members = store
        .members
        .get_mut(&business_id)
        .ok_or((StatusCode::NOT_FOUND, "no members".to_string()))?;
    let before = members.len();
    members.retain(|m| m.user_id != member_id);
    if members.len() == before {
        return Err((StatusCode::NOT_FOUND, format!("member {member_id} not found")));
    }
    Ok(StatusCode::OK)
}

async fn list_members(
    State(db): State<Db>,
    Path(business_id): Path<Uuid>,
) -> Result<Json<Vec<AccountMembership>>, StatusCode> {
    let store = db.read().await;
    if !store.businesses.contains_key(&business_id) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(store.members.get(&business_id).cloned().unwrap_or_default()))
}

async fn update_member_role(
    State(db): State<Db>,
    Path((business_id, member_id)): Path<(Uuid, Uuid)>,
    Json(event): Json<MembershipEvent>,
) -> Result<StatusCode, (StatusCode, String)> {
    if event.account_type != "business" || event.account_id != business_id || event.user_id != member_id {
        return Err((StatusCode::BAD_REQUEST, "event does not match path".to_string()));
    }
    let role_id: Uuid = event
        .role
        .parse()
        .map_err(|_| (StatusCode::BAD_REQUEST, "role must be a UUID".to_string()))?;
    let mut store = db.write().await;
    let membership = store
        .members
        .get_mut(&business_id)
        .and_then(|members| members.iter_mut().find(|m| m.user_id == member_id))
        .ok_or((StatusCode::NOT_FOUND, "member not found".to_string()))?;
    membership.role_id = role_id;
    Ok(StatusCode::OK)
}

async fn is_sanctioned(State(db): State<Db>, Path(code): Path<String>) -> Json<SanctionStatus> {
    let store = db.read().await;
    Json(SanctionStatus {
        is_sanctioned: store.sanctioned.contains_key(&code.to_uppercase()),
    })
}

async fn add_sanctioned(
    State(db): State<Db>,
    Json(mut country): Json<SanctionedCountry>,
) -> StatusCode {
    if country.id.is_nil() {
        country.id = Uuid::new_v4();
    }
    let code = country.country_code.to_uppercase();
    db.write().await.sanctioned.insert(code, country);
    StatusCode::OK
}

async fn remove_sanctioned(State(db): State<Db>, Path(code): Path<String>) -> StatusCode {
    match db.write().await.sanctioned.remove(&code.to_uppercase()) {
        Some(_) => StatusCode::OK,
        None => StatusCode::NOT_FOUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_serializes_to_json() {
        let business = Business {
            id: Uuid::nil(),
            user_account_id: Uuid::nil(),
            created_at: DateTime::from_timestamp(0, 0).unwrap(),
            updated_at: DateTime::from_timestamp(0, 0).unwrap(),
        };
        let json = serde_json::to_value(&business).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["created_at"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn sanction_status_uses_camel_case() {
        let json = serde_json::to_string(&SanctionStatus { is_sanctioned: true }).unwrap();
        assert_eq!(json, r#"{"isSanctioned":true}"#);
    }

    #[test]
    fn update_business_ignores_current_name() {
        let input: UpdateBusiness = serde_json::from_str(
            r#"{"user_id":"00000000-0000-0000-0000-000000000001","business_name":"",
                "new_business_name":"New","business_id":"00000000-0000-0000-0000-000000000002"}"#,
        )
        .unwrap();
        assert_eq!(input.new_business_name, "New");
    }

    #[test]
    fn membership_event_requires_role() {
        let result: Result<MembershipEvent, _> = serde_json::from_str(
            r#"{"account_type":"business","account_id":"00000000-0000-0000-0000-000000000001",
                "user_id":"00000000-0000-0000-0000-000000000002"}"#,
        );
        assert!(result.is_err());
    }
}
