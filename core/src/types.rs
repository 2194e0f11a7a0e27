//! Domain DTOs for the accounts API.
//!
//! # Design
//! These types mirror the service's JSON schema field for field. The
//! mock-server crate defines its own copies; integration tests catch any
//! drift between the two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A business account as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Business {
    pub id: Uuid,
    pub user_account_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Association of a user with a business account under a role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountMembership {
    pub business_account_id: Uuid,
    pub user_id: Uuid,
    pub role_id: Uuid,
}

/// A country flagged as disallowed for compliance purposes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SanctionedCountry {
    pub id: Uuid,
    pub country_code: String,
    pub country_name: String,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBusinessAccountInput {
    pub user_id: Uuid,
    pub business_name: String,
}

/// Rename a business. `business_name` is the current name and may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBusinessAccountInput {
    pub user_id: Uuid,
    pub business_name: String,
    pub new_business_name: String,
    pub business_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddMemberToBusinessAccountInput {
    pub user_id: Uuid,
    pub business_id: Uuid,
    pub role_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMemberRoleInput {
    pub business_id: Uuid,
    pub member_user_id: Uuid,
    pub new_role_id: Uuid,
}

/// Wire body of the update-member-role call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateAccountMembershipEvent {
    pub account_type: String,
    pub account_id: Uuid,
    pub user_id: Uuid,
    pub role: String,
}

impl From<&UpdateMemberRoleInput> for UpdateAccountMembershipEvent {
    fn from(input: &UpdateMemberRoleInput) -> Self {
        Self {
            account_type: "business".to_string(),
            account_id: input.business_id,
            user_id: input.member_user_id,
            role: input.new_role_id.to_string(),
        }
    }
}

/// Wire body of the sanctions check.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SanctionStatus {
    #[serde(rename = "isSanctioned")]
    pub is_sanctioned: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn business_decodes_rfc3339_timestamps() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "user_account_id": "00000000-0000-0000-0000-000000000002",
            "created_at": "2024-03-01T12:00:00Z",
            "updated_at": "2024-03-02T08:30:00.5+02:00"
        }"#;
        let business: Business = serde_json::from_str(json).unwrap();
        assert_eq!(business.created_at.to_rfc3339(), "2024-03-01T12:00:00+00:00");
        assert_eq!(business.updated_at.to_rfc3339(), "2024-03-02T06:30:00.500+00:00");
    }

    #[test]
    fn membership_event_carries_role_as_string() {
        let input = UpdateMemberRoleInput {
            business_id: Uuid::from_u128(1),
            member_user_id: Uuid::from_u128(2),
            new_role_id: Uuid::from_u128(3),
        };
        let event = UpdateAccountMembershipEvent::from(&input);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["account_type"], "business");
        assert_eq!(json["account_id"], "00000000-0000-0000-0000-000000000001");
        assert_eq!(json["user_id"], "00000000-0000-0000-0000-000000000002");
        assert_eq!(json["role"], "00000000-0000-0000-0000-000000000003");
    }

    #[test]
    fn sanction_status_uses_camel_case_key() {
        let status: SanctionStatus = serde_json::from_str(r#"{"isSanctioned":true}"#).unwrap();
        assert!(status.is_sanctioned);
        assert!(serde_json::from_str::<SanctionStatus>(r#"{"is_sanctioned":true}"#).is_err());
    }
}
