//! Pre-flight checks run before any request is built.
//!
//! Every mutating input declares its required fields here. A failure is
//! terminal for the call and nothing reaches the transport.

use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::types::{
    AddMemberToBusinessAccountInput, CreateBusinessAccountInput, UpdateBusinessAccountInput,
    UpdateMemberRoleInput,
};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn require_id(id: Uuid, field: &str) -> Result<()> {
    if id.is_nil() {
        return Err(ApiError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_text(value: &str, field: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ApiError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Country codes are two or three characters, counted as `char`s.
pub fn country_code(code: &str) -> Result<()> {
    let len = code.chars().count();
    if !(2..=3).contains(&len) {
        return Err(ApiError::validation(format!("invalid country code {code:?}")));
    }
    Ok(())
}

pub(crate) fn business_id(id: Uuid) -> Result<()> {
    require_id(id, "businessID")
}

pub(crate) fn member_removal(business_id: Uuid, member_id: Uuid) -> Result<()> {
    require_id(business_id, "businessID")?;
    require_id(member_id, "memberID")
}

pub(crate) fn country_name(name: &str) -> Result<()> {
    require_text(name, "countryName")
}

impl Validate for CreateBusinessAccountInput {
    fn validate(&self) -> Result<()> {
        require_id(self.user_id, "userID")?;
        require_text(&self.business_name, "businessName")
    }
}

impl Validate for UpdateBusinessAccountInput {
    fn validate(&self) -> Result<()> {
        require_id(self.user_id, "userID")?;
        require_text(&self.new_business_name, "newBusinessName")?;
        require_id(self.business_id, "businessID")
    }
}

impl Validate for AddMemberToBusinessAccountInput {
    fn validate(&self) -> Result<()> {
        require_id(self.user_id, "userID")?;
        require_id(self.business_id, "businessID")?;
        require_id(self.role_id, "roleID")
    }
}

impl Validate for UpdateMemberRoleInput {
    fn validate(&self) -> Result<()> {
        require_id(self.business_id, "businessID")?;
        require_id(self.member_user_id, "memberUserID")?;
        require_id(self.new_role_id, "newRoleID")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    fn message(result: Result<()>) -> String {
        match result.unwrap_err() {
            ApiError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn update_business_checks_fields_in_order() {
        let mut input = UpdateBusinessAccountInput {
            user_id: Uuid::nil(),
            business_name: String::new(),
            new_business_name: String::new(),
            business_id: Uuid::nil(),
        };
        assert_eq!(message(input.validate()), "userID cannot be empty");

        input.user_id = id(1);
        assert_eq!(message(input.validate()), "newBusinessName cannot be empty");

        input.new_business_name = "Acme".to_string();
        assert_eq!(message(input.validate()), "businessID cannot be empty");

        input.business_id = id(2);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn update_business_allows_empty_current_name() {
        let input = UpdateBusinessAccountInput {
            user_id: id(1),
            business_name: String::new(),
            new_business_name: "Acme".to_string(),
            business_id: id(2),
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn add_member_requires_every_id() {
        let full = AddMemberToBusinessAccountInput {
            user_id: id(1),
            business_id: id(2),
            role_id: id(3),
        };
        assert!(full.validate().is_ok());

        let no_role = AddMemberToBusinessAccountInput {
            role_id: Uuid::nil(),
            ..full.clone()
        };
        assert_eq!(message(no_role.validate()), "roleID cannot be empty");

        let no_business = AddMemberToBusinessAccountInput {
            business_id: Uuid::nil(),
            ..full
        };
        assert_eq!(message(no_business.validate()), "businessID cannot be empty");
    }

    #[test]
    fn update_role_requires_every_id() {
        let input = UpdateMemberRoleInput {
            business_id: id(1),
            member_user_id: Uuid::nil(),
            new_role_id: id(3),
        };
        assert_eq!(message(input.validate()), "memberUserID cannot be empty");
    }

    #[test]
    fn create_business_name_must_be_non_empty() {
        let mut input = CreateBusinessAccountInput {
            user_id: id(1),
            business_name: " ".to_string(),
        };
        assert!(input.validate().is_ok());

        input.business_name.clear();
        assert_eq!(message(input.validate()), "businessName cannot be empty");
    }

    #[test]
    fn country_code_length_bounds() {
        assert!(country_code("U").is_err());
        assert!(country_code("US").is_ok());
        assert!(country_code("USA").is_ok());
        assert!(country_code("USAA").is_err());
        assert!(country_code("").is_err());
    }

    #[test]
    fn country_code_counts_characters_not_bytes() {
        assert!(country_code("ÅÅ").is_ok());
        assert!(country_code("ÅÅÅ").is_ok());
        assert!(country_code("Å").is_err());
        assert!(country_code("ÅÅÅÅ").is_err());
    }

    #[test]
    fn member_removal_requires_both_ids() {
        assert_eq!(message(member_removal(Uuid::nil(), id(1))), "businessID cannot be empty");
        assert_eq!(message(member_removal(id(1), Uuid::nil())), "memberID cannot be empty");
        assert!(member_removal(id(1), id(2)).is_ok());
    }
}
