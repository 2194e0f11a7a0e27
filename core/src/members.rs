//! Membership and role assignment within a business account.
//!
//! None of these endpoints take the API key; the bearer token alone
//! authenticates them.

use uuid::Uuid;

use crate::client::{decode_list, expect_status, expect_success, AccountsClient};
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{
    AccountMembership, AddMemberToBusinessAccountInput, UpdateAccountMembershipEvent,
    UpdateMemberRoleInput,
};
use crate::validate::{self, Validate};

impl<T> AccountsClient<T> {
    pub fn build_add_member(&self, input: &AddMemberToBusinessAccountInput) -> Result<HttpRequest> {
        input.validate()?;
        let business_id = input.business_id.to_string();
        Ok(self
            .request(HttpMethod::Post, &["businesses", &business_id, "members"])?
            .json_content_type()
            .bearer()
            .json(input)?
            .build())
    }

    /// The response body is read but not interpreted.
    pub fn parse_add_member(&self, response: HttpResponse) -> Result<()> {
        expect_status(&response, 200)
    }

    pub fn add_member(&self, input: &AddMemberToBusinessAccountInput) -> Result<()>
    where
        T: Transport,
    {
        let request = self.build_add_member(input)?;
        self.parse_add_member(self.send(&request)?)
    }

    pub fn build_remove_member(&self, business_id: Uuid, member_id: Uuid) -> Result<HttpRequest> {
        validate::member_removal(business_id, member_id)?;
        let business_id = business_id.to_string();
        let member_id = member_id.to_string();
        Ok(self
            .request(
                HttpMethod::Delete,
                &["api", "businesses", &business_id, "members", &member_id],
            )?
            .json_content_type()
            .bearer()
            .build())
    }

    pub fn parse_remove_member(&self, response: HttpResponse) -> Result<()> {
        expect_status(&response, 200)
    }

    pub fn remove_member(&self, business_id: Uuid, member_id: Uuid) -> Result<()>
    where
        T: Transport,
    {
        let request = self.build_remove_member(business_id, member_id)?;
        self.parse_remove_member(self.send(&request)?)
    }

    pub fn build_list_members(&self, business_id: Uuid) -> Result<HttpRequest> {
        let business_id = business_id.to_string();
        Ok(self
            .request(HttpMethod::Get, &["api", "v1", "businesses", &business_id, "members"])?
            .json_content_type()
            .bearer()
            .build())
    }

    /// Unlike every other operation, any status below 400 counts as success.
    pub fn parse_list_members(&self, response: HttpResponse) -> Result<Vec<AccountMembership>> {
        expect_success(&response)?;
        decode_list(&response)
    }

    pub fn list_members(&self, business_id: Uuid) -> Result<Vec<AccountMembership>>
    where
        T: Transport,
    {
        let request = self.build_list_members(business_id)?;
        self.parse_list_members(self.send(&request)?)
    }

    /// Sends an `UpdateAccountMembershipEvent` rather than the input itself.
    pub fn build_update_member_role(&self, input: &UpdateMemberRoleInput) -> Result<HttpRequest> {
        input.validate()?;
        let business_id = input.business_id.to_string();
        let member_id = input.member_user_id.to_string();
        let event = UpdateAccountMembershipEvent::from(input);
        Ok(self
            .request(
                HttpMethod::Put,
                &["api", "v1", "businesses", &business_id, "members", &member_id],
            )?
            .json_content_type()
            .bearer()
            .json(&event)?
            .build())
    }

    pub fn parse_update_member_role(&self, response: HttpResponse) -> Result<()> {
        expect_status(&response, 200)
    }

    pub fn update_member_role(&self, input: &UpdateMemberRoleInput) -> Result<()>
    where
        T: Transport,
    {
        let request = self.build_update_member_role(input)?;
        self.parse_update_member_role(self.send(&request)?)
    }
}
