//! Business account operations.

use uuid::Uuid;

use crate::client::{decode, decode_list, expect_status, AccountsClient};
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::request::ApiKeyHeader;
use crate::transport::Transport;
use crate::types::{Business, CreateBusinessAccountInput, UpdateBusinessAccountInput};
use crate::validate::{self, Validate};

impl<T> AccountsClient<T> {
    pub fn build_create_business(&self, input: &CreateBusinessAccountInput) -> Result<HttpRequest> {
        input.validate()?;
        Ok(self
            .request(HttpMethod::Post, &["api", "v1", "business"])?
            .json_content_type()
            .bearer()
            .api_key(ApiKeyHeader::Title)
            .json(input)?
            .build())
    }

    pub fn parse_create_business(&self, response: HttpResponse) -> Result<Business> {
        expect_status(&response, 201)?;
        decode(&response)
    }

    /// Create a business account owned by `input.user_id`.
    pub fn create_business(&self, input: &CreateBusinessAccountInput) -> Result<Business>
    where
        T: Transport,
    {
        let request = self.build_create_business(input)?;
        self.parse_create_business(self.send(&request)?)
    }

    pub fn build_get_business(&self, id: Uuid) -> Result<HttpRequest> {
        let id = id.to_string();
        Ok(self
            .request(HttpMethod::Get, &["business", &id])?
            .bearer()
            .api_key(ApiKeyHeader::Upper)
            .build())
    }

    pub fn parse_get_business(&self, response: HttpResponse) -> Result<Business> {
        expect_status(&response, 200)?;
        decode(&response)
    }

    pub fn get_business(&self, id: Uuid) -> Result<Business>
    where
        T: Transport,
    {
        let request = self.build_get_business(id)?;
        self.parse_get_business(self.send(&request)?)
    }

    pub fn build_list_businesses_by_user(&self, user_id: Uuid) -> Result<HttpRequest> {
        let user_id = user_id.to_string();
        Ok(self
            .request(HttpMethod::Get, &["users", &user_id, "business_accounts"])?
            .json_content_type()
            .bearer()
            .build())
    }

    pub fn parse_list_businesses_by_user(&self, response: HttpResponse) -> Result<Vec<Business>> {
        expect_status(&response, 200)?;
        decode_list(&response)
    }

    /// Every business account owned by `user_id`.
    pub fn list_businesses_by_user(&self, user_id: Uuid) -> Result<Vec<Business>>
    where
        T: Transport,
    {
        let request = self.build_list_businesses_by_user(user_id)?;
        self.parse_list_businesses_by_user(self.send(&request)?)
    }

    /// The update endpoint sits directly under the base URL: `PUT /{businessID}`.
    pub fn build_update_business(&self, input: &UpdateBusinessAccountInput) -> Result<HttpRequest> {
        input.validate()?;
        let business_id = input.business_id.to_string();
        Ok(self
            .request(HttpMethod::Put, &[&business_id])?
            .json_content_type()
            .bearer()
            .api_key(ApiKeyHeader::Upper)
            .json(input)?
            .build())
    }

    pub fn parse_update_business(&self, response: HttpResponse) -> Result<()> {
        expect_status(&response, 200)
    }

    pub fn update_business(&self, input: &UpdateBusinessAccountInput) -> Result<()>
    where
        T: Transport,
    {
        let request = self.build_update_business(input)?;
        self.parse_update_business(self.send(&request)?)
    }

    /// Credentials are only attached when configured.
    pub fn build_delete_business(&self, id: Uuid) -> Result<HttpRequest> {
        validate::business_id(id)?;
        let id = id.to_string();
        Ok(self
            .request(HttpMethod::Delete, &["business", &id])?
            .bearer_if_present()
            .api_key_if_present(ApiKeyHeader::Title)
            .build())
    }

    pub fn parse_delete_business(&self, response: HttpResponse) -> Result<()> {
        expect_status(&response, 200)
    }

    pub fn delete_business(&self, id: Uuid) -> Result<()>
    where
        T: Transport,
    {
        let request = self.build_delete_business(id)?;
        self.parse_delete_business(self.send(&request)?)
    }

    pub fn build_list_businesses(&self) -> Result<HttpRequest> {
        Ok(self
            .request(HttpMethod::Get, &["business-accounts"])?
            .bearer()
            .api_key(ApiKeyHeader::Lower)
            .build())
    }

    pub fn parse_list_businesses(&self, response: HttpResponse) -> Result<Vec<Business>> {
        expect_status(&response, 200)?;
        decode_list(&response)
    }

    /// Every business account visible to the caller's credentials.
    pub fn list_businesses(&self) -> Result<Vec<Business>>
    where
        T: Transport,
    {
        let request = self.build_list_businesses()?;
        self.parse_list_businesses(self.send(&request)?)
    }
}
