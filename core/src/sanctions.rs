//! Sanctioned-country list used for compliance checks.

use chrono::Utc;
use uuid::Uuid;

use crate::client::{decode, expect_status, AccountsClient};
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::request::ApiKeyHeader;
use crate::transport::Transport;
use crate::types::{SanctionStatus, SanctionedCountry};
use crate::validate;

impl<T> AccountsClient<T> {
    pub fn build_is_country_sanctioned(&self, country_code: &str) -> Result<HttpRequest> {
        validate::country_code(country_code)?;
        Ok(self
            .request(HttpMethod::Get, &["api", "sanctions", "countries", country_code])?
            .json_content_type()
            .bearer()
            .api_key(ApiKeyHeader::Upper)
            .build())
    }

    pub fn parse_is_country_sanctioned(&self, response: HttpResponse) -> Result<bool> {
        expect_status(&response, 200)?;
        let status: SanctionStatus = decode(&response)?;
        Ok(status.is_sanctioned)
    }

    pub fn is_country_sanctioned(&self, country_code: &str) -> Result<bool>
    where
        T: Transport,
    {
        let request = self.build_is_country_sanctioned(country_code)?;
        self.parse_is_country_sanctioned(self.send(&request)?)
    }

    /// The body is a full `SanctionedCountry` record; the server assigns the
    /// id, so it goes out nil, and `added_at` is stamped with the current time.
    pub fn build_add_sanctioned_country(&self, country_code: &str, country_name: &str) -> Result<HttpRequest> {
        validate::country_code(country_code)?;
        validate::country_name(country_name)?;
        let record = SanctionedCountry {
            id: Uuid::nil(),
            country_code: country_code.to_string(),
            country_name: country_name.to_string(),
            added_at: Utc::now(),
        };
        Ok(self
            .request(HttpMethod::Post, &["api", "sanctioned-countries"])?
            .json_content_type()
            .bearer()
            .api_key(ApiKeyHeader::Upper)
            .json(&record)?
            .build())
    }

    pub fn parse_add_sanctioned_country(&self, response: HttpResponse) -> Result<()> {
        expect_status(&response, 200)
    }

    pub fn add_sanctioned_country(&self, country_code: &str, country_name: &str) -> Result<()>
    where
        T: Transport,
    {
        let request = self.build_add_sanctioned_country(country_code, country_name)?;
        self.parse_add_sanctioned_country(self.send(&request)?)
    }

    pub fn build_remove_sanctioned_country(&self, country_code: &str) -> Result<HttpRequest> {
        validate::country_code(country_code)?;
        Ok(self
            .request(HttpMethod::Delete, &["api", "sanctioned-countries", country_code])?
            .json_content_type()
            .bearer()
            .api_key(ApiKeyHeader::Upper)
            .build())
    }

    pub fn parse_remove_sanctioned_country(&self, response: HttpResponse) -> Result<()> {
        expect_status(&response, 200)
    }

    pub fn remove_sanctioned_country(&self, country_code: &str) -> Result<()>
    where
        T: Transport,
    {
        let request = self.build_remove_sanctioned_country(country_code)?;
        self.parse_remove_sanctioned_country(self.send(&request)?)
    }
}
