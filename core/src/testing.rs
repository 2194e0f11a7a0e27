use std::sync::Mutex;

use crate::client::AccountsClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

pub(crate) const BASE_URL: &str = "http://localhost:3000";

/// Answers every request with the same response and remembers what it saw.
pub(crate) struct Canned {
    response: HttpResponse,
    seen: Mutex<Vec<HttpRequest>>,
}

impl Canned {
    pub(crate) fn new(status: u16, body: &str) -> Self {
        Self {
            response: HttpResponse::new(status, body),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl Transport for Canned {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

pub(crate) fn client(transport: &Canned) -> AccountsClient<&Canned> {
    let config = ClientConfig::new(BASE_URL, "tok", "key").unwrap();
    AccountsClient::with_transport(config, transport)
}

pub(crate) fn header_names(request: &HttpRequest) -> Vec<&str> {
    request.headers.iter().map(|(k, _)| k.as_str()).collect()
}
