/// Person and company lookups by email address.
///
/// Both operations follow the same flow:
/// 1. Format `<endpoint>?email=<email>` (the email is not URL-escaped)
/// 2. Build a GET request through the client
/// 3. Execute it and decode the body into the expected record
use crate::client::Client;
use crate::errors::ClearbitError;
use crate::models::{EnrichmentResult, Person};
use reqwest::Method;

/// Combined person + company lookup.
pub const COMBINED_PATH: &str = "/v2/combined/find";

/// Person-only lookup.
pub const PERSON_PATH: &str = "/v2/people/find";

/// Read-only enrichment operations, borrowed from a [`Client`].
#[derive(Debug, Clone, Copy)]
pub struct EnrichmentService<'a> {
    client: &'a Client,
}

impl<'a> EnrichmentService<'a> {
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Looks up both the person and their company for `email`.
    ///
    /// The email is placed in the query string as-is; callers must not pass
    /// values containing `&`, `#` or other characters that would break it.
    pub async fn get_combined(&self, email: &str) -> Result<EnrichmentResult, ClearbitError> {
        let url = lookup_url(self.client.base_url(), COMBINED_PATH, email);
        let request = self.client.new_request::<()>(Method::GET, &url, None)?;
        self.client.execute(request).await
    }

    /// Looks up the person behind `email`.
    pub async fn get_person(&self, email: &str) -> Result<Person, ClearbitError> {
        let url = lookup_url(self.client.base_url(), PERSON_PATH, email);
        let request = self.client.new_request::<()>(Method::GET, &url, None)?;
        self.client.execute(request).await
    }
}

fn lookup_url(base_url: &str, path: &str, email: &str) -> String {
    format!("{}{}?email={}", base_url, path, email)
}
