use crate::jenkins::client::JenkinsFetch;
use crate::lens_error::LensError;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory jenkins keyed by endpoint. Unknown endpoints answer 404.
#[derive(Default)]
pub(crate) struct FakeJenkins {
    responses: HashMap<String, Result<String, u16>>,
    calls: Mutex<Vec<String>>,
}

impl FakeJenkins {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_ok(mut self, endpoint: &str, body: &str) -> Self {
        self.responses
            .insert(endpoint.to_string(), Ok(body.to_string()));
        self
    }

    pub(crate) fn with_status(mut self, endpoint: &str, status: u16) -> Self {
        self.responses.insert(endpoint.to_string(), Err(status));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl JenkinsFetch for FakeJenkins {
    async fn fetch(&self, _method: &str, endpoint: &str) -> Result<String, LensError> {
        self.calls.lock().unwrap().push(endpoint.to_string());

        match self.responses.get(endpoint) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(status)) => Err(LensError::HttpStatus {
                status: *status,
                message: String::new(),
                url: endpoint.to_string(),
            }),
            None => Err(LensError::HttpStatus {
                status: 404,
                message: "Not Found".to_string(),
                url: endpoint.to_string(),
            }),
        }
    }
}
