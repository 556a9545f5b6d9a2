//! Canned HTTP transport for unit tests.

use crate::domain::error::TransportError;
use crate::domain::ports::{HttpResponse, HttpTransport};
use async_trait::async_trait;
use reqwest::Url;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Transport that replays queued outcomes in order and records every URL.
pub(crate) struct StubTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, String>>>,
    requested: Mutex<Vec<String>>,
}

impl StubTransport {
    pub(crate) fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn respond(self, response: HttpResponse) -> Self {
        self.outcomes.lock().unwrap().push_back(Ok(response));
        self
    }

    pub(crate) fn respond_json(self, body: serde_json::Value) -> Self {
        self.respond(HttpResponse::new(200, body.to_string()))
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        self.outcomes
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    pub(crate) fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn get(&self, url: Url) -> Result<HttpResponse, TransportError> {
        self.requested.lock().unwrap().push(url.to_string());
        match self.outcomes.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(TransportError::new(message)),
            None => Err(TransportError::new("no canned response left")),
        }
    }
}
