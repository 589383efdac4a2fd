//! Scripted in-memory transport for tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::api::{ApiRequest, Method, Transport};
use crate::error::{ApiError, ApiResult};

/// Records every request and answers from per-route queues.
///
/// Unscripted routes answer 404.
#[derive(Default)]
pub struct MockTransport {
    requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<HashMap<(Method, String), VecDeque<ApiResult<Value>>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, path: &str, result: ApiResult<Value>) {
        self.responses
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(result);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// "METHOD /path" for each request, in order
    pub fn calls(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|r| format!("{} {}", r.method.as_str(), r.path))
            .collect()
    }
}

#[async_trait(?Send)]
impl Transport for Rc<MockTransport> {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        self.requests.borrow_mut().push(request.clone());
        self.responses
            .borrow_mut()
            .get_mut(&(request.method, request.path))
            .and_then(VecDeque::pop_front)
            .unwrap_or(Err(ApiError::Status { status: 404, error: None }))
    }
}
