//! In-memory transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use store::{AuthStore, MemoryStorage, SessionProvider, User};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Records every request and answers from a queue of canned responses.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    requests: Rc<RefCell<Vec<ApiRequest>>>,
    responses: Rc<RefCell<VecDeque<Result<ApiResponse, ApiError>>>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub(crate) fn fail(&self, reason: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Network(reason.to_string())));
    }

    pub(crate) fn request(&self, index: usize) -> ApiRequest {
        self.requests.borrow()[index].clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".into())))
    }
}

pub(crate) type TestClient = ApiClient<MockTransport, AuthStore<MemoryStorage>>;

pub(crate) fn user() -> User {
    User {
        id: 7,
        first_name: "Ana".into(),
        last_name: "Rojas".into(),
        email: "ana@example.com".into(),
        gender: "female".into(),
    }
}

pub(crate) fn client(transport: &MockTransport) -> TestClient {
    ApiClient::new(
        "https://api.test/",
        transport.clone(),
        AuthStore::load(MemoryStorage::new()),
    )
}

pub(crate) fn signed_in_client(transport: &MockTransport) -> TestClient {
    let api = client(transport);
    api.session().set_auth("tok-1".into(), user());
    api
}
