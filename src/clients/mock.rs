//! # Mock Network Client
//!
//! [`MockNetworkClient`] implements [`NetworkClient`] entirely in memory. Queue up
//! the responses a run should see, hand [`client()`](MockNetworkClient::client) to
//! the code under test, then check what was called.
//!
//! | Feature | MockNetworkClient | HttpNetworkClient |
//! |---------|-------------------|-------------------|
//! | **Speed** | Instant | Network round-trips |
//! | **Determinism** | 100% | Depends on the service |
//! | **Error Injection** | `return_err` | Hard |
//!
//! Expectations are consumed strictly in order. A call that does not match the
//! next expectation panics, which fails the test that made it.
//!
//! ```rust
//! use linkedin_connect::clients::mock::MockNetworkClient;
//! use linkedin_connect::clients::ClientError;
//! use linkedin_connect::domain::{Profile, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockNetworkClient::new();
//!     mock.expect_authenticate().return_ok();
//!     mock.expect_search().return_ok(vec![Profile::new("Jane", "jane")]);
//!     mock.expect_add_connection("jane").return_err(ClientError::Transport("reset".into()));
//!
//!     let client = mock.client();
//!     client.authenticate("me@example.com", "pw", false).await.unwrap();
//!     let found = client.search_people(&SearchQuery::not_connected("Rust", 5)).await.unwrap();
//!     assert_eq!(found.len(), 1);
//!     assert!(client.add_connection("jane", "hello", None).await.is_err());
//!
//!     mock.verify();
//! }
//! ```

use crate::clients::{ClientError, NetworkClient};
use crate::domain::{Profile, SearchQuery};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

// =============================================================================
// EXPECTATIONS
// =============================================================================

enum Expectation {
    Authenticate {
        response: Result<(), ClientError>,
    },
    Search {
        response: Result<Vec<Profile>, ClientError>,
    },
    AddConnection {
        public_id: String,
        response: Result<bool, ClientError>,
    },
    Unfollow {
        profile_urn: String,
        response: Result<bool, ClientError>,
    },
}

impl Expectation {
    fn describe(&self) -> String {
        match self {
            Expectation::Authenticate { .. } => "authenticate".to_string(),
            Expectation::Search { .. } => "search_people".to_string(),
            Expectation::AddConnection { public_id, .. } => format!("add_connection({})", public_id),
            Expectation::Unfollow { profile_urn, .. } => {
                format!("unfollow_connection({})", profile_urn)
            }
        }
    }
}

/// A call the mock received, with the arguments it was given.
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Authenticate {
        email: String,
        force_refresh: bool,
    },
    Search(SearchQuery),
    AddConnection {
        public_id: String,
        message: String,
        profile_urn: Option<String>,
    },
    Unfollow(String),
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    calls: Vec<MockCall>,
}

/// Scripted [`NetworkClient`] for tests.
#[derive(Clone, Default)]
pub struct MockNetworkClient {
    state: Arc<Mutex<MockState>>,
}

impl MockNetworkClient {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle for the code under test. All handles share one script.
    pub fn client(&self) -> Arc<dyn NetworkClient> {
        Arc::new(self.clone())
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, expectation: Expectation) {
        self.state().expectations.push_back(expectation);
    }

    /// Expects an `authenticate` call.
    pub fn expect_authenticate(&self) -> AuthenticateExpectation<'_> {
        AuthenticateExpectation { mock: self }
    }

    /// Expects a `search_people` call.
    pub fn expect_search(&self) -> SearchExpectation<'_> {
        SearchExpectation { mock: self }
    }

    /// Expects an `add_connection` call addressed to `public_id`.
    pub fn expect_add_connection(&self, public_id: impl Into<String>) -> AddConnectionExpectation<'_> {
        AddConnectionExpectation {
            mock: self,
            public_id: public_id.into(),
        }
    }

    /// Expects an `unfollow_connection` call for `profile_urn`.
    pub fn expect_unfollow(&self, profile_urn: impl Into<String>) -> UnfollowExpectation<'_> {
        UnfollowExpectation {
            mock: self,
            profile_urn: profile_urn.into(),
        }
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.state().calls.clone()
    }

    /// Messages sent with each `add_connection` call, in order.
    pub fn sent_messages(&self) -> Vec<String> {
        self.state()
            .calls
            .iter()
            .filter_map(|call| match call {
                MockCall::AddConnection { message, .. } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    /// Panics if any expectation was not consumed.
    pub fn verify(&self) {
        let state = self.state();
        if !state.expectations.is_empty() {
            let remaining: Vec<String> = state.expectations.iter().map(Expectation::describe).collect();
            panic!(
                "Not all expectations were met. {} remaining: {:?}",
                remaining.len(),
                remaining
            );
        }
    }

    fn next(&self, call: MockCall) -> Expectation {
        let mut state = self.state();
        state.calls.push(call.clone());
        match state.expectations.pop_front() {
            Some(expectation) => expectation,
            None => panic!("Unexpected call with no expectation left: {:?}", call),
        }
    }
}

/// Builder for `authenticate` expectations.
pub struct AuthenticateExpectation<'a> {
    mock: &'a MockNetworkClient,
}

impl AuthenticateExpectation<'_> {
    pub fn return_ok(self) {
        self.mock.push(Expectation::Authenticate { response: Ok(()) });
    }

    pub fn return_err(self, error: ClientError) {
        self.mock.push(Expectation::Authenticate {
            response: Err(error),
        });
    }
}

/// Builder for `search_people` expectations.
pub struct SearchExpectation<'a> {
    mock: &'a MockNetworkClient,
}

impl SearchExpectation<'_> {
    pub fn return_ok(self, profiles: Vec<Profile>) {
        self.mock.push(Expectation::Search {
            response: Ok(profiles),
        });
    }

    pub fn return_err(self, error: ClientError) {
        self.mock.push(Expectation::Search {
            response: Err(error),
        });
    }
}

/// Builder for `add_connection` expectations.
pub struct AddConnectionExpectation<'a> {
    mock: &'a MockNetworkClient,
    public_id: String,
}

impl AddConnectionExpectation<'_> {
    pub fn return_ok(self, accepted: bool) {
        self.mock.push(Expectation::AddConnection {
            public_id: self.public_id,
            response: Ok(accepted),
        });
    }

    pub fn return_err(self, error: ClientError) {
        self.mock.push(Expectation::AddConnection {
            public_id: self.public_id,
            response: Err(error),
        });
    }
}

/// Builder for `unfollow_connection` expectations.
pub struct UnfollowExpectation<'a> {
    mock: &'a MockNetworkClient,
    profile_urn: String,
}

impl UnfollowExpectation<'_> {
    pub fn return_ok(self, unfollowed: bool) {
        self.mock.push(Expectation::Unfollow {
            profile_urn: self.profile_urn,
            response: Ok(unfollowed),
        });
    }

    pub fn return_err(self, error: ClientError) {
        self.mock.push(Expectation::Unfollow {
            profile_urn: self.profile_urn,
            response: Err(error),
        });
    }
}

// =============================================================================
// TRAIT IMPLEMENTATION
// =============================================================================

#[async_trait]
impl NetworkClient for MockNetworkClient {
    async fn authenticate(
        &self,
        email: &str,
        _password: &str,
        force_refresh: bool,
    ) -> Result<(), ClientError> {
        let call = MockCall::Authenticate {
            email: email.to_string(),
            force_refresh,
        };
        match self.next(call) {
            Expectation::Authenticate { response } => response,
            other => panic!("Expected {}, got authenticate", other.describe()),
        }
    }

    async fn search_people(&self, query: &SearchQuery) -> Result<Vec<Profile>, ClientError> {
        match self.next(MockCall::Search(query.clone())) {
            Expectation::Search { response } => response,
            other => panic!("Expected {}, got search_people", other.describe()),
        }
    }

    async fn add_connection(
        &self,
        public_id: &str,
        message: &str,
        profile_urn: Option<&str>,
    ) -> Result<bool, ClientError> {
        let call = MockCall::AddConnection {
            public_id: public_id.to_string(),
            message: message.to_string(),
            profile_urn: profile_urn.map(str::to_string),
        };
        match self.next(call) {
            Expectation::AddConnection {
                public_id: expected,
                response,
            } => {
                assert_eq!(expected, public_id, "add_connection sent to the wrong profile");
                response
            }
            other => panic!("Expected {}, got add_connection({})", other.describe(), public_id),
        }
    }

    async fn unfollow_connection(&self, profile_urn: &str) -> Result<bool, ClientError> {
        match self.next(MockCall::Unfollow(profile_urn.to_string())) {
            Expectation::Unfollow {
                profile_urn: expected,
                response,
            } => {
                assert_eq!(expected, profile_urn, "unfollow_connection sent to the wrong profile");
                response
            }
            other => panic!(
                "Expected {}, got unfollow_connection({})",
                other.describe(),
                profile_urn
            ),
        }
    }
}
