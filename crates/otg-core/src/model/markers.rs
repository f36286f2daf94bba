use serde::{Deserialize, Serialize};

/// Category of test an operation opts into, signaled by a fixed marker
/// substring in its description text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestType {
    IntegrationTest,
    LoadTest,
    SecurityTest,
    SqlTest,
}

impl TestType {
    /// All test types, in classification order.
    pub const ALL: [TestType; 4] = [
        TestType::IntegrationTest,
        TestType::LoadTest,
        TestType::SecurityTest,
        TestType::SqlTest,
    ];

    /// The marker substring associated with this test type.
    pub fn marker(&self) -> &'static str {
        match self {
            TestType::IntegrationTest => "@integrationtest",
            TestType::LoadTest => "@loadtest",
            TestType::SecurityTest => "@securitytest",
            TestType::SqlTest => "@sqlinjecttest",
        }
    }
}

/// Authentication regime an operation is exercised under, signaled the same
/// way as [`TestType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthenticationType {
    Administrator,
    Customer,
    ApiKey,
    Oauth2,
}

impl AuthenticationType {
    /// All authentication types, in classification order.
    pub const ALL: [AuthenticationType; 4] = [
        AuthenticationType::Administrator,
        AuthenticationType::Customer,
        AuthenticationType::ApiKey,
        AuthenticationType::Oauth2,
    ];

    /// The marker substring associated with this authentication type.
    pub fn marker(&self) -> &'static str {
        match self {
            AuthenticationType::Administrator => "@administrator",
            AuthenticationType::Customer => "@customer",
            AuthenticationType::ApiKey => "@apikey",
            AuthenticationType::Oauth2 => "@oauth2",
        }
    }
}
