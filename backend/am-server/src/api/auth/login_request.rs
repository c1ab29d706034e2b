use am_auth::LoginRequest;

use serde::Deserialize;

/// POST /api/auth/login body. Both fields are optional so that a missing
/// field produces the login error rather than a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

impl From<LoginRequestBody> for LoginRequest {
    fn from(body: LoginRequestBody) -> Self {
        Self {
            email: body.email,
            password: body.password,
        }
    }
}
