//! REST collaborator for the MyGoodLife backend.
//!
//! Every call is a plain JSON request; errors are mapped onto `AppError`
//! and never retried here.

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    AppError, AppErrorKind, AuthUser, CaseStudy, DashboardStats, LearningModule, PlanTemplate,
    QualityAlert, StudentSummary,
};

/// Collection names under `/api/`.
pub mod resources {
    pub const CASE_STUDIES: &str = "case-studies";
    pub const STUDENTS: &str = "students";
    pub const ALERTS: &str = "alerts";
    pub const LEARNING_MODULES: &str = "learning-modules";
    pub const PLAN_TEMPLATES: &str = "plan-templates";
}

/// Credentials posted to `/api/auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct SignInRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Thin JSON client bound to one backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        with_credentials(self.http.get(url))
    }

    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        with_credentials(self.http.post(url))
    }

    async fn send(&self, url: &str, request: reqwest::RequestBuilder) -> Result<reqwest::Response, AppError> {
        let response = request
            .send()
            .await
            .map_err(|e| AppError::unavailable(format!("request to {url} failed: {e}")))?;
        tracing::debug!(url = url, status = %response.status(), "api response");
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.url(path);
        let response = self.send(&url, self.get(&url)).await?;
        decode(&url, response).await
    }

    /// `GET /api/{resource}`, expecting a JSON array.
    pub async fn fetch_collection<T: DeserializeOwned>(&self, resource: &str) -> Result<Vec<T>, AppError> {
        self.get_json(&format!("/api/{resource}")).await
    }

    pub async fn list_case_studies(&self) -> Result<Vec<CaseStudy>, AppError> {
        self.fetch_collection(resources::CASE_STUDIES).await
    }

    pub async fn get_case_study(&self, id: &str) -> Result<CaseStudy, AppError> {
        self.get_json(&format!("/api/{}/{id}", resources::CASE_STUDIES))
            .await
    }

    pub async fn list_students(&self) -> Result<Vec<StudentSummary>, AppError> {
        self.fetch_collection(resources::STUDENTS).await
    }

    pub async fn get_student(&self, id: &str) -> Result<StudentSummary, AppError> {
        self.get_json(&format!("/api/{}/{id}", resources::STUDENTS)).await
    }

    pub async fn list_alerts(&self) -> Result<Vec<QualityAlert>, AppError> {
        self.fetch_collection(resources::ALERTS).await
    }

    pub async fn list_learning_modules(&self) -> Result<Vec<LearningModule>, AppError> {
        self.fetch_collection(resources::LEARNING_MODULES).await
    }

    pub async fn list_plan_templates(&self) -> Result<Vec<PlanTemplate>, AppError> {
        self.fetch_collection(resources::PLAN_TEMPLATES).await
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, AppError> {
        self.get_json("/api/dashboard/stats").await
    }

    /// The signed-in user, or `None` when the backend answers 401.
    pub async fn current_user(&self) -> Result<Option<AuthUser>, AppError> {
        match self.get_json::<AuthUser>("/api/auth/me").await {
            Ok(user) => Ok(Some(user)),
            Err(e) if e.kind == AppErrorKind::Unauthorized => Ok(None),
            Err(e) => Err(e),
        }
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthUser, AppError> {
        let url = self.url("/api/auth/login");
        let request = self.post(&url).json(&SignInRequest { email, password });
        let response = self.send(&url, request).await?;
        let user: AuthUser = decode(&url, response).await?;
        tracing::info!(user_id = %user.id, role = %user.role, "signed in");
        Ok(user)
    }

    pub async fn sign_out(&self) -> Result<(), AppError> {
        let url = self.url("/api/auth/logout");
        let response = self.send(&url, self.post(&url)).await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(error_from_response(&url, response).await)
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    request
}

async fn decode<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> Result<T, AppError> {
    if !response.status().is_success() {
        return Err(error_from_response(url, response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| AppError::internal(format!("invalid response from {url}: {e}")))
}

/// Prefer the backend's structured error body; fall back to the status code.
async fn error_from_response(url: &str, response: reqwest::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = AppError::from_response_body(&body)
        .unwrap_or_else(|| AppError::from_status(status.as_u16(), format!("{url} returned {status}")));
    tracing::warn!(url = url, status = %status, error = %err, "api request failed");
    err
}
