//! HTTP implementation of [`RecordsApi`] backed by reqwest.
//!
//! The API base is injected at construction (no free-floating global), so
//! tests and alternate deployments can point the client elsewhere.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

use acadmin_common::{hyperlink, AdminError, Result};
use acadmin_config::ApiConfig;

use crate::api::RecordsApi;
use crate::models::{
    Cohort, Degree, Grade, Module, NewCohort, NewDegree, NewGrade, NewModule, NewStudent,
    Resource, Student,
};

#[derive(Debug, Clone)]
pub struct RecordsClient {
    http: Client,
    base: String,
}

impl RecordsClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Url::parse(&config.base_url)
            .map_err(|e| AdminError::Config(format!("invalid api base_url: {e}")))?;
        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn collection_url(&self, resource: Resource) -> String {
        format!("{}/{}/", self.base, resource.as_str())
    }

    fn item_url(&self, resource: Resource, id: &str) -> String {
        format!("{}/{}/{}/", self.base, resource.as_str(), id)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        let resp = self.http.get(url).query(query).send().await?;
        Self::decode(resp).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        let resp = self.http.post(url).json(body).send().await?;
        Self::decode(resp).await
    }

    /// Decode a response body, or turn a non-2xx answer into a structured
    /// failure. The error body falls back to an empty object when the API
    /// sends something that is not JSON.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            let detail = serde_json::from_str(&text)
                .unwrap_or_else(|_| serde_json::Value::Object(Default::default()));
            return Err(AdminError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
                detail,
            });
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl RecordsApi for RecordsClient {
    #[instrument(skip(self))]
    async fn list_degrees(&self) -> Result<Vec<Degree>> {
        let degrees: Vec<Degree> = self
            .get_json(&self.collection_url(Resource::Degree), &[])
            .await?;
        debug!(count = degrees.len(), "fetched degrees");
        Ok(degrees)
    }

    #[instrument(skip(self, new))]
    async fn create_degree(&self, new: &NewDegree) -> Result<Degree> {
        self.post_json(&self.collection_url(Resource::Degree), new).await
    }

    #[instrument(skip(self))]
    async fn list_cohorts(&self, degree: Option<&str>) -> Result<Vec<Cohort>> {
        let mut query = Vec::new();
        if let Some(shortcode) = degree {
            query.push(("degree", shortcode));
        }
        let cohorts: Vec<Cohort> = self
            .get_json(&self.collection_url(Resource::Cohort), &query)
            .await?;
        debug!(count = cohorts.len(), "fetched cohorts");
        Ok(cohorts)
    }

    #[instrument(skip(self, new))]
    async fn create_cohort(&self, new: &NewCohort) -> Result<Cohort> {
        self.post_json(&self.collection_url(Resource::Cohort), new).await
    }

    #[instrument(skip(self))]
    async fn list_modules(&self, delivered_to: Option<&str>) -> Result<Vec<Module>> {
        let mut query = Vec::new();
        if let Some(cohort_id) = delivered_to {
            query.push(("delivered_to", cohort_id));
        }
        let modules: Vec<Module> = self
            .get_json(&self.collection_url(Resource::Module), &query)
            .await?;
        debug!(count = modules.len(), "fetched modules");
        Ok(modules)
    }

    #[instrument(skip(self))]
    async fn get_module(&self, code: &str) -> Result<Module> {
        self.get_json(&self.item_url(Resource::Module, code), &[]).await
    }

    #[instrument(skip(self, new))]
    async fn create_module(&self, new: &NewModule) -> Result<Module> {
        self.post_json(&self.collection_url(Resource::Module), new).await
    }

    #[instrument(skip(self))]
    async fn list_students(&self, cohort: Option<&str>) -> Result<Vec<Student>> {
        let mut query = Vec::new();
        if let Some(cohort_id) = cohort {
            query.push(("cohort", cohort_id));
        }
        let students: Vec<Student> = self
            .get_json(&self.collection_url(Resource::Student), &query)
            .await?;
        debug!(count = students.len(), "fetched students");
        Ok(students)
    }

    #[instrument(skip(self))]
    async fn get_student(&self, student_id: &str) -> Result<Student> {
        self.get_json(&self.item_url(Resource::Student, student_id), &[])
            .await
    }

    #[instrument(skip(self, new))]
    async fn create_student(&self, new: &NewStudent) -> Result<Student> {
        self.post_json(&self.collection_url(Resource::Student), new).await
    }

    #[instrument(skip(self))]
    async fn list_grades(
        &self,
        student: Option<&str>,
        module: Option<&str>,
    ) -> Result<Vec<Grade>> {
        let mut query = Vec::new();
        if let Some(student_id) = student {
            query.push(("student", student_id));
        }
        if let Some(code) = module {
            query.push(("module", code));
        }
        let grades: Vec<Grade> = self
            .get_json(&self.collection_url(Resource::Grade), &query)
            .await?;
        debug!(count = grades.len(), "fetched grades");
        Ok(grades)
    }

    #[instrument(skip(self, new))]
    async fn create_grade(&self, new: &NewGrade) -> Result<Grade> {
        self.post_json(&self.collection_url(Resource::Grade), new).await
    }

    fn reference(&self, resource: Resource, id: &str) -> String {
        hyperlink::reference(&self.base, resource.as_str(), id)
    }
}
