//! CRUD persistence for employees, roles and stock

use async_trait::async_trait;
use http::Method;
use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use shared::models::{Employee, EmployeeDraft, Role, RoleDraft, StockDraft, StockItem};

use crate::{ClientConfig, ClientError, ClientResult, DataClient, Params};

/// REST collection an entity lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Employees,
    Roles,
    Stock,
}

impl Resource {
    pub const fn path(&self) -> &'static str {
        match self {
            Resource::Employees => "api/employees",
            Resource::Roles => "api/roles",
            Resource::Stock => "api/stock",
        }
    }

    /// Code reported when the server does not know the entity
    pub const fn not_found_code(&self) -> ErrorCode {
        match self {
            Resource::Employees => ErrorCode::EmployeeNotFound,
            Resource::Roles => ErrorCode::RoleNotFound,
            Resource::Stock => ErrorCode::StockItemNotFound,
        }
    }
}

/// Draft that can be written to its collection
pub trait Persistable: Serialize + Send + Sync {
    const RESOURCE: Resource;

    /// `None` for a new entity
    fn id(&self) -> Option<i64>;
}

impl Persistable for EmployeeDraft {
    const RESOURCE: Resource = Resource::Employees;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Persistable for RoleDraft {
    const RESOURCE: Resource = Resource::Roles;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

impl Persistable for StockDraft {
    const RESOURCE: Resource = Resource::Stock;

    fn id(&self) -> Option<i64> {
        self.id
    }
}

/// Persistence callback injected into a form
#[async_trait]
pub trait Persist<D>: Send + Sync {
    async fn save(&self, draft: &D) -> Result<(), AppError>;
}

/// REST implementation of [`Persist`]
///
/// `POST {resource}` creates, `PUT {resource}/{id}` updates.
#[derive(Debug, Clone)]
pub struct CrudClient {
    client: DataClient,
}

impl CrudClient {
    pub fn new(client: DataClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(config.build_data_client()?))
    }

    pub async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.client
            .get(Resource::Employees.path(), &Params::new())
            .await
    }

    pub async fn list_roles(&self) -> ClientResult<Vec<Role>> {
        self.client.get(Resource::Roles.path(), &Params::new()).await
    }

    pub async fn list_stock(&self) -> ClientResult<Vec<StockItem>> {
        self.client.get(Resource::Stock.path(), &Params::new()).await
    }

    /// Create or update a draft
    pub async fn write<D: Persistable>(&self, draft: &D) -> ClientResult<()> {
        let resource = D::RESOURCE;
        match draft.id() {
            None => {
                self.client
                    .send_no_content(Method::POST, resource.path(), draft)
                    .await
            }
            Some(id) => {
                let path = format!("{}/{}", resource.path(), id);
                self.client.send_no_content(Method::PUT, &path, draft).await
            }
        }
    }
}

#[async_trait]
impl<D: Persistable + 'static> Persist<D> for CrudClient {
    async fn save(&self, draft: &D) -> Result<(), AppError> {
        let resource = D::RESOURCE;
        match self.write(draft).await {
            Ok(()) => {
                tracing::info!(resource = resource.path(), id = ?draft.id(), "Entity saved");
                Ok(())
            }
            Err(ClientError::Http { status: 404, .. }) => {
                tracing::warn!(resource = resource.path(), id = ?draft.id(), "Entity not found on save");
                Err(AppError::new(resource.not_found_code()))
            }
            Err(e) => {
                tracing::warn!(resource = resource.path(), error = %e, "Failed to save entity");
                Err(AppError::save_failed(e.to_string()).with_detail("cause", e.code().code()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::tests::CannedHttp;

    #[tokio::test]
    async fn test_lists_read_their_collection() {
        let http = CannedHttp::body(
            r#"[{"id": 2, "role_name": "Barista", "seniority": 3}]"#,
        );
        let roles = CrudClient::new(DataClient::new(http.clone()))
            .list_roles()
            .await
            .unwrap();
        assert_eq!(roles[0].role_name, "Barista");
        assert_eq!(http.seen.lock().unwrap()[0].0, "api/roles");

        let http = CannedHttp::body(
            r#"[{"id": 7, "item_name": "Cups", "quantity": 40, "unit_cost": 0.05}]"#,
        );
        let stock = CrudClient::new(DataClient::new(http.clone()))
            .list_stock()
            .await
            .unwrap();
        assert_eq!(stock[0].quantity, 40);
        assert_eq!(http.seen.lock().unwrap()[0].0, "api/stock");

        let http = CannedHttp::body(
            r#"[{"id": 1, "first_name": "Ana", "last_name": "Ruiz", "email": "ana@pos.test", "branch": "North"}]"#,
        );
        let employees = CrudClient::new(DataClient::new(http.clone()))
            .list_employees()
            .await
            .unwrap();
        assert!(employees[0].is_active);
        assert_eq!(http.seen.lock().unwrap()[0].0, "api/employees");
    }

    #[tokio::test]
    async fn test_list_decode_failure_is_reported() {
        let crud = CrudClient::new(DataClient::new(CannedHttp::body(r#"{"rows": []}"#)));
        let err = crud.list_employees().await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnexpectedShape);
    }

    #[tokio::test]
    async fn test_new_draft_is_posted() {
        let http = CannedHttp::body("");
        let crud = CrudClient::new(DataClient::new(http.clone()));
        let draft = RoleDraft {
            role_name: "Barista".into(),
            ..RoleDraft::default()
        };
        crud.save(&draft).await.unwrap();

        let seen = http.seen.lock().unwrap();
        let (path, params) = &seen[0];
        assert_eq!(path, "api/roles");
        assert_eq!(params.get("method").map(String::as_str), Some("POST"));
        assert!(params["body"].contains("\"role_name\":\"Barista\""));
    }

    #[tokio::test]
    async fn test_existing_draft_is_put() {
        let http = CannedHttp::body("{}");
        let crud = CrudClient::new(DataClient::new(http.clone()));
        let draft = StockDraft {
            id: Some(12),
            item_name: "Oat milk".into(),
            ..StockDraft::default()
        };
        crud.save(&draft).await.unwrap();

        let seen = http.seen.lock().unwrap();
        assert_eq!(seen[0].0, "api/stock/12");
        assert_eq!(seen[0].1.get("method").map(String::as_str), Some("PUT"));
    }

    #[tokio::test]
    async fn test_save_errors_map_to_app_errors() {
        let crud = CrudClient::new(DataClient::new(CannedHttp::error(ClientError::Http {
            status: 404,
            body: String::new(),
        })));
        let draft = EmployeeDraft {
            id: Some(3),
            ..EmployeeDraft::default()
        };
        let err = crud.save(&draft).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);

        let crud = CrudClient::new(DataClient::new(CannedHttp::error(ClientError::Timeout)));
        let err = crud.save(&RoleDraft::default()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SaveFailed);
        assert_eq!(err.detail("cause"), Some(&serde_json::json!(3002)));
    }
}
