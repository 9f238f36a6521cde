use crate::application::client::HttpClient;
use crate::application::interfaces::withdrawal::WithdrawalService;
use crate::error::AppError;
use crate::model::http::{QueryParams, build_query};
use crate::presentation::common::Pagination;
use crate::presentation::withdrawal::{
    ApproveRequest, BulkExit, BulkWithdrawalRequest, BulkWithdrawalRequestCreate, CancelRequest,
    Decision, ExitRecord, ExitRecordCreate, ForwardRequest, IndividualExit, MotiveCreate,
    MotiveUpdate, RejectRequest, WithdrawalMotive, WithdrawalRequest, WithdrawalRequestCreate,
    WithdrawalRequestUpdate,
};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

const MOTIVES: &str = "motivos-retiro";
const REQUESTS: &str = "retiros-tempranos/solicitudes";
const BULK_REQUESTS: &str = "retiros-tempranos/solicitudes-masivas";
const DECISIONS: &str = "autorizaciones-retiro";
const EXITS: &str = "retiros-tempranos/registros-salida";

/// Implementation of the early withdrawal service
pub struct WithdrawalServiceImpl {
    client: Arc<HttpClient>,
}

impl WithdrawalServiceImpl {
    /// Creates a new instance of the withdrawal service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

fn forward_body(observacion: Option<&str>) -> ForwardRequest {
    ForwardRequest {
        observacion_derivacion: observacion.map(str::to_string),
    }
}

#[async_trait]
impl WithdrawalService for WithdrawalServiceImpl {
    async fn list_motives(
        &self,
        pagination: &Pagination,
    ) -> Result<Vec<WithdrawalMotive>, AppError> {
        let path = format!("{MOTIVES}{}", build_query(&QueryParams::from(pagination)));
        self.client.get(&path).await
    }

    async fn list_active_motives(&self) -> Result<Vec<WithdrawalMotive>, AppError> {
        self.client.get(&format!("{MOTIVES}/activos")).await
    }

    async fn create_motive(&self, data: &MotiveCreate) -> Result<WithdrawalMotive, AppError> {
        info!("Creating withdrawal motive {}", data.nombre);
        self.client.post(&format!("{MOTIVES}/"), data).await
    }

    async fn update_motive(
        &self,
        id: i64,
        data: &MotiveUpdate,
    ) -> Result<WithdrawalMotive, AppError> {
        info!("Updating withdrawal motive {}", id);
        self.client.put(&format!("{MOTIVES}/{id}"), data).await
    }

    async fn delete_motive(&self, id: i64) -> Result<(), AppError> {
        info!("Deleting withdrawal motive {}", id);
        self.client.delete(&format!("{MOTIVES}/{id}")).await?;
        Ok(())
    }

    async fn list_requests(
        &self,
        pagination: &Pagination,
    ) -> Result<Vec<WithdrawalRequest>, AppError> {
        let path = format!("{REQUESTS}{}", build_query(&QueryParams::from(pagination)));
        let requests = self
            .client
            .get_listing::<WithdrawalRequest>(&path, "solicitudes")
            .await?
            .into_items();
        debug!("Withdrawal requests obtained: {}", requests.len());
        Ok(requests)
    }

    async fn my_requests(&self) -> Result<Vec<WithdrawalRequest>, AppError> {
        self.client
            .get(&format!("{REQUESTS}/mis-solicitudes"))
            .await
    }

    async fn get_request(&self, id: i64) -> Result<WithdrawalRequest, AppError> {
        self.client.get(&format!("{REQUESTS}/{id}")).await
    }

    async fn pending_requests(&self) -> Result<Vec<WithdrawalRequest>, AppError> {
        self.client.get(&format!("{REQUESTS}/pendientes")).await
    }

    async fn forwarded_to_me(&self) -> Result<Vec<WithdrawalRequest>, AppError> {
        self.client.get(&format!("{REQUESTS}/derivadas-a-mi")).await
    }

    async fn create_request(
        &self,
        data: &WithdrawalRequestCreate,
    ) -> Result<WithdrawalRequest, AppError> {
        info!("Creating withdrawal request for student {}", data.id_estudiante);
        self.client.post(&format!("{REQUESTS}/"), data).await
    }

    async fn update_request(
        &self,
        id: i64,
        data: &WithdrawalRequestUpdate,
    ) -> Result<WithdrawalRequest, AppError> {
        self.client.put(&format!("{REQUESTS}/{id}"), data).await
    }

    async fn cancel_request(
        &self,
        id: i64,
        data: &CancelRequest,
    ) -> Result<WithdrawalRequest, AppError> {
        info!("Cancelling withdrawal request {}", id);
        self.client
            .put(&format!("{REQUESTS}/{id}/cancelar"), data)
            .await
    }

    async fn forward_request(
        &self,
        id: i64,
        observacion: Option<&str>,
    ) -> Result<WithdrawalRequest, AppError> {
        info!("Forwarding withdrawal request {}", id);
        self.client
            .put(&format!("{REQUESTS}/{id}/derivar"), &forward_body(observacion))
            .await
    }

    async fn approve_request(&self, id: i64, data: ApproveRequest) -> Result<Value, AppError> {
        info!("Approving withdrawal request {}", id);
        self.client
            .put(&format!("{DECISIONS}/{id}/decision"), &Decision::from(data))
            .await
    }

    async fn reject_request(&self, id: i64, data: RejectRequest) -> Result<Value, AppError> {
        info!("Rejecting withdrawal request {}", id);
        self.client
            .put(&format!("{DECISIONS}/{id}/decision"), &Decision::from(data))
            .await
    }

    async fn register_exit(
        &self,
        id: i64,
        data: ExitRecordCreate,
    ) -> Result<ExitRecord, AppError> {
        info!("Registering exit for withdrawal request {}", id);
        let body = IndividualExit {
            id_solicitud: id,
            data,
        };
        self.client.post(&format!("{EXITS}/individual"), &body).await
    }

    async fn requests_for_student(
        &self,
        id_estudiante: i64,
    ) -> Result<Vec<WithdrawalRequest>, AppError> {
        self.client
            .get(&format!("{REQUESTS}/estudiante/{id_estudiante}"))
            .await
    }

    async fn list_bulk_requests(
        &self,
        pagination: &Pagination,
    ) -> Result<Vec<BulkWithdrawalRequest>, AppError> {
        let path = format!(
            "{BULK_REQUESTS}{}",
            build_query(&QueryParams::from(pagination))
        );
        let requests = self
            .client
            .get_listing::<BulkWithdrawalRequest>(&path, "solicitudes")
            .await?
            .into_items();
        debug!("Bulk withdrawal requests obtained: {}", requests.len());
        Ok(requests)
    }

    async fn my_bulk_requests(&self) -> Result<Vec<BulkWithdrawalRequest>, AppError> {
        self.client
            .get(&format!("{BULK_REQUESTS}/mis-solicitudes"))
            .await
    }

    async fn get_bulk_request(&self, id: i64) -> Result<BulkWithdrawalRequest, AppError> {
        self.client.get(&format!("{BULK_REQUESTS}/{id}")).await
    }

    async fn create_bulk_request(
        &self,
        data: &BulkWithdrawalRequestCreate,
    ) -> Result<BulkWithdrawalRequest, AppError> {
        info!(
            "Creating bulk withdrawal request for {} students",
            data.estudiantes.len()
        );
        self.client.post(&format!("{BULK_REQUESTS}/"), data).await
    }

    async fn update_bulk_request(
        &self,
        id: i64,
        data: &WithdrawalRequestUpdate,
    ) -> Result<BulkWithdrawalRequest, AppError> {
        self.client.put(&format!("{BULK_REQUESTS}/{id}"), data).await
    }

    async fn cancel_bulk_request(
        &self,
        id: i64,
        data: &CancelRequest,
    ) -> Result<BulkWithdrawalRequest, AppError> {
        info!("Cancelling bulk withdrawal request {}", id);
        self.client
            .put(&format!("{BULK_REQUESTS}/{id}/cancelar"), data)
            .await
    }

    async fn forward_bulk_request(
        &self,
        id: i64,
        observacion: Option<&str>,
    ) -> Result<BulkWithdrawalRequest, AppError> {
        info!("Forwarding bulk withdrawal request {}", id);
        self.client
            .put(
                &format!("{BULK_REQUESTS}/{id}/derivar"),
                &forward_body(observacion),
            )
            .await
    }

    async fn approve_bulk_request(
        &self,
        id: i64,
        data: ApproveRequest,
    ) -> Result<BulkWithdrawalRequest, AppError> {
        info!("Approving bulk withdrawal request {}", id);
        self.client
            .put(
                &format!("{DECISIONS}/masiva/{id}/decision"),
                &Decision::from(data),
            )
            .await
    }

    async fn reject_bulk_request(
        &self,
        id: i64,
        data: RejectRequest,
    ) -> Result<BulkWithdrawalRequest, AppError> {
        info!("Rejecting bulk withdrawal request {}", id);
        self.client
            .put(
                &format!("{DECISIONS}/masiva/{id}/decision"),
                &Decision::from(data),
            )
            .await
    }

    async fn register_bulk_exit(
        &self,
        id: i64,
        data: ExitRecordCreate,
    ) -> Result<Vec<ExitRecord>, AppError> {
        info!("Registering exits for bulk withdrawal request {}", id);
        let body = BulkExit {
            id_solicitud_masiva: id,
            data,
        };
        self.client.post(&format!("{EXITS}/masivo"), &body).await
    }
}
