use crate::error::AppError;
use crate::presentation::common::Pagination;
use crate::presentation::withdrawal::{
    ApproveRequest, BulkWithdrawalRequest, BulkWithdrawalRequestCreate, CancelRequest,
    ExitRecord, ExitRecordCreate, MotiveCreate, MotiveUpdate, RejectRequest, WithdrawalMotive,
    WithdrawalRequest, WithdrawalRequestCreate, WithdrawalRequestUpdate,
};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the early withdrawal service
///
/// Covers the motive catalog, individual and bulk requests, the regent
/// decision and the registration of the actual departure.
#[async_trait]
pub trait WithdrawalService: Send + Sync {
    /// Lists motives
    async fn list_motives(&self, pagination: &Pagination)
    -> Result<Vec<WithdrawalMotive>, AppError>;

    /// Lists active motives
    async fn list_active_motives(&self) -> Result<Vec<WithdrawalMotive>, AppError>;

    /// Creates a motive
    async fn create_motive(&self, data: &MotiveCreate) -> Result<WithdrawalMotive, AppError>;

    /// Updates a motive
    async fn update_motive(
        &self,
        id: i64,
        data: &MotiveUpdate,
    ) -> Result<WithdrawalMotive, AppError>;

    /// Deletes a motive
    async fn delete_motive(&self, id: i64) -> Result<(), AppError>;

    /// Lists individual requests
    async fn list_requests(&self, pagination: &Pagination)
    -> Result<Vec<WithdrawalRequest>, AppError>;

    /// Requests created by the logged-in user
    async fn my_requests(&self) -> Result<Vec<WithdrawalRequest>, AppError>;

    /// Gets one individual request
    async fn get_request(&self, id: i64) -> Result<WithdrawalRequest, AppError>;

    /// Requests waiting for reception
    async fn pending_requests(&self) -> Result<Vec<WithdrawalRequest>, AppError>;

    /// Requests forwarded to the logged-in regent
    async fn forwarded_to_me(&self) -> Result<Vec<WithdrawalRequest>, AppError>;

    /// Creates an individual request
    async fn create_request(
        &self,
        data: &WithdrawalRequestCreate,
    ) -> Result<WithdrawalRequest, AppError>;

    /// Updates an individual request
    async fn update_request(
        &self,
        id: i64,
        data: &WithdrawalRequestUpdate,
    ) -> Result<WithdrawalRequest, AppError>;

    /// Cancels an individual request
    async fn cancel_request(
        &self,
        id: i64,
        data: &CancelRequest,
    ) -> Result<WithdrawalRequest, AppError>;

    /// Forwards an individual request to a regent
    async fn forward_request(
        &self,
        id: i64,
        observacion: Option<&str>,
    ) -> Result<WithdrawalRequest, AppError>;

    /// Approves an individual request
    async fn approve_request(&self, id: i64, data: ApproveRequest) -> Result<Value, AppError>;

    /// Rejects an individual request
    async fn reject_request(&self, id: i64, data: RejectRequest) -> Result<Value, AppError>;

    /// Records the departure of the student of an approved request
    async fn register_exit(&self, id: i64, data: ExitRecordCreate)
    -> Result<ExitRecord, AppError>;

    /// Requests concerning one student
    async fn requests_for_student(
        &self,
        id_estudiante: i64,
    ) -> Result<Vec<WithdrawalRequest>, AppError>;

    /// Lists bulk requests
    async fn list_bulk_requests(
        &self,
        pagination: &Pagination,
    ) -> Result<Vec<BulkWithdrawalRequest>, AppError>;

    /// Bulk requests created by the logged-in user
    async fn my_bulk_requests(&self) -> Result<Vec<BulkWithdrawalRequest>, AppError>;

    /// Gets one bulk request
    async fn get_bulk_request(&self, id: i64) -> Result<BulkWithdrawalRequest, AppError>;

    /// Creates a bulk request
    async fn create_bulk_request(
        &self,
        data: &BulkWithdrawalRequestCreate,
    ) -> Result<BulkWithdrawalRequest, AppError>;

    /// Updates a bulk request
    async fn update_bulk_request(
        &self,
        id: i64,
        data: &WithdrawalRequestUpdate,
    ) -> Result<BulkWithdrawalRequest, AppError>;

    /// Cancels a bulk request
    async fn cancel_bulk_request(
        &self,
        id: i64,
        data: &CancelRequest,
    ) -> Result<BulkWithdrawalRequest, AppError>;

    /// Forwards a bulk request to a regent
    async fn forward_bulk_request(
        &self,
        id: i64,
        observacion: Option<&str>,
    ) -> Result<BulkWithdrawalRequest, AppError>;

    /// Approves a bulk request
    async fn approve_bulk_request(
        &self,
        id: i64,
        data: ApproveRequest,
    ) -> Result<BulkWithdrawalRequest, AppError>;

    /// Rejects a bulk request
    async fn reject_bulk_request(
        &self,
        id: i64,
        data: RejectRequest,
    ) -> Result<BulkWithdrawalRequest, AppError>;

    /// Records the departure of every student of an approved bulk request
    async fn register_bulk_exit(
        &self,
        id: i64,
        data: ExitRecordCreate,
    ) -> Result<Vec<ExitRecord>, AppError>;
}
