//! Handlers for the commitment term attached to a contract.
//!
//! One term per contract. Uploading a second one is a conflict unless the
//! caller asks to replace it.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use internhub_core::commitment_term::{
    sanitize_filename, storage_filename, validate_term_upload, PDF_MIME_TYPE,
};
use internhub_core::error::CoreError;
use internhub_core::types::DbId;
use internhub_db::models::commitment_term::{CommitmentTerm, SaveCommitmentTerm};
use internhub_db::repositories::{CommitmentTermRepo, ContractRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the upload endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct UploadParams {
    /// Overwrite an existing term instead of failing with 409.
    #[serde(default)]
    pub replace: bool,
}

/// POST /api/v1/contracts/{contract_id}/commitment-term?replace=
///
/// Multipart upload with a single `file` field holding a PDF. Returns 201 for
/// the first term and 200 when an existing one was replaced.
pub async fn upload(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(contract_id): Path<DbId>,
    Query(params): Query<UploadParams>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<CommitmentTerm>>)> {
    ContractRepo::find_by_id(&state.pool, contract_id)
        .await?
        .ok_or(AppError::not_found("Contract", contract_id))?;

    let mut file_data: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file_data = Some((filename, data.to_vec()));
        }
    }
    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    validate_term_upload(&filename, &data)?;

    let existing = CommitmentTermRepo::find_by_contract(&state.pool, contract_id).await?;
    if existing.is_some() && !params.replace {
        return Err(CoreError::Conflict(format!(
            "Contract {contract_id} already has a commitment term. Pass replace=true to overwrite it"
        ))
        .into());
    }

    let stored_name = storage_filename(contract_id, &filename)?;
    let staged = state
        .terms
        .stage(&stored_name, &data)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store commitment term: {e}")))?;

    let input = SaveCommitmentTerm {
        contract_id,
        original_filename: filename,
        file_path: staged.target().to_string_lossy().into_owned(),
        mime_type: PDF_MIME_TYPE.to_string(),
        file_size_bytes: data.len() as i64,
    };

    // The file reaches its final path only once the row is written.
    let saved = if params.replace {
        CommitmentTermRepo::replace(&state.pool, &input).await
    } else {
        CommitmentTermRepo::create(&state.pool, &input).await
    };
    let term = match saved {
        Ok(term) => term,
        Err(e) => {
            if let Err(io_err) = state.terms.discard(staged).await {
                tracing::warn!(error = %io_err, contract_id, "Failed to discard staged term file");
            }
            return Err(e.into());
        }
    };

    state
        .terms
        .commit(staged)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store commitment term: {e}")))?;

    if let Some(previous) = &existing {
        if previous.file_path != term.file_path {
            if let Err(e) = state.terms.remove(std::path::Path::new(&previous.file_path)).await {
                tracing::warn!(error = %e, path = %previous.file_path, "Failed to remove replaced term file");
            }
        }
    }

    let status = if existing.is_some() {
        tracing::info!(contract_id, term_id = term.id, "Commitment term replaced");
        StatusCode::OK
    } else {
        tracing::info!(contract_id, term_id = term.id, "Commitment term uploaded");
        StatusCode::CREATED
    };
    Ok((status, Json(DataResponse { data: term })))
}

/// GET /api/v1/contracts/{contract_id}/commitment-term
pub async fn get_metadata(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(contract_id): Path<DbId>,
) -> AppResult<Json<DataResponse<CommitmentTerm>>> {
    let term = find_term(&state, contract_id).await?;
    Ok(Json(DataResponse { data: term }))
}

/// GET /api/v1/contracts/{contract_id}/commitment-term/file
///
/// Streams back the stored bytes as an attachment.
pub async fn download(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(contract_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let term = find_term(&state, contract_id).await?;

    let bytes = state
        .terms
        .read(std::path::Path::new(&term.file_path))
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                tracing::warn!(contract_id, path = %term.file_path, "Commitment term file missing on disk");
                AppError::not_found("CommitmentTerm", contract_id)
            }
            _ => AppError::InternalError(format!("Failed to read commitment term: {e}")),
        })?;

    let download_name =
        sanitize_filename(&term.original_filename).unwrap_or_else(|_| format!("contract_{contract_id}.pdf"));

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, term.mime_type),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{download_name}\""),
            ),
        ],
        bytes,
    ))
}

async fn find_term(state: &AppState, contract_id: DbId) -> AppResult<CommitmentTerm> {
    CommitmentTermRepo::find_by_contract(&state.pool, contract_id)
        .await?
        .ok_or(AppError::not_found("CommitmentTerm", contract_id))
}
