use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use validator::Validate;

use crate::provisioning::{
    domain::{
        model::{
            commands::{
                start_create_command::StartCreateCommand,
                start_delete_command::StartDeleteCommand,
            },
            entities::provisioning_operation::ProvisioningOperation,
            enums::provisioning_domain_error::ProvisioningDomainError,
            queries::{
                describe_resource_query::DescribeResourceQuery,
                list_operations_query::ListOperationsQuery,
                operation_status_query::OperationStatusQuery,
            },
        },
        services::{
            provisioning_command_service::ProvisioningCommandService,
            provisioning_query_service::ProvisioningQueryService,
        },
    },
    interfaces::rest::resources::{
        create_resource_request_resource::CreateResourceRequestResource,
        error_response_resource::ErrorResponseResource,
        operation_accepted_resource::OperationAcceptedResource,
        operation_status_resource::{ListOperationsQueryResource, OperationStatusResource},
        resource_descriptor_resource::ResourceDescriptorResource,
    },
};

#[derive(Clone)]
pub struct ProvisioningRestControllerState {
    pub command_service: Arc<dyn ProvisioningCommandService>,
    pub query_service: Arc<dyn ProvisioningQueryService>,
}

pub fn router(state: ProvisioningRestControllerState) -> Router {
    Router::new()
        .route("/resource", post(create_resource))
        .route("/resource/:resource_name", get(describe_resource))
        .route("/resource/:resource_name", delete(delete_resource))
        .route("/operations", get(list_operations))
        .route("/operations/:operation_id", get(get_operation_status))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/resource",
    tag = "provisioning",
    request_body = CreateResourceRequestResource,
    responses(
        (status = 202, description = "Provisioning accepted", body = OperationAcceptedResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 409, description = "An operation for this resource is already in flight", body = ErrorResponseResource),
        (status = 502, description = "Cloud provider failure", body = ErrorResponseResource)
    )
)]
pub async fn create_resource(
    State(state): State<ProvisioningRestControllerState>,
    Json(request): Json<CreateResourceRequestResource>,
) -> Result<(StatusCode, Json<OperationAcceptedResource>), (StatusCode, Json<ErrorResponseResource>)>
{
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    let command = StartCreateCommand::new(
        request.resource_name,
        request.location,
        request.api_kind.unwrap_or_else(|| "sql".to_string()),
    )
    .map_err(map_domain_error)?;

    let operation = state
        .command_service
        .start_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::ACCEPTED,
        Json(to_accepted_resource(&operation)),
    ))
}

#[utoipa::path(
    delete,
    path = "/resource/{resource_name}",
    tag = "provisioning",
    params(("resource_name" = String, Path, description = "Managed database account name")),
    responses(
        (status = 202, description = "Deletion accepted", body = OperationAcceptedResource),
        (status = 400, description = "Invalid resource name", body = ErrorResponseResource),
        (status = 404, description = "No such account", body = ErrorResponseResource),
        (status = 409, description = "An operation for this resource is already in flight", body = ErrorResponseResource),
        (status = 502, description = "Cloud provider failure", body = ErrorResponseResource)
    )
)]
pub async fn delete_resource(
    State(state): State<ProvisioningRestControllerState>,
    Path(resource_name): Path<String>,
) -> Result<(StatusCode, Json<OperationAcceptedResource>), (StatusCode, Json<ErrorResponseResource>)>
{
    let command = StartDeleteCommand::new(resource_name).map_err(map_domain_error)?;

    let operation = state
        .command_service
        .start_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::ACCEPTED,
        Json(to_accepted_resource(&operation)),
    ))
}

#[utoipa::path(
    get,
    path = "/resource/{resource_name}",
    tag = "provisioning",
    params(("resource_name" = String, Path, description = "Managed database account name")),
    responses(
        (status = 200, description = "Current account descriptor", body = ResourceDescriptorResource),
        (status = 400, description = "Invalid resource name", body = ErrorResponseResource),
        (status = 404, description = "No such account", body = ErrorResponseResource),
        (status = 502, description = "Cloud provider failure", body = ErrorResponseResource)
    )
)]
pub async fn describe_resource(
    State(state): State<ProvisioningRestControllerState>,
    Path(resource_name): Path<String>,
) -> Result<Json<ResourceDescriptorResource>, (StatusCode, Json<ErrorResponseResource>)> {
    let query = DescribeResourceQuery::new(resource_name).map_err(map_domain_error)?;

    let descriptor = state
        .query_service
        .handle_describe(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ResourceDescriptorResource {
        resource_name: descriptor.resource_name,
        location: descriptor.location,
        api_kind: descriptor.api_kind.as_str().to_string(),
        provisioning_state: descriptor.provisioning_state,
        document_endpoint: descriptor.document_endpoint,
    }))
}

#[utoipa::path(
    get,
    path = "/operations/{operation_id}",
    tag = "provisioning",
    params(("operation_id" = String, Path, description = "Operation identifier")),
    responses(
        (status = 200, description = "Operation status", body = OperationStatusResource),
        (status = 400, description = "Malformed operation id", body = ErrorResponseResource),
        (status = 404, description = "Unknown operation", body = ErrorResponseResource)
    )
)]
pub async fn get_operation_status(
    State(state): State<ProvisioningRestControllerState>,
    Path(operation_id): Path<String>,
) -> Result<Json<OperationStatusResource>, (StatusCode, Json<ErrorResponseResource>)> {
    let query = OperationStatusQuery::new(operation_id).map_err(map_domain_error)?;

    let operation = state
        .query_service
        .handle_status(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(to_status_resource(&operation)))
}

#[utoipa::path(
    get,
    path = "/operations",
    tag = "provisioning",
    params(("include_finished" = Option<bool>, Query, description = "Include operations that already reached a terminal state")),
    responses(
        (status = 200, description = "Tracked operations", body = [OperationStatusResource])
    )
)]
pub async fn list_operations(
    State(state): State<ProvisioningRestControllerState>,
    Query(query): Query<ListOperationsQueryResource>,
) -> Result<Json<Vec<OperationStatusResource>>, (StatusCode, Json<ErrorResponseResource>)> {
    let query = ListOperationsQuery::new(query.include_finished.unwrap_or(false));
    let operations = state
        .query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?;

    let payload = operations
        .iter()
        .map(to_status_resource)
        .collect();

    Ok(Json(payload))
}

fn to_accepted_resource(operation: &ProvisioningOperation) -> OperationAcceptedResource {
    OperationAcceptedResource {
        operation_id: operation.id().value().to_string(),
        resource_name: operation.resource_name().value().to_string(),
        state: operation.state().as_str().to_string(),
    }
}

fn to_status_resource(operation: &ProvisioningOperation) -> OperationStatusResource {
    OperationStatusResource {
        operation_id: operation.id().value().to_string(),
        kind: operation.kind().as_str().to_string(),
        resource_name: operation.resource_name().value().to_string(),
        state: operation.state().as_str().to_string(),
        error_detail: operation.error_detail().map(str::to_string),
        notified: operation.notified(),
        created_at: operation.created_at().to_rfc3339(),
        updated_at: operation.updated_at().to_rfc3339(),
    }
}

fn map_domain_error(error: ProvisioningDomainError) -> (StatusCode, Json<ErrorResponseResource>) {
    let status = match error {
        ProvisioningDomainError::InvalidResourceName
        | ProvisioningDomainError::InvalidLocation
        | ProvisioningDomainError::InvalidApiKind
        | ProvisioningDomainError::InvalidOperationId
        | ProvisioningDomainError::InvalidStateTransition => StatusCode::BAD_REQUEST,
        ProvisioningDomainError::OperationConflict => StatusCode::CONFLICT,
        ProvisioningDomainError::OperationNotFound
        | ProvisioningDomainError::ResourceNotFound => StatusCode::NOT_FOUND,
        ProvisioningDomainError::Upstream(_) => StatusCode::BAD_GATEWAY,
    };

    (
        status,
        Json(ErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
