use axum::Router;
use cosmos_provisioner_api::{
    config::app_config::AppConfig,
    provisioning::{
        build_provisioning_router,
        interfaces::rest::resources::{
            create_resource_request_resource::CreateResourceRequestResource,
            error_response_resource::ErrorResponseResource,
            operation_accepted_resource::OperationAcceptedResource,
            operation_status_resource::{ListOperationsQueryResource, OperationStatusResource},
            resource_descriptor_resource::ResourceDescriptorResource,
        },
    },
};
use dotenvy::dotenv;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        cosmos_provisioner_api::provisioning::interfaces::rest::controllers::provisioning_rest_controller::create_resource,
        cosmos_provisioner_api::provisioning::interfaces::rest::controllers::provisioning_rest_controller::delete_resource,
        cosmos_provisioner_api::provisioning::interfaces::rest::controllers::provisioning_rest_controller::describe_resource,
        cosmos_provisioner_api::provisioning::interfaces::rest::controllers::provisioning_rest_controller::get_operation_status,
        cosmos_provisioner_api::provisioning::interfaces::rest::controllers::provisioning_rest_controller::list_operations
    ),
    components(
        schemas(
            CreateResourceRequestResource,
            ListOperationsQueryResource,
            OperationAcceptedResource,
            OperationStatusResource,
            ResourceDescriptorResource,
            ErrorResponseResource
        )
    ),
    tags(
        (name = "provisioning", description = "Managed database account provisioning bounded context")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env();

    let provisioning_router =
        build_provisioning_router(&config).expect("failed to build provisioning router");

    let app = Router::new()
        .merge(provisioning_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(port = config.port, "provisioning service listening");
    tracing::info!(
        "swagger ui available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
