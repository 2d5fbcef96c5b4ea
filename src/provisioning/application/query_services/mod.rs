pub mod provisioning_query_service_impl;
