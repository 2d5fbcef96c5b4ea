pub mod arm_cosmos_facade_impl;
pub mod entra_token_provider_impl;
