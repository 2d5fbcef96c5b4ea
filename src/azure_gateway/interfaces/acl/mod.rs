pub mod management_token_provider;
