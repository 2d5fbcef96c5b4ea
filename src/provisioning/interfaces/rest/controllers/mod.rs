pub mod provisioning_rest_controller;
