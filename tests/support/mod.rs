pub mod askql_env;
pub mod stub_server;
