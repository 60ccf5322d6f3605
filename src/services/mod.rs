pub mod here_client;
