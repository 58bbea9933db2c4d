pub mod http_reqwest;
