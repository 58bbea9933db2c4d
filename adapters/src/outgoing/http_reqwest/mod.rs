pub mod canvas_api_reqwest;
pub mod headers;
