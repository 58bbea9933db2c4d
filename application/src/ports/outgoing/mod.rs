pub mod canvas_api;
