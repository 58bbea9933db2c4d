pub mod ui_egui;
