mod export_controller;

pub use export_controller::{
    configure_event_routes, configure_quote_routes, export_task_list_csv, generate_quote_pdf,
};
