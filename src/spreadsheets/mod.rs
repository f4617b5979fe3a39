pub mod history_xlsx;

pub use history_xlsx::{history_workbook, history_xlsx_filename};
