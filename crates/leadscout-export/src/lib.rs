pub mod csv_file;
pub mod error;
pub mod row;
pub mod sheets;

pub use csv_file::write_csv;
pub use error::ExportError;
pub use row::{record_to_row, HEADERS};
pub use sheets::SheetsClient;
