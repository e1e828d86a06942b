pub mod parser;
pub mod record;
pub mod validator;

pub use parser::{parse_table, Row, Table};
pub use record::{ColumnNames, Record};
pub use validator::{row_number, validate_row, validate_rows, RowError};
