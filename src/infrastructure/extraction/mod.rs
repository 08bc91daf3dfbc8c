mod composite_extractor;
mod csv_adapter;
mod markdown_table;
mod pdf_adapter;
mod spreadsheet_adapter;

pub use composite_extractor::CompositeExtractor;
pub use csv_adapter::CsvAdapter;
pub use markdown_table::render_markdown_table;
pub use pdf_adapter::PdfAdapter;
pub use spreadsheet_adapter::SpreadsheetAdapter;
