pub mod assembler;
pub mod calculator;
pub mod exchange;
pub mod gas_oracle;
pub mod http;
pub mod numeric;

pub use assembler::ReportService;
pub use exchange::ExchangeService;
pub use gas_oracle::GasOracleService;
pub use http::{ApiPayload, HttpService};
