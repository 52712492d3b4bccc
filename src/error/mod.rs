mod fx_error;

pub use fx_error::FxError;
