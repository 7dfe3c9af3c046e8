pub mod date_range;
pub mod period;
pub mod price_record;
pub mod request_params;
