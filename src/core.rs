pub mod charging_period;
pub mod interval;
pub mod optimizer;
pub mod query;
pub mod tariff_period;
pub mod time_of_day;
pub mod time_window;
pub mod timestamp;
pub mod validator;
