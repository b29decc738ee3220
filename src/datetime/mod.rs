mod delay;
mod humanize;

pub use delay::delay;
pub use humanize::{
    format_long_date, humanize_time_delta, humanize_time_delta_str, parse_timestamp,
};
