//! Promotional banners.

mod countdown;

pub use countdown::{
    render as render_countdown, zero_pad, Countdown, CountdownStyle, Remaining, DEFAULT_DEADLINE,
    FINISHED_MESSAGE,
};
