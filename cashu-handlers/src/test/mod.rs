//! Unit test module
//!
//! Handler unit tests live here, separate from source files.
//! A recording [`mock_bot::MockBot`] stands in for Telegram.

mod mock_bot;
