//! Quiz session: phases, transitions and the countdown resource.

mod countdown;
mod intent;
mod machine;
mod reducer;
mod state;

pub use countdown::{IntervalTicks, TickSink, TickSource, TickerGuard, TICK_PERIOD};
pub use intent::SessionIntent;
pub use machine::SessionMachine;
pub use reducer::{accepts, SessionReducer};
pub use state::{LoadTicket, Phase, Progress, SessionState};
