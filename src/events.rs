/// Messages driving the demo event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Refresh timer fired
    Tick,

    // Ctrl+C or kill signal
    Shutdown,
}
