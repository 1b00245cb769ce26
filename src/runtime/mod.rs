// scrollkeep runtime capabilities
// Small injected interfaces for time and the scrollable surface, plus the
// tokio timer driver that feeds real ticks into the engine.

pub mod clock;
pub mod driver;
pub mod viewport;

pub use clock::{Clock, FakeClock, SystemClock};
pub use driver::SamplerDriver;
pub use viewport::{FakeViewport, Viewport};
