pub mod prelude;

pub use rivulet_containers as containers;
pub use rivulet_signal as signal;
pub use rivulet_ui as ui;
