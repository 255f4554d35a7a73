#![allow(unused_imports)]

pub use rivulet_containers::prelude as containers;
pub use rivulet_signal::prelude as signal;
pub use rivulet_ui::prelude as ui;

pub use rivulet_containers::prelude::SliceExt;
pub use rivulet_signal::prelude::{NoError, SignalExt};
