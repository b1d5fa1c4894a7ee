mod detail;
mod event;
mod headless;
mod runtime;
mod surface;

pub use detail::{DetailView, InfoPanel};
pub use event::{ViewerEvent, ViewerEventSender};
pub use headless::HeadlessViewer;
pub use runtime::ViewerRuntime;
pub use surface::{ModelSource, ViewerSurface};
