pub mod gallery;
pub mod menu;
pub mod navbar;
pub mod reveal;
pub mod sections;
pub mod smooth_scroll;

pub use gallery::{Gallery, GalleryMetrics, GestureSession};
pub use menu::{MenuState, MobileMenu};
pub use navbar::Navbar;
pub use reveal::ScrollReveal;
pub use sections::{PageMetrics, SectionBox};
pub use smooth_scroll::SmoothScroll;
