//! Stylesheet assets: compilation, minification and output mapping.
//!
//! | Module     | Purpose                                         |
//! |------------|-------------------------------------------------|
//! | `compile`  | SCSS → expanded CSS (rsass)                     |
//! | `minify`   | expanded CSS → minified CSS (lightningcss)      |
//! | `route`    | `name.scss` → `name.css` / `name.min.css`       |
//! | `process`  | One entry end to end, with side effects         |
//! | `error`    | `BuildError`                                    |

mod compile;
mod error;
mod minify;
mod process;
mod route;

pub use compile::{SassOptions, compile_scss};
pub use error::BuildError;
pub use minify::minify_css;
pub use process::{CompiledEntry, process_entry};
pub use route::OutputRoute;
