//! iconfont core - turn a directory of SVG icons into a Flutter icon font.
//!
//! Every downstream artifact is positional: the icon at ordinal `i` gets
//! codepoint `0xE900 + i`, staged file `icon_<i>.svg` and the `i`-th constant
//! in the Dart binding. The loader fixes that order once, by relative path.

pub mod binding;
pub mod codepoints;
pub mod config;
pub mod error;
pub mod identifiers;
pub mod io;
pub mod loader;
pub mod normalize;
pub mod pipeline;
pub mod progress;
pub mod quiet;
pub mod readme;
pub mod staging;

pub use binding::render_binding;
pub use codepoints::{CodepointTable, codepoint};
pub use config::{BASE_CODEPOINT, Config, MAX_ICONS};
pub use error::{Error, Result};
pub use identifiers::IdentifierSet;
pub use loader::{IconEntry, load_icons};
pub use normalize::{NormalizedIcon, normalize_icon};
pub use pipeline::{RunSummary, run, run_with_progress};
pub use progress::{NoProgress, Progress};
