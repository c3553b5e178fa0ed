//! Platform speech capabilities exposed through the desktop webview.

mod speech;

pub use speech::{WebviewRecognizer, WebviewSynthesizer, probe_capabilities};
