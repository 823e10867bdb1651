use anyhow::{bail, Context, Result};

/// Open a recommendation link in the system browser.
///
/// Only http(s) links are handed to the OS.
pub fn open_url(url: &str) -> Result<()> {
    if !is_web_link(url) {
        bail!("Refusing to open non-web link: {}", url);
    }
    log::debug!("Opening {}", url);
    webbrowser::open(url).with_context(|| format!("Could not launch a browser for {}", url))
}

fn is_web_link(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}
