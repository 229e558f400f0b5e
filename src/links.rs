use std::process::Command;

/// Hands URLs to something that can show them. Fire-and-forget.
pub trait LinkOpener {
    fn open_url(&self, url: &str);
}

/// Opens URLs with the platform's default browser.
pub struct DesktopLinkOpener;

impl LinkOpener for DesktopLinkOpener {
    fn open_url(&self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            return;
        }
        #[cfg(target_os = "macos")]
        {
            let _ = Command::new("open").arg(url).spawn();
        }
        #[cfg(target_os = "windows")]
        {
            let _ = Command::new("cmd").args(["/C", "start", "", url]).spawn();
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            let _ = Command::new("xdg-open").arg(url).spawn();
        }
    }
}

/// `<base>?q=<title>+astronomy`, with the title url-encoded.
pub fn search_url(base: &str, title: &str) -> String {
    format!("{}?q={}+astronomy", base, urlencoding::encode(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_single_word() {
        assert_eq!(
            search_url("https://www.google.com/search", "Planets"),
            "https://www.google.com/search?q=Planets+astronomy"
        );
    }

    #[test]
    fn test_search_url_encodes_title() {
        assert_eq!(
            search_url("https://www.google.com/search", "Space Missions"),
            "https://www.google.com/search?q=Space%20Missions+astronomy"
        );
    }
}
