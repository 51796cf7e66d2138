use log::Level;

const IMAGE_CDN: &str = "https://images.unsplash.com";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Step transitions show up in the console while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
fn image_quality() -> u32 {
    60
}

#[cfg(not(debug_assertions))]
fn image_quality() -> u32 {
    80
}

/// Full URL for a CDN photo at the given width.
pub fn image_url(photo: &str, width: u32) -> String {
    format!("{}/{}?auto=format&fit=crop&q={}&w={}", IMAGE_CDN, photo, image_quality(), width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_carries_width() {
        let url = image_url("photo-1600585154340-be6161a56a0c", 800);
        assert!(url.starts_with("https://images.unsplash.com/photo-1600585154340-be6161a56a0c?"));
        assert!(url.ends_with("&w=800"));
    }
}
