use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub business_alias: String,
    pub photo_url: String,
    pub file_name: String,
}

impl PhotoRecord {
    pub fn new(business_alias: &str, photo_url: &str) -> Self {
        Self {
            business_alias: business_alias.to_string(),
            photo_url: photo_url.to_string(),
            file_name: photo_file_name(business_alias, photo_url),
        }
    }
}

/// On-disk cache key for a photo: `{alias}_{md5(url)}.jpg`.
pub fn photo_file_name(business_alias: &str, photo_url: &str) -> String {
    let digest = Md5::digest(photo_url.as_bytes());
    format!("{}_{}.jpg", business_alias, hex::encode(digest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_uses_md5_of_url() {
        assert_eq!(
            photo_file_name("le-comptoir-paris", "https://example.com/a.jpg"),
            "le-comptoir-paris_7cff6e664a8bf6783610a2814043d343.jpg"
        );
    }

    #[test]
    fn file_name_is_deterministic() {
        let url = "https://s3-media1.fl.yelpcdn.com/bphoto/abc/o.jpg";
        assert_eq!(photo_file_name("sushi-dai", url), photo_file_name("sushi-dai", url));
        assert_eq!(
            photo_file_name("sushi-dai", url),
            "sushi-dai_182029a5705c6f0b213dbd463d98c827.jpg"
        );
    }

    #[test]
    fn different_urls_give_different_names() {
        let a = photo_file_name("sushi-dai", "https://example.com/a.jpg");
        let b = photo_file_name("sushi-dai", "https://example.com/b.jpg");
        assert_ne!(a, b);
        assert_eq!(b, "sushi-dai_7cbd613141b225b82e4589f5755c2b39.jpg");
    }

    #[test]
    fn record_carries_derived_name() {
        let photo = PhotoRecord::new("a", "https://example.com/a.jpg");
        assert_eq!(photo.file_name, photo_file_name("a", "https://example.com/a.jpg"));
    }
}
