use serde::Serialize;

/// Coarse device form factor inferred from a user-agent string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceCategory {
    Phone,
    Tablet,
    Laptop,
    Desktop,
    Unknown,
}

impl DeviceCategory {
    /// Human-readable label used when no specific device matched.
    pub fn label(&self) -> &'static str {
        match self {
            DeviceCategory::Phone => "Generic phone",
            DeviceCategory::Tablet => "Generic tablet",
            DeviceCategory::Laptop => "Generic laptop",
            DeviceCategory::Desktop => "Generic desktop display",
            DeviceCategory::Unknown => "Unknown device",
        }
    }
}

/// Classify a platform/user-agent string into a coarse device category.
///
/// Substring heuristics only; inherently approximate. Phone checks run
/// before the desktop rules because "windows phone" contains "windows",
/// and the bare "android" token (no "mobile") is treated as a tablet per
/// Android UA conventions.
pub fn classify_user_agent(user_agent: &str) -> DeviceCategory {
    let ua = user_agent.to_ascii_lowercase();

    if ua.contains("iphone")
        || ua.contains("windows phone")
        || (ua.contains("android") && ua.contains("mobile"))
    {
        DeviceCategory::Phone
    } else if ua.contains("ipad")
        || ua.contains("tablet")
        || ua.contains("android")
        || ua.contains("kindle")
    {
        DeviceCategory::Tablet
    } else if ua.contains("macintosh") || ua.contains("mac os x") {
        DeviceCategory::Laptop
    } else if ua.contains("windows")
        || ua.contains("x11")
        || ua.contains("linux")
        || ua.contains("cros")
    {
        DeviceCategory::Desktop
    } else {
        DeviceCategory::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iphone_is_phone() {
        let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)";
        assert_eq!(classify_user_agent(ua), DeviceCategory::Phone);
    }

    #[test]
    fn test_android_mobile_is_phone() {
        let ua = "Mozilla/5.0 (Linux; Android 14; Pixel 8) Mobile Safari/537.36";
        assert_eq!(classify_user_agent(ua), DeviceCategory::Phone);
    }

    #[test]
    fn test_android_without_mobile_is_tablet() {
        let ua = "Mozilla/5.0 (Linux; Android 14; SM-X710) Safari/537.36";
        assert_eq!(classify_user_agent(ua), DeviceCategory::Tablet);
    }

    #[test]
    fn test_windows_phone_is_phone_not_desktop() {
        assert_eq!(
            classify_user_agent("Mozilla/5.0 (Windows Phone 10.0)"),
            DeviceCategory::Phone
        );
    }

    #[test]
    fn test_ipad_is_tablet() {
        let ua = "Mozilla/5.0 (iPad; CPU OS 17_0 like Mac OS X)";
        assert_eq!(classify_user_agent(ua), DeviceCategory::Tablet);
    }

    #[test]
    fn test_macintosh_is_laptop() {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)";
        assert_eq!(classify_user_agent(ua), DeviceCategory::Laptop);
    }

    #[test]
    fn test_windows_is_desktop() {
        let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
        assert_eq!(classify_user_agent(ua), DeviceCategory::Desktop);
        assert_eq!(classify_user_agent("Windows PC"), DeviceCategory::Desktop);
    }

    #[test]
    fn test_linux_is_desktop() {
        let ua = "Mozilla/5.0 (X11; Linux x86_64)";
        assert_eq!(classify_user_agent(ua), DeviceCategory::Desktop);
    }

    #[test]
    fn test_unrecognized_is_unknown() {
        assert_eq!(classify_user_agent(""), DeviceCategory::Unknown);
        assert_eq!(classify_user_agent("SmartFridge/1.0"), DeviceCategory::Unknown);
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        assert_eq!(classify_user_agent("IPHONE"), DeviceCategory::Phone);
        assert_eq!(classify_user_agent("WINDOWS NT"), DeviceCategory::Desktop);
    }
}
