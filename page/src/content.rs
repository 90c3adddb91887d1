//! Literal page copy and link targets.

pub const LOGO: &str = "Prathamesh";

pub const INTRO: &str = "I'm a software engineer who strives to create \
frictionless user experiences and products that impact lives.";

pub const LOCATION: &str = "Dreaming and crafting in India.";

pub const CONTACT_LABEL: &str = "Contact";

/// Rendered as the email link's visible text and used as its `mailto:`
/// target.
pub const EMAIL_ADDRESS: &str = "prathameshg461@gmail.com";

/// Served next to the app; linked with the direct-download attribute.
pub const RESUME_PATH: &str = "/resume.pdf";

pub const RESUME_LINK_LABEL: &str = "↓";

pub const RESUME_LINK_TITLE: &str = "Download Resume";

pub fn mailto_href() -> String {
    format!("mailto:{EMAIL_ADDRESS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_literal() {
        assert_eq!(EMAIL_ADDRESS, "prathameshg461@gmail.com");
    }

    #[test]
    fn test_mailto_target_wraps_the_same_literal() {
        assert_eq!(mailto_href(), "mailto:prathameshg461@gmail.com");
    }

    #[test]
    fn test_resume_path_literal() {
        assert_eq!(RESUME_PATH, "/resume.pdf");
    }
}
