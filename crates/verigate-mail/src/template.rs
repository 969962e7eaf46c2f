//! Plain-text mail templates.

pub fn verification_subject() -> &'static str {
    "Verify your VERIGATE account"
}

/// Body of the account-verification message.
pub fn verification_body(username: &str, verification_link: &str) -> String {
    format!(
        "Hello {username},\n\
        \n\
        Welcome to VERIGATE. Please verify your email address by opening \
        the link below:\n\
        \n\
        {verification_link}\n\
        \n\
        If you did not create this account, you can safely ignore this \
        message.\n\
        \n\
        — The VERIGATE team"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_contains_link_and_username() {
        let link = "http://localhost:5000/verify-email?token=abc123";
        let body = verification_body("alice", link);

        assert!(body.contains("alice"));
        assert!(body.contains(link), "link must be clearly visible");
        assert!(
            body.contains("did not create this account"),
            "body should address unrequested registrations"
        );

        // The link sits on its own line for visibility.
        assert!(body.lines().any(|l| l == link));
    }
}
