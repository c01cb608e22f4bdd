//! The password / confirmation check run when the registration form is submitted.

use helpdesk_web_ui_shared::constants::MSG_PASSWORD_MISMATCH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitCheck {
    /// Let the browser submit the form as normal.
    Proceed,
    /// Cancel the submission and tell the user why.
    Block { message: &'static str },
}

impl SubmitCheck {
    pub fn for_pair(password: &str, confirmation: &str) -> Self {
        if password == confirmation {
            SubmitCheck::Proceed
        } else {
            SubmitCheck::Block {
                message: MSG_PASSWORD_MISMATCH,
            }
        }
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, SubmitCheck::Block { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::SubmitCheck;

    #[test]
    fn matching_pair_proceeds() {
        assert_eq!(SubmitCheck::for_pair("abc", "abc"), SubmitCheck::Proceed);
        assert_eq!(
            SubmitCheck::for_pair("Abc12345!", "Abc12345!"),
            SubmitCheck::Proceed
        );
        // strength isn't our concern here, empty passwords are left to the server
        assert_eq!(SubmitCheck::for_pair("", ""), SubmitCheck::Proceed);
    }

    #[test]
    fn mismatch_blocks() {
        let check = SubmitCheck::for_pair("Abc12345!", "Abc12345");
        assert!(check.is_blocked());
        assert_eq!(
            check,
            SubmitCheck::Block {
                message: "Passwords do not match."
            }
        );
    }

    #[test]
    fn comparison_is_exact() {
        assert!(SubmitCheck::for_pair("abc", "ABC").is_blocked());
        assert!(SubmitCheck::for_pair("abc", "abc ").is_blocked());
        assert!(SubmitCheck::for_pair("", "a").is_blocked());
    }
}
