//! The message shown to the user when wtf shuts down.
//!
//! Which message appears depends on whether the exit message is displayed at
//! all and on the user's [`SupportStatus`]. The decision is made once into an
//! [`ExitAudience`] and then mapped to text.

use log::debug;

use crate::emphasis::Emphasize;
use crate::support::SupportStatus;

/// Where sponsorship of the project is accepted.
pub const SPONSOR_URL: &str = "https://github.com/sponsors/senorprogrammer";

const CONTRIBUTOR_THANKS: &str =
    "On behalf of all the users of WTF, thank you for contributing to the source code.";
const CONTRIBUTOR_SIGNOFF: &str = "\n\n    You rock.";

const SPONSOR_THANKS: &str =
    "Your sponsorship of WTF makes a difference. Thank you for sponsoring and supporting WTF.";
const SPONSOR_SIGNOFF: &str = "\n\n    You're awesome.";

const SUPPORT_REQUEST: &str =
    "The development and maintenance of WTF is supported by sponsorships.";

/// Who the exit message is addressed to.
///
/// Variants are listed in priority order: a contributor who also sponsors
/// is addressed as a contributor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitAudience {
    /// The exit message is turned off.
    Suppressed,
    /// The user has contributed code.
    Contributor,
    /// The user sponsors the project.
    Sponsor,
    /// Neither a contributor nor a sponsor.
    DefaultUser,
}

impl ExitAudience {
    /// Decide the audience. `status` is not consulted when `display` is false.
    #[must_use]
    pub const fn resolve(display: bool, status: SupportStatus) -> Self {
        if !display {
            Self::Suppressed
        } else if status.is_contributor {
            Self::Contributor
        } else if status.is_sponsor {
            Self::Sponsor
        } else {
            Self::DefaultUser
        }
    }

    /// Render the message for this audience.
    #[must_use]
    pub fn message(self, emphasis: &dyn Emphasize) -> String {
        match self {
            Self::Suppressed => String::new(),
            Self::Contributor => contributor_thank_you(emphasis),
            Self::Sponsor => sponsor_thank_you(emphasis),
            Self::DefaultUser => support_request(emphasis),
        }
    }
}

/// Select and render the exit message.
///
/// Returns an empty string when `display` is false.
#[must_use]
pub fn exit_message(display: bool, status: SupportStatus, emphasis: &dyn Emphasize) -> String {
    let audience = ExitAudience::resolve(display, status);
    debug!("exit message audience: {audience:?}");
    audience.message(emphasis)
}

/// Thank-you message for code contributors.
#[must_use]
pub fn contributor_thank_you(emphasis: &dyn Emphasize) -> String {
    format!(
        "\n\n    {CONTRIBUTOR_THANKS} {}\n\n",
        emphasis.emphasize(CONTRIBUTOR_SIGNOFF)
    )
}

/// Thank-you message for sponsors.
#[must_use]
pub fn sponsor_thank_you(emphasis: &dyn Emphasize) -> String {
    format!(
        "\n\n    {SPONSOR_THANKS} {}\n\n",
        emphasis.emphasize(SPONSOR_SIGNOFF)
    )
}

/// Sponsorship request shown to everyone else.
#[must_use]
pub fn support_request(emphasis: &dyn Emphasize) -> String {
    format!(
        "\n\n    {SUPPORT_REQUEST}\n    Sponsor the development of WTF at {}\n\n",
        emphasis.emphasize(SPONSOR_URL)
    )
}
