//! whoami: report the invoking user.

use crate::commands::Outcome;
use crate::error::VfsResult;
use crate::identity::Identity;

pub(super) fn run(identity: &dyn Identity) -> VfsResult<Outcome> {
    Ok(Outcome::line(identity.username()))
}
