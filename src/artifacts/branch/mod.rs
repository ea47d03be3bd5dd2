pub mod branch_name;
pub mod revision;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Name of the branch created by `init`
pub const DEFAULT_BRANCH_NAME: &str = "master";
