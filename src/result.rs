use crate::error::Error as TrellorErr;
pub type Result<T> = std::result::Result<T, TrellorErr>;
