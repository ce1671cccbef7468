use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("collection must contain at least one element")]
    EmptyCollection,

    #[error("deleting the only remaining element would leave the tree without a root")]
    WouldEmptyTree,
}

pub type TreeResult<T> = Result<T, TreeError>;
