use thiserror::Error;

/// Why a [`super::CategoryMultimap`] operation was refused. The map is left
/// unchanged in every case.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryError {
    #[error("Category is already registered.")]
    CategoryExists,

    #[error("Category is not registered.")]
    UnknownCategory,

    #[error("Member already belongs to a category.")]
    AlreadyMember,

    #[error("Member does not belong to any category.")]
    UnknownMember,
}
