/// The closed set of element types an array can hold. Each one maps one-to-one to a
/// primitive type of the compiled language.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::EnumIter,
)]
pub enum ElementKind {
    Int,
    Double,
    Bool,
    Ptr,
}
