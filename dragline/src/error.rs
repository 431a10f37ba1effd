use crate::Orientation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    #[error("drag containers only support horizontal orientation, got {0:?}")]
    UnsupportedOrientation(Orientation),
}
