#[derive(Debug)]
pub enum SpatialError {
    UnknownReference(String),
}
