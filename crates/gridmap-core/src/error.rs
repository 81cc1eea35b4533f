pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("panel {title:?} has a non-positive size ({width} x {height})")]
    NonPositivePanelSize {
        title: String,
        width: f64,
        height: f64,
    },
}
