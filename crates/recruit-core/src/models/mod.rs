pub mod application;
pub mod options;

pub use application::{
    Application, ApplicationRecord, FieldKey, PortfolioFile, UploadReceipt,
};
pub use options::{Branch, Section, Vertical};
